// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> Env (BTreeMap<String, String> snapshot)
//!                     |
//!                     v
//!   RequiredEnv::resolve(&env, names)
//!     Ok:  [(name, value), ...] in declaration order
//!     Err: EnvError::MissingVariable { name }
//! ```
//!
//! The process environment is read exactly once; everything downstream works
//! on the snapshot.

pub mod container;
pub mod required;


/// Captures the current process environment.
///
/// Names or values that are not valid Unicode are converted lossily.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();
    container::Env::from_map(vars)
}
