// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_configure_command
//!   failure --> cmd::render_error
//! ```

pub mod configure;

pub use configure::{render_error, run_configure_command};
