// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!          core
//!           |
//!     +-----+-----+
//!     |           |
//!     v           v
//!    env       process
//!     |           |
//!   Env        Builder
//!   RequiredEnv Output
//! ```

pub mod env;
pub mod process;
