// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!          cli (clap)          cmd::configure
//!      args pass-through               |
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + VKSCHEME_* vars   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            generator     scheme    core::env
//!          cmake -G...   xcscheme   required vars
//!                 |
//!                 v
//!           core::process
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod logging;
pub mod scheme;
