// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line for vkscheme.
//!
//! ```text
//! vkscheme [ARGS...]  -->  cmake -GXcode [ARGS...]
//! ```
//!
//! The program owns no flags. `--help`, `--version` and everything else
//! belong to the generator. Settings come from `vkscheme.toml` and
//! `VKSCHEME_*` variables instead.


use std::ffi::OsString;

use clap::Parser;

/// Regenerates an Xcode project and points its scheme at the Vulkan loader.
#[derive(Debug, Parser)]
#[command(
    name = "vkscheme",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `vkscheme.toml` in the current directory\n\
                  and from VKSCHEME_<SECTION>__<KEY> environment variables, e.g.\n\
                  VKSCHEME_GLOBAL__DRY=true."
)]
pub struct Cli {
    /// Arguments passed to the generator unchanged.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub generator_args: Vec<OsString>,
}

/// Parses the process's command-line arguments.
///
/// Nothing is rejected, so this never exits early.
#[must_use]
pub fn parse() -> Cli {
    parse_from(std::env::args_os())
}

/// Parses command-line arguments from an iterator whose first item is the
/// program name.
///
/// clap drops a bare `--` as its end-of-options marker, so the forwarded
/// list is taken from the raw arguments rather than from the matches.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw: Vec<OsString> = iter.into_iter().map(Into::into).collect();
    let mut cli = Cli::parse_from(&raw);
    cli.generator_args = raw.into_iter().skip(1).collect();
    cli
}
