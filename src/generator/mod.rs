// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project generator abstraction.
//!
//! ```text
//! configure pipeline --> GeneratorContext --> Generator::generate(args)
//!                                                |
//!                                  CmakeGenerator (cmake -G<backend> args...)
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use crate::error::ProcessError;

pub mod cmake;

/// Context provided to a generator run.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    /// Directory the generator runs in; the project is generated relative to it.
    working_dir: PathBuf,

    /// When true, generators log what they would run without spawning anything.
    dry_run: bool,
}

impl GeneratorContext {
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            working_dir: working_dir.into(),
            dry_run,
        }
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Something that regenerates the IDE project from the build description.
///
/// Arguments are the ones the program itself was invoked with and must be
/// passed through unchanged.
pub trait Generator: Send + Sync {
    /// Returns the name of this generator (e.g., "cmake").
    fn name(&self) -> &str;

    /// Runs the generator once and waits for it.
    ///
    /// # Returns
    /// * `Ok(())` if the generator exited successfully (or in dry-run mode)
    /// * `Err(...)` if it could not be started, timed out, or exited non-zero
    fn generate<'a>(
        &'a self,
        ctx: &'a GeneratorContext,
        args: &'a [OsString],
    ) -> BoxFuture<'a, Result<(), ProcessError>>;
}

#[cfg(test)]
mod test_utils;
