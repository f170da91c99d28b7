// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` project generation.
//!
//! ```text
//! CmakeGenerator
//!   program  (bare name => PATH lookup)
//!   -G<backend>  (default -GXcode)
//!   pass-through args, verbatim
//!   stdout inherited, stderr captured
//!   optional timeout
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Generator, GeneratorContext};
use crate::config::types::GeneratorConfig;
use crate::core::process::builder::ProcessBuilder;
use crate::error::ProcessError;

/// Runs `cmake -G<backend> <args...>` to (re)generate the IDE project.
#[derive(Debug, Clone)]
pub struct CmakeGenerator {
    program: PathBuf,
    backend: String,
    timeout: Option<Duration>,
}

impl CmakeGenerator {
    /// Creates a generator for `cmake -GXcode`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            program: config.program.clone(),
            backend: config.backend.clone(),
            timeout: config.timeout(),
        }
    }

    #[must_use]
    pub fn program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The backend selection flag, e.g. `-GXcode`.
    #[must_use]
    pub fn backend_flag(&self) -> String {
        format!("-G{}", self.backend)
    }

    /// Builds the process for one run.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the program is a bare
    /// name that is not on PATH.
    pub fn process(
        &self,
        ctx: &GeneratorContext,
        args: &[OsString],
    ) -> Result<ProcessBuilder, ProcessError> {
        let mut builder = match self.program.to_str() {
            Some(name) if self.program.components().count() == 1 => ProcessBuilder::which(name)?,
            _ => ProcessBuilder::new(&self.program),
        };

        builder = builder
            .name(self.name())
            .arg(self.backend_flag())
            .args(args)
            .cwd(ctx.working_dir())
            .inherit_stdout()
            .capture_stderr();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder)
    }
}

impl Default for CmakeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for CmakeGenerator {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn generate<'a>(
        &'a self,
        ctx: &'a GeneratorContext,
        args: &'a [OsString],
    ) -> BoxFuture<'a, Result<(), ProcessError>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(
                    program = %self.program.display(),
                    backend = %self.backend,
                    args = ?args,
                    cwd = %ctx.working_dir().display(),
                    "[dry-run] Would generate project"
                );
                return Ok(());
            }

            let builder = self.process(ctx, args)?;
            debug!(cmd = %builder.command_line(), "Generating project");
            builder.run().await?;

            info!(backend = %self.backend, "Project generated");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests;
