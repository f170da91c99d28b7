// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!         VkError (16 bytes)
//!               |
//!     +------+--+---+--------+
//!     |      |      |        |
//!     v      v      v        v
//!    Env  Process Scheme  Config
//!    Box    Box    Box     Box
//!
//! Sub-errors:
//!   Env     MissingVariable
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit, Timeout, OutputError
//!   Scheme  NotFound, Parse, MissingElement, Io
//!   Config  ParseError, InvalidValue
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VkError`].
pub type VkResult<T> = std::result::Result<T, VkError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum VkError {
    /// A required environment variable is missing.
    #[error(transparent)]
    Env(Box<EnvError>),

    /// The generator process failed.
    #[error(transparent)]
    Process(Box<ProcessError>),

    /// The scheme file could not be located, parsed or written.
    #[error(transparent)]
    Scheme(Box<SchemeError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VkError {
                fn from(err: $error) -> Self {
                    VkError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ProcessError => Process,
    SchemeError => Scheme,
    ConfigError => Config,
}

// --- Environment Errors ---

/// Required environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The variable is not present in the environment at all.
    ///
    /// An empty value counts as present.
    #[error("{name} environment variable required but not found.")]
    MissingVariable { name: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a status outside the success set.
    ///
    /// `stderr` holds the decoded error stream when it was captured.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Failed to wait on the process or read its output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Scheme Errors ---

/// Xcode scheme errors.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// The scheme file does not exist after generation.
    #[error("Could not find scheme: {}\nEnvironment variables not set!", path.display())]
    NotFound { path: PathBuf },

    /// The scheme file is not well-formed XML.
    #[error("failed to parse scheme '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// An element the patcher depends on is absent.
    #[error("scheme '{}' has no <{element}> element", path.display())]
    MissingElement { path: PathBuf, element: String },

    /// Reading or writing the scheme file failed.
    #[error("I/O error on scheme '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or deserialize the configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
