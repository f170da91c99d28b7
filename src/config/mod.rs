// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vkscheme.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. vkscheme.toml (cwd, optional)
//! 3. VKSCHEME_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VKSCHEME_GLOBAL__DRY=true               → global.dry = true
//! VKSCHEME_GENERATOR__TIMEOUT_SECS=600    → generator.timeout_secs = 600
//! VKSCHEME_SCHEME__REPLACE_EXISTING=true  → scheme.replace_existing = true
//! VKSCHEME_SCHEME__REQUIRED_VARS=A,B      → scheme.required_vars = ["A", "B"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::scheme::SchemeLocation;

use loader::ConfigLoader;
use types::{GeneratorConfig, GlobalConfig, ProjectConfig, SchemeConfig};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vkscheme.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "VKSCHEME";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Generator invocation.
    pub generator: GeneratorConfig,
    /// Generated project names.
    pub project: ProjectConfig,
    /// Scheme patching.
    pub scheme: SchemeConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vkscheme::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("vkscheme.toml")
    ///     .with_env_prefix("VKSCHEME")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The scheme location described by `[project]`.
    #[must_use]
    pub fn scheme_location(&self) -> SchemeLocation {
        SchemeLocation::new(&self.project.root, &self.project.scheme)
    }

    /// Check values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.generator.program.as_os_str().is_empty() {
            return Err(invalid("generator", "program", "must not be empty"));
        }
        if self.generator.backend.is_empty() {
            return Err(invalid("generator", "backend", "must not be empty"));
        }
        if self.generator.timeout_secs == Some(0) {
            return Err(invalid("generator", "timeout_secs", "must be positive"));
        }
        if self.project.root.is_empty() {
            return Err(invalid("project", "root", "must not be empty"));
        }
        if self.project.scheme.is_empty() {
            return Err(invalid("project", "scheme", "must not be empty"));
        }
        if self.scheme.required_vars.is_empty() {
            return Err(invalid("scheme", "required_vars", "must not be empty"));
        }
        if self.scheme.required_vars.iter().any(String::is_empty) {
            return Err(invalid(
                "scheme",
                "required_vars",
                "variable names must not be empty",
            ));
        }
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "generator.program",
            self.generator.program.display().to_string(),
        );
        options.insert("generator.backend", self.generator.backend.clone());
        options.insert(
            "generator.timeout_secs",
            self.generator
                .timeout_secs
                .map_or_else(String::new, |t| t.to_string()),
        );
        options.insert("project.root", self.project.root.clone());
        options.insert("project.scheme", self.project.scheme.clone());
        options.insert("scheme.required_vars", self.scheme.required_vars.join(","));
        options.insert("scheme.enabled_marker", self.scheme.enabled_marker.clone());
        options.insert(
            "scheme.replace_existing",
            self.scheme.replace_existing.to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
