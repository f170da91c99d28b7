// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, GeneratorConfig, ProjectConfig, SchemeConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Skip the generator and leave the scheme file untouched.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Build-configuration generator (CMake) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generator executable; bare names are resolved through PATH.
    pub program: PathBuf,
    /// Backend passed as `-G<backend>`.
    pub backend: String,
    /// Upper bound on the generator run. Unbounded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("cmake"),
            backend: "Xcode".to_string(),
            timeout_secs: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Names of the generated Xcode project and its shared scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project file stem, as in `<root>.xcodeproj`.
    pub root: String,
    /// Scheme name, as in `<scheme>.xcscheme`.
    pub scheme: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: "GuppyVulkan".to_string(),
            scheme: "Guppy".to_string(),
        }
    }
}

/// How the scheme's launch environment is patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeConfig {
    /// Environment variables that must be set and are injected, in declaration order.
    pub required_vars: Vec<String>,
    /// Value written to each entry's `isEnabled` attribute.
    pub enabled_marker: String,
    /// Drop existing entries with the same key before inserting.
    pub replace_existing: bool,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            required_vars: vec!["VK_ICD_FILENAMES".to_string(), "VK_LAYER_PATH".to_string()],
            enabled_marker: "YES".to_string(),
            replace_existing: false,
        }
    }
}
