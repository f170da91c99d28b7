// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML files and overrides.

use std::path::PathBuf;
use std::time::Duration;

use vkscheme::config::{CONFIG_FILE_NAME, Config};

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_load_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[generator]
program = "/opt/homebrew/bin/cmake"
timeout_secs = 300

[project]
root = "GuppyVulkan"
scheme = "GuppyTests"
"#,
    )
    .unwrap();

    let loader = Config::builder().add_toml_file_optional(&path);
    assert_eq!(loader.loaded_files().len(), 1);

    let config = loader.build().unwrap();
    assert_eq!(
        config.generator.program,
        PathBuf::from("/opt/homebrew/bin/cmake")
    );
    assert_eq!(config.generator.timeout(), Some(Duration::from_secs(300)));
    assert!(
        config
            .scheme_location()
            .relative_path()
            .ends_with("xcschemes/GuppyTests.xcscheme")
    );
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::builder()
        .add_toml_file(dir.path().join(CONFIG_FILE_NAME))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_invalid_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[scheme\nreplace_existing = true\n").unwrap();

    let result = Config::builder().add_toml_file_optional(&path).build();
    assert!(result.is_err());
}

// =============================================================================
// Environment overrides
// =============================================================================

#[test]
fn config_env_prefix_overrides_file() {
    // SAFETY: the variable names are unique to this test.
    unsafe {
        std::env::set_var("VKSCHEMETEST_SCHEME__REPLACE_EXISTING", "true");
        std::env::set_var("VKSCHEMETEST_GENERATOR__TIMEOUT_SECS", "45");
    }

    let config = Config::builder()
        .add_toml_str("[scheme]\nreplace_existing = false\n")
        .with_env_prefix("VKSCHEMETEST")
        .build()
        .unwrap();

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("VKSCHEMETEST_SCHEME__REPLACE_EXISTING");
        std::env::remove_var("VKSCHEMETEST_GENERATOR__TIMEOUT_SECS");
    }

    assert!(config.scheme.replace_existing);
    assert_eq!(config.generator.timeout(), Some(Duration::from_secs(45)));
}

#[test]
fn config_env_prefix_sets_required_vars_list() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var(
            "VKSCHEMELIST_SCHEME__REQUIRED_VARS",
            "VK_ICD_FILENAMES,VK_LAYER_PATH,MVK_CONFIG_LOG_LEVEL",
        );
    }

    let result = Config::builder().with_env_prefix("VKSCHEMELIST").build();

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("VKSCHEMELIST_SCHEME__REQUIRED_VARS");
    }

    let config = result.unwrap();
    assert_eq!(
        config.scheme.required_vars,
        ["VK_ICD_FILENAMES", "VK_LAYER_PATH", "MVK_CONFIG_LOG_LEVEL"]
    );
}

// =============================================================================
// Options listing
// =============================================================================

#[test]
fn config_format_options_reflects_overrides() {
    let config = Config::parse("[global]\ndry = true\n").unwrap();
    let options = config.format_options();

    assert!(options.iter().any(|line| line.starts_with("global.dry") && line.ends_with("= true")));
    assert!(
        options
            .iter()
            .any(|line| line.starts_with("scheme.required_vars") && line.ends_with("= VK_ICD_FILENAMES,VK_LAYER_PATH"))
    );
}
