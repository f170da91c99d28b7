// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use super::CmakeGenerator;
use crate::config::types::GeneratorConfig;
use crate::error::ProcessError;
use crate::generator::test_utils::capture_logs;
use crate::generator::{Generator, GeneratorContext};

fn args(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}

#[test]
fn test_backend_flag() {
    assert_eq!(CmakeGenerator::new().backend_flag(), "-GXcode");
    assert_eq!(
        CmakeGenerator::new().backend("Ninja").backend_flag(),
        "-GNinja"
    );
}

#[test]
fn test_from_config() {
    let config = GeneratorConfig {
        program: PathBuf::from("/opt/cmake/bin/cmake"),
        backend: "Xcode".to_string(),
        timeout_secs: Some(30),
    };
    let generator = CmakeGenerator::from_config(&config);
    insta::assert_debug_snapshot!(generator, @r#"
    CmakeGenerator {
        program: "/opt/cmake/bin/cmake",
        backend: "Xcode",
        timeout: Some(
            30s,
        ),
    }
    "#);
}

#[test]
fn test_process_passes_arguments_through() {
    let ctx = GeneratorContext::new("/tmp/build", false);
    let builder = CmakeGenerator::new()
        .program("/opt/cmake/bin/cmake")
        .process(&ctx, &args(&["..", "-DCMAKE_BUILD_TYPE=Debug", "--fresh"]))
        .unwrap();

    insta::assert_snapshot!(builder.command_line(), @"/opt/cmake/bin/cmake -GXcode .. -DCMAKE_BUILD_TYPE=Debug --fresh");
}

#[test]
fn test_process_bare_name_missing_from_path() {
    let ctx = GeneratorContext::new(".", false);
    let err = CmakeGenerator::new()
        .program("cmake_that_does_not_exist_42")
        .process(&ctx, &[])
        .unwrap_err();

    assert!(matches!(err, ProcessError::ExecutableNotFound { .. }));
}

#[tokio::test(flavor = "current_thread")]
async fn test_generate_dry_run() {
    let ctx = GeneratorContext::new("/tmp/build", true);
    let generator = CmakeGenerator::new().program("cmake_that_does_not_exist_42");
    let forwarded = args(&[".."]);

    let (result, logs) = capture_logs(generator.generate(&ctx, &forwarded)).await;

    result.unwrap();
    insta::assert_snapshot!(logs, @r#"[dry-run] Would generate project program=cmake_that_does_not_exist_42 backend=Xcode args=[".."] cwd=/tmp/build"#);
}

#[cfg(unix)]
#[tokio::test]
async fn test_generate_success() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = GeneratorContext::new(dir.path(), false);

    CmakeGenerator::new()
        .program("true")
        .generate(&ctx, &args(&[".."]))
        .await
        .unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_generate_non_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = GeneratorContext::new(dir.path(), false);

    let err = CmakeGenerator::new()
        .program("false")
        .timeout(Duration::from_secs(30))
        .generate(&ctx, &args(&[".."]))
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::NonZeroExit { code: 1, .. }));
}
