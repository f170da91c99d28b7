// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::builder::{ProcessBuilder, StreamFlags};
use crate::error::ProcessError;

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("cmake")
        .arg("-GXcode")
        .args(["-DCMAKE_BUILD_TYPE=Debug", "../Guppy Vulkan"]);

    insta::assert_snapshot!(builder.command_line(), @r#"cmake -GXcode -DCMAKE_BUILD_TYPE=Debug "../Guppy Vulkan""#);
    assert_eq!(builder.args_slice().len(), 3);
}

#[test]
fn test_stream_flags_default() {
    assert_eq!(StreamFlags::default(), StreamFlags::FORWARD_TO_LOG);
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let err = ProcessBuilder::which(program).unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { ref name } if name == program));
    assert!(ProcessBuilder::which(program).is_err());
}

#[cfg(unix)]
#[test]
fn test_executable_lookup_found() {
    let builder = ProcessBuilder::which("sh").expect("sh should be in PATH");
    assert!(builder.program().is_absolute());

    let cached = ProcessBuilder::which("sh").unwrap();
    assert_eq!(cached.program(), builder.program());
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_captures_stdout() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo hello"])
        .stdout_flags(StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout(), @"hello");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_carries_stderr() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo 'first line' >&2; echo 'second line' >&2; exit 42"])
        .quiet()
        .capture_stderr()
        .run()
        .await
        .unwrap_err();

    let ProcessError::NonZeroExit { code, stderr, .. } = err else {
        panic!("expected NonZeroExit, got {err:?}");
    };
    assert_eq!(code, 42);
    assert_eq!(stderr, "first line\nsecond line");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_stderr_not_kept_when_discarded() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo noise >&2; exit 1"])
        .quiet()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::NonZeroExit { ref stderr, .. } if stderr.is_empty()));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_many_stderr_lines() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "i=0; while [ $i -lt 500 ]; do echo line$i >&2; i=$((i+1)); done"])
        .quiet()
        .capture_stderr()
        .run()
        .await
        .expect("loop should succeed");

    assert_eq!(output.stderr().lines().count(), 500);
    assert_eq!(output.stderr().lines().last(), Some("line499"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "pwd"])
        .cwd(dir.path())
        .stdout_flags(StreamFlags::KEEP_IN_STRING)
        .run()
        .await
        .unwrap();

    let expected = dir.path().canonicalize().unwrap();
    let actual = std::path::PathBuf::from(output.stdout().trim())
        .canonicalize()
        .unwrap();
    assert_eq!(actual, expected);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_timeout_kills_child() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exec sleep 30"])
        .quiet()
        .timeout(Duration::from_millis(200))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::Timeout { timeout_secs: 0, .. }));
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/dir/generator")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::SpawnFailed { .. }));
}
