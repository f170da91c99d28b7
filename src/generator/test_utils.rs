// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for generator tests.

use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Shared sink the test subscriber writes formatted events into.
#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl LogSink {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Awaits `fut` with an INFO subscriber installed on this thread.
///
/// Returns the future's output and the captured lines, trimmed, without
/// time, level or target.
pub(super) async fn capture_logs<F: Future>(fut: F) -> (F::Output, String) {
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .finish();

    let output = {
        let _guard = tracing::subscriber::set_default(subscriber);
        fut.await
    };

    let logs = sink
        .contents()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    (output, logs)
}
