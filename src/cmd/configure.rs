// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The configure pipeline.
//!
//! ```text
//! RequiredEnv::resolve(env)      missing --> EnvError
//!   --> Generator::generate(args)  failed --> ProcessError
//!   --> SchemeLocation::locate     absent --> SchemeError::NotFound
//!   --> SchemeDocument::load --> SchemePatcher::apply --> save
//! ```
//!
//! Each stage runs only if the one before it succeeded. Nothing is rolled
//! back: a generated project with an unpatched scheme stays on disk.

use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::required::RequiredEnv;
use crate::error::{ProcessError, SchemeError, VkError, VkResult};
use crate::generator::{Generator, GeneratorContext};
use crate::scheme::{PatchReport, SchemeDocument, SchemePatcher};

/// Regenerates the project and injects the required variables into its scheme.
///
/// `args` go to the generator unchanged. `working_dir` is where the generator
/// runs and where the scheme is looked up.
///
/// # Errors
///
/// Returns the first failure: a missing required variable, a generator that
/// fails, a scheme that is absent or malformed, or a failed write.
pub async fn run_configure_command(
    args: &[OsString],
    config: &Config,
    env: &Env,
    generator: &dyn Generator,
    working_dir: &Path,
) -> VkResult<PatchReport> {
    let dry_run = config.global.dry;

    let vars = RequiredEnv::resolve(env, &config.scheme.required_vars)?;
    debug!(count = vars.len(), "required variables present");

    let ctx = GeneratorContext::new(working_dir, dry_run);
    generator.generate(&ctx, args).await?;

    let path = config.scheme_location().locate(working_dir)?;
    println!("\nUpdating scheme: {}", path.display());

    let mut doc = SchemeDocument::load(&path)?;
    let report = SchemePatcher::from_config(&config.scheme).apply(&mut doc, &vars)?;

    if dry_run {
        info!(path = %path.display(), "[dry-run] Would write scheme");
    } else {
        doc.save()?;
    }

    info!(
        path = %report.path.display(),
        created_container = report.created_container,
        inserted = ?report.inserted,
        removed = report.removed,
        "Scheme updated"
    );
    Ok(report)
}

/// The message printed for a failed run.
///
/// A missing variable and a missing scheme print their own text. A generator
/// that exits non-zero prints its decoded stderr. Everything else is prefixed
/// with `Error: `.
#[must_use]
pub fn render_error(err: &VkError) -> String {
    match err {
        VkError::Env(e) => e.to_string(),
        VkError::Process(e) => match e.as_ref() {
            ProcessError::NonZeroExit { stderr, .. } => format!("Error: {stderr}"),
            other => format!("Error: {other}"),
        },
        VkError::Scheme(e) if matches!(e.as_ref(), SchemeError::NotFound { .. }) => e.to_string(),
        other => format!("Error: {other}"),
    }
}
