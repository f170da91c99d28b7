// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> run_configure_command --> ExitCode
//! ```

use std::path::Path;
use std::process::ExitCode;

use tracing::debug;
use vkscheme::cli;
use vkscheme::cmd::{render_error, run_configure_command};
use vkscheme::config::loader::ConfigLoader;
use vkscheme::config::types::GlobalConfig;
use vkscheme::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use vkscheme::core::env::current_env;
use vkscheme::error::VkError;
use vkscheme::generator::cmake::CmakeGenerator;
use vkscheme::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = build_config_loader();
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for line in loaded_files {
        debug!("{line}");
    }
    for line in config.format_options() {
        debug!("{line}");
    }

    let generator = CmakeGenerator::from_config(&config.generator);
    let env = current_env();
    match run_configure_command(
        &cli.generator_args,
        &config,
        &env,
        &generator,
        Path::new("."),
    )
    .await
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader() -> ConfigLoader {
    Config::builder()
        .add_toml_file_optional(CONFIG_FILE_NAME)
        .with_env_prefix(ENV_PREFIX)
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

/// Prints the user-facing message for a failed run.
fn report(err: &VkError) {
    debug!(error = ?err, "configure failed");
    eprintln!("{}", render_error(err));
}
