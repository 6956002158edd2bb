// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   List | Show | Set | Delete | Path | Export | Options | Inis
//! ```

use std::process::ExitCode;

use envv_rs::cli::global::GlobalOptions;
use envv_rs::cli::{self, Command};
use envv_rs::cmd::config::{run_inis_command, run_options_command};
use envv_rs::cmd::delete::run_delete_command;
use envv_rs::cmd::export::run_export_command;
use envv_rs::cmd::list::run_list_command;
use envv_rs::cmd::path::run_path_command;
use envv_rs::cmd::set::run_set_command;
use envv_rs::cmd::show::run_show_command;
use envv_rs::config::Config;
use envv_rs::config::loader::ConfigLoader;
use envv_rs::logging::init_logging;
use envv_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(_) => return ExitCode::FAILURE,
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.output_log_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.global.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let dry = cli.global.dry || config.global.dry;

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::List(args)) => run_list_command(args, config, dry),
        Some(Command::Show(args)) => run_show_command(args, config, dry),
        Some(Command::Set(args)) => run_set_command(args, config, dry),
        Some(Command::Delete(args)) => run_delete_command(args, config, dry),
        Some(Command::Path(args)) => run_path_command(args, config, dry),
        Some(Command::Export(args)) => run_export_command(args, config, dry),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("envv.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("ENVV")
}

fn load_config(global: &GlobalOptions) -> envv_rs::error::Result<Config> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
