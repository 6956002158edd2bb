// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config introspection commands (options, inis) for envv-rs.

use crate::config::Config;

/// Main handler for the options command.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Main handler for the inis command.
pub fn run_inis_command(files: &[String]) {
    if files.is_empty() {
        println!("No INI files loaded");
    } else {
        for file in files {
            println!("{file}");
        }
    }
}
