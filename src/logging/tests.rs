// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the logging module.

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert!(LogLevel::new(255).is_err());
}

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::TRACE));
    assert_eq!(LogLevel::from_u8(6), None);
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::ERROR.to_tracing_level(), Some(Level::ERROR));
    assert_eq!(LogLevel::WARN.to_tracing_level(), Some(Level::WARN));
    assert_eq!(LogLevel::INFO.to_tracing_level(), Some(Level::INFO));
    assert_eq!(LogLevel::DEBUG.to_tracing_level(), Some(Level::DEBUG));
    assert_eq!(LogLevel::TRACE.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_filter_strings() {
    let rendered: Vec<&str> = (0..=5)
        .map(|n| LogLevel::new(n).unwrap().to_filter_string())
        .collect();
    insta::assert_snapshot!(rendered.join(","), @"off,error,warn,info,debug,trace");
}

#[test]
fn test_log_level_roundtrip_u8() {
    for n in 0..=5u8 {
        let level = LogLevel::new(n).unwrap();
        assert_eq!(u8::from(level), n);
        assert_eq!(level.as_u8(), n);
    }
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_file_level(LogLevel::TRACE)
        .with_log_file("logs/envv.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("logs/envv.log"));
}
