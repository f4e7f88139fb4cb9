//! Tests for config file discovery (current dir, user config, fallback).

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .in_dir("/my/project")
        .with_file("/my/project/.file-probe.toml", r#"extensions = [".rs"]"#);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.extensions, [".rs"]);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/project/.file-probe.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/file-probe/config.toml",
        r#"output = "probe.json""#,
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.output, PathBuf::from("probe.json"));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.file-probe.toml", r#"extensions = [".go"]"#)
        .with_file(
            "/home/user/.config/file-probe/config.toml",
            r#"extensions = [".java"]"#,
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.extensions, [".go"]);
}

#[test]
fn missing_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().without_user_config_dir();

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config, Config::default());
}

#[test]
fn load_from_path_requires_existing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/custom.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("not found"));
}

#[test]
fn load_from_path_ignores_default_locations() {
    let fs = MockFileSystem::new()
        .with_file("/project/.file-probe.toml", r#"extensions = [".go"]"#)
        .with_file("/etc/probe.toml", r#"extensions = [".c", ".h"]"#);

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/probe.toml"))
        .unwrap();

    assert_eq!(result.config.extensions, [".c", ".h"]);
    assert_eq!(result.source, Some(PathBuf::from("/etc/probe.toml")));
}

#[test]
fn unreadable_local_config_is_error() {
    let fs = MockFileSystem::new()
        .with_unreadable("/project/.file-probe.toml")
        .with_file(
            "/home/user/.config/file-probe/config.toml",
            r#"extensions = [".java"]"#,
        );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("cannot read configuration file"));
}
