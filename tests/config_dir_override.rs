// SPDX-License-Identifier: MPL-2.0
//! `--config-dir` reaches the loader through `paths::init_cli_overrides` only.
//! Runs in its own test binary because the override is process-global.

use iced_toast::app::{config, paths};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn cli_config_dir_drives_default_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[notification]\nduration_ms = 1200\n",
    )
    .expect("Failed to write settings");

    paths::init_cli_overrides(Some(dir.path().to_string_lossy().into_owned()));
    assert_eq!(paths::get_app_config_dir(), Some(dir.path().to_path_buf()));

    let (loaded, warning) = config::load();
    assert!(warning.is_none());
    assert_eq!(loaded.defaults().duration, Duration::from_millis(1200));

    // The first value wins.
    paths::init_cli_overrides(Some("/elsewhere".to_string()));
    assert_eq!(paths::get_app_config_dir(), Some(dir.path().to_path_buf()));
}
