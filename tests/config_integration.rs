// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::config::{self, Config, NotificationConfig, TransitionConfig};
use iced_toast::ui::notifications::{Notification, NotificationConfig as ToastConfig};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn saved_settings_drive_new_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let settings = Config {
        notification: NotificationConfig {
            duration_ms: Some(0),
            top_offset: Some(48.0),
        },
        transition: TransitionConfig {
            enter_ms: Some(120),
            exit_ms: Some(80),
        },
    };
    config::save_to_path(&settings, &dir.path().join("settings.toml"))
        .expect("Failed to save settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, settings);

    let defaults = loaded.defaults();
    let toast_config = ToastConfig::from_defaults(defaults).title("Synced");
    assert!(!toast_config.auto_dismisses());
    assert_eq!(toast_config.enter_duration(), Duration::from_millis(120));
    assert_eq!(toast_config.exit_duration(), Duration::from_millis(80));

    let mut toast = Notification::new(toast_config);
    let _ = toast.mount();
    assert!(!toast.has_pending_timer());
    assert!((toast.top_offset() - 48.0).abs() < f32::EPSILON);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn partial_file_keeps_documented_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[transition]\nexit_ms = 500\n")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let defaults = loaded.defaults();
    assert_eq!(defaults.duration, Duration::from_millis(4500));
    assert!((defaults.top_offset - 16.0).abs() < f32::EPSILON);
    assert_eq!(defaults.exit, Duration::from_millis(500));
}

#[test]
fn broken_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notification\nduration_ms = 1")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some_and(|text| !text.is_empty()));
}
