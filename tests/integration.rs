// SPDX-License-Identifier: MPL-2.0
use hover_notify::config::{self, Config};
use hover_notify::notifications::{ManualClock, NotificationCenter, TextRenderer};
use iced_core::Size;
use tempfile::tempdir;

fn viewport() -> Size {
    Size::new(1280.0, 720.0)
}

#[test]
fn settings_file_drives_capacities_at_runtime() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: room for three notifications, ten history entries
    let mut initial = Config::default();
    initial.notifications.max_notifications = Some(3);
    initial.notifications.max_history = Some(10);
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let clock = ManualClock::new();
    let mut center = NotificationCenter::new(clock.clone());
    center.on_init(&loaded.snapshot(), viewport());

    for i in 0..10 {
        center.start(&format!("event {i}"), 30.0);
    }
    assert_eq!(center.active().count(), 3);

    // 2. The user edits the file: smaller pool and history
    let mut edited = loaded.clone();
    edited.notifications.max_notifications = Some(1);
    edited.notifications.max_history = Some(4);
    config::save_to_path(&edited, &config_path).expect("Failed to write edited config");
    let reloaded = config::load_from_path(&config_path).expect("Failed to reload config");

    clock.advance_secs(0.016);
    center.update(&reloaded.snapshot());

    let active: Vec<_> = center.active().map(|n| n.text().to_owned()).collect();
    assert_eq!(active, vec!["event 9"]);
    let history: Vec<_> = center
        .history()
        .expect("center is initialized")
        .iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(history, vec!["event 6", "event 7", "event 8", "event 9"]);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn misconfigured_capacities_are_clamped_not_fatal() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\nmax_notifications = 0\nmax_history = -10\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut center = NotificationCenter::new(ManualClock::new());
    center.on_init(&config.snapshot(), viewport());
    assert!(center.start_default("still works"));

    assert_eq!(center.active().count(), 1);
    assert_eq!(center.history().map(|h| h.capacity()), Some(1));
}

#[test]
fn frame_loop_renders_until_expiry() {
    let settings = Config::default().snapshot();
    let clock = ManualClock::new();
    let mut center = NotificationCenter::new(clock.clone());
    center.on_init(&settings, viewport());
    let mut renderer = TextRenderer::new();

    center.start("Connected", 2.0);

    let mut drawn_frames = 0;
    for _ in 0..30 {
        center.on_render(&settings, &mut renderer);
        if !renderer.take_lines().is_empty() {
            drawn_frames += 1;
        }
        clock.advance_secs(0.1);
    }

    // Frames at t = 0.0 .. 1.9 draw, t >= 2.0 does not.
    assert!((19..=21).contains(&drawn_frames), "drew {drawn_frames} frames");
    assert_eq!(
        center.history().and_then(|h| h.latest()),
        Some("Connected")
    );
}

#[test]
fn reset_then_shutdown_lifecycle() {
    let settings = Config::default().snapshot();
    let mut center = NotificationCenter::new(ManualClock::new());
    center.on_init(&settings, viewport());
    center.start_default("map loaded");

    center.on_reset();
    assert_eq!(center.active().count(), 0);
    assert_eq!(center.history().map(|h| h.len()), Some(1));

    center.on_shutdown();
    assert!(!center.is_initialized());

    center.on_init(&settings, viewport());
    assert_eq!(center.history().map(|h| h.len()), Some(0));
}
