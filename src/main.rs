// SPDX-License-Identifier: MPL-2.0
//! `hover-notify` replays notifications through a simulated frame loop and
//! prints every frame as text.
//!
//! ```text
//! hover-notify [--config-dir DIR] [--duration SECS] [--frames N] [--fps N]
//!              [--max N] [--history N] MESSAGE...
//! ```

use hover_notify::config;
use hover_notify::notifications::{ManualClock, NotificationCenter, TextRenderer};
use iced_core::Size;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

const DEFAULT_FRAMES: u32 = 8;
const DEFAULT_FPS: u32 = 2;

struct Flags {
    config_dir: Option<PathBuf>,
    duration: Option<f32>,
    frames: u32,
    fps: u32,
    max: Option<i64>,
    history: Option<i64>,
    messages: Vec<String>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration: args.opt_value_from_str("--duration")?,
        frames: args
            .opt_value_from_str("--frames")?
            .unwrap_or(DEFAULT_FRAMES),
        fps: args.opt_value_from_str("--fps")?.unwrap_or(DEFAULT_FPS).max(1),
        max: args.opt_value_from_str("--max")?,
        history: args.opt_value_from_str("--history")?,
        messages: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    })
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("hover-notify: {err}");
            std::process::exit(2);
        }
    };

    let (mut config, warning) = config::load_with_override(flags.config_dir);
    if let Some(message) = warning {
        tracing::warn!(warning = %message, "settings could not be loaded");
    }
    if let Some(max) = flags.max {
        config.notifications.max_notifications = Some(max);
    }
    if let Some(history) = flags.history {
        config.notifications.max_history = Some(history);
    }
    let settings = config.snapshot();

    let clock = ManualClock::new();
    let mut center = NotificationCenter::new(clock.clone());
    center.on_init(&settings, Size::new(800.0, 600.0));

    for message in &flags.messages {
        match flags.duration {
            Some(secs) => center.start(message, secs),
            None => center.start_default(message),
        };
    }

    let frame_secs = 1.0 / flags.fps as f32;
    let mut renderer = TextRenderer::new();
    for frame in 0..flags.frames {
        center.on_render(&settings, &mut renderer);
        println!("frame {frame} (t = {:.2}s)", frame as f32 * frame_secs);
        for line in renderer.take_lines() {
            println!("  {line}");
        }
        clock.advance_secs(frame_secs);
    }

    if let Some(history) = center.history() {
        println!("history ({}/{}):", history.len(), history.capacity());
        for text in history.iter_newest_first() {
            println!("  {text}");
        }
    }

    center.on_shutdown();
}
