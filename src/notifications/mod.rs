// SPDX-License-Identifier: MPL-2.0
//! Hover/toast notification system for game-client overlays.
//!
//! Notifications appear on top of the game for a limited time, fade in and
//! out, and stack vertically. Every text shown is also kept in a bounded
//! history log for later review.
//!
//! # Components
//!
//! - [`center`] - `NotificationCenter`, admission, per-frame update and lifecycle hooks
//! - [`pool`] - `ActivePool`, the bounded set of visible notifications
//! - [`history`] - `HistoryLog`, the ring buffer of past texts
//! - [`watcher`] - `CapacityWatcher`, detects configured capacity changes
//! - [`notification`] - `Notification` slot and its expiry/fade update
//! - [`fade`] - the opacity envelope
//! - [`layout`] - vertical stacking from a viewport anchor
//! - [`render`] - `Renderer` boundary implemented by hosts
//! - [`clock`] - monotonic time sources
//! - [`settings`] - per-frame configuration snapshot
//!
//! # Usage
//!
//! ```ignore
//! let mut center = NotificationCenter::default();
//! center.on_init(&config.snapshot(), viewport);
//!
//! center.start("Connected", 2.0);
//!
//! // Once per frame
//! center.on_render(&config.snapshot(), &mut renderer);
//! ```

pub mod center;
pub mod clock;
pub mod fade;
pub mod history;
pub mod layout;
pub mod notification;
pub mod pool;
pub mod render;
pub mod settings;
pub mod watcher;

pub use center::NotificationCenter;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use history::HistoryLog;
pub use layout::StackLayout;
pub use notification::Notification;
pub use pool::ActivePool;
pub use render::{Renderer, TextRenderer};
pub use settings::{DisplayTuning, NotificationSettings};
pub use watcher::{CapacityChange, CapacityWatcher};
