// SPDX-License-Identifier: MPL-2.0
//! Per-frame configuration snapshot handed to the notification center.

use crate::config::defaults::{
    DEFAULT_DURATION_SECS, DEFAULT_FADE_ENABLED, DEFAULT_KEEP_HISTORY_ON_RESET,
    DEFAULT_MAX_HISTORY, DEFAULT_MAX_NOTIFICATIONS, DEFAULT_OPACITY, DEFAULT_STACK_SPACING,
    DEFAULT_TOP_MARGIN,
};
use crate::domain::notifications::Opacity;

/// Read-only view of the externally configured notification settings.
///
/// Capacities are kept raw on purpose: they may be zero or negative when the
/// user misconfigures them, and the capacity watcher is the one place that
/// clamps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationSettings {
    pub max_notifications: i64,
    pub max_history: i64,
    pub default_duration_secs: f32,
    pub keep_history_on_reset: bool,
    pub display: DisplayTuning,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            max_history: DEFAULT_MAX_HISTORY,
            default_duration_secs: DEFAULT_DURATION_SECS,
            keep_history_on_reset: DEFAULT_KEEP_HISTORY_ON_RESET,
            display: DisplayTuning::default(),
        }
    }
}

impl NotificationSettings {
    /// Returns a copy with different capacities.
    #[must_use]
    pub fn with_capacities(mut self, max_notifications: i64, max_history: i64) -> Self {
        self.max_notifications = max_notifications;
        self.max_history = max_history;
        self
    }
}

/// Display tuning consumed by renderers only; the state machine ignores it
/// apart from the stacking layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTuning {
    pub opacity: Opacity,
    pub fade_enabled: bool,
    pub spacing: f32,
    pub top_margin: f32,
}

impl Default for DisplayTuning {
    fn default() -> Self {
        Self {
            opacity: Opacity::new(DEFAULT_OPACITY),
            fade_enabled: DEFAULT_FADE_ENABLED,
            spacing: DEFAULT_STACK_SPACING,
            top_margin: DEFAULT_TOP_MARGIN,
        }
    }
}

impl DisplayTuning {
    /// Effective alpha for a notification with the given fade state.
    #[must_use]
    pub fn alpha(&self, fade_state: f32) -> f32 {
        if self.fade_enabled {
            self.opacity.value() * fade_state
        } else {
            self.opacity.value()
        }
    }
}
