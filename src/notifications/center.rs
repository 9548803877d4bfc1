// SPDX-License-Identifier: MPL-2.0
//! Notification center: admission, per-frame update and lifecycle.
//!
//! The center owns the [`ActivePool`] and the [`HistoryLog`]. It is created
//! explicitly, initialized with [`NotificationCenter::on_init`] and torn down
//! with [`NotificationCenter::on_shutdown`]; callers pass it by reference to
//! wherever notifications are started.
//!
//! # Policies
//!
//! - A full pool evicts its oldest notification to admit a new one.
//! - [`NotificationCenter::stop`] removes only the most recently started
//!   notification; [`NotificationCenter::stop_all`] removes all of them.
//! - Every admitted text is recorded in history, even if it is later evicted.
//! - Empty text is ignored and not recorded.

use super::clock::{Clock, MonotonicClock};
use super::history::HistoryLog;
use super::layout::StackLayout;
use super::notification::{truncate_text, Notification};
use super::pool::ActivePool;
use super::render::Renderer;
use super::settings::{DisplayTuning, NotificationSettings};
use super::watcher::{CapacityChange, CapacityWatcher};
use crate::domain::notifications::DisplayDuration;
use iced_core::Size;

/// State that only exists between `on_init` and `on_shutdown`.
#[derive(Debug, Clone)]
struct CenterState {
    pool: ActivePool,
    history: HistoryLog,
    watcher: CapacityWatcher,
    tuning: DisplayTuning,
    viewport: Size,
    layout: StackLayout,
    default_duration: DisplayDuration,
    keep_history_on_reset: bool,
}

impl CenterState {
    fn new(settings: &NotificationSettings, viewport: Size) -> Self {
        let watcher = CapacityWatcher::new(settings);
        Self {
            pool: ActivePool::new(watcher.pool()),
            history: HistoryLog::new(watcher.history()),
            watcher,
            tuning: settings.display,
            viewport,
            layout: StackLayout::new(viewport, &settings.display),
            default_duration: DisplayDuration::new(settings.default_duration_secs),
            keep_history_on_reset: settings.keep_history_on_reset,
        }
    }

    fn apply_settings(&mut self, settings: &NotificationSettings) {
        if let Some(change) = self.watcher.poll(settings) {
            self.resize(change);
        }
        if settings.display != self.tuning {
            self.tuning = settings.display;
            self.layout = StackLayout::new(self.viewport, &self.tuning);
        }
        self.default_duration = DisplayDuration::new(settings.default_duration_secs);
        self.keep_history_on_reset = settings.keep_history_on_reset;
    }

    /// Migrates to new capacities: build the new buffers, then swap.
    fn resize(&mut self, change: CapacityChange) {
        if let Some(capacity) = change.pool {
            let (pool, dropped) = self.pool.resized(capacity);
            tracing::info!(
                from = self.pool.capacity().value(),
                to = capacity.value(),
                dropped,
                "resized notification pool"
            );
            self.pool = pool;
        }
        if let Some(capacity) = change.history {
            let history = self.history.resized(capacity);
            tracing::info!(
                from = self.history.capacity(),
                to = capacity.value(),
                kept = history.len(),
                "resized notification history"
            );
            self.history = history;
        }
    }
}

/// Owns the active notifications and their history.
///
/// # Example
///
/// ```
/// use hover_notify::notifications::{ManualClock, NotificationCenter, NotificationSettings};
/// use iced_core::Size;
///
/// let clock = ManualClock::new();
/// let mut center = NotificationCenter::new(clock.clone());
/// let settings = NotificationSettings::default();
/// center.on_init(&settings, Size::new(800.0, 600.0));
///
/// center.start("Connected", 2.0);
/// clock.advance_secs(1.0);
/// center.update(&settings);
/// assert_eq!(center.active().count(), 1);
///
/// clock.advance_secs(1.1);
/// center.update(&settings);
/// assert_eq!(center.active().count(), 0);
/// assert_eq!(center.history().map(|h| h.len()), Some(1));
/// ```
#[derive(Debug)]
pub struct NotificationCenter<C: Clock = MonotonicClock> {
    clock: C,
    state: Option<CenterState>,
}

impl Default for NotificationCenter<MonotonicClock> {
    fn default() -> Self {
        Self::new(MonotonicClock)
    }
}

impl<C: Clock> NotificationCenter<C> {
    /// Creates an uninitialized center reading time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock, state: None }
    }

    /// Allocates the pool and history at the configured capacities.
    ///
    /// Calling it again discards the previous state.
    pub fn on_init(&mut self, settings: &NotificationSettings, viewport: Size) {
        let state = CenterState::new(settings, viewport);
        tracing::debug!(
            pool = state.pool.capacity().value(),
            history = state.history.capacity(),
            "notification center initialized"
        );
        self.state = Some(state);
    }

    /// Clears active notifications, and history unless configured to keep it.
    pub fn on_reset(&mut self) {
        if let Some(state) = &mut self.state {
            let cleared = state.pool.clear();
            if !state.keep_history_on_reset {
                state.history.clear();
            }
            tracing::debug!(
                cleared,
                history_kept = state.keep_history_on_reset,
                "notification center reset"
            );
        }
    }

    /// Re-anchors the stack for a new viewport size.
    pub fn on_window_resize(&mut self, viewport: Size) {
        if let Some(state) = &mut self.state {
            state.viewport = viewport;
            state.layout = StackLayout::new(viewport, &state.tuning);
            state.pool.update_positions(&state.layout);
        }
    }

    /// Releases all state. The center ignores notifications until the next
    /// [`NotificationCenter::on_init`].
    pub fn on_shutdown(&mut self) {
        if self.state.take().is_some() {
            tracing::debug!("notification center shut down");
        }
    }

    /// Returns whether `on_init` has run since the last shutdown.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Starts a notification lasting `duration_secs`.
    ///
    /// Invalid durations (zero, negative, non-finite) fall back to the
    /// configured default. Returns `false` if nothing was admitted.
    pub fn start(&mut self, text: &str, duration_secs: f32) -> bool {
        let Some(default) = self.state.as_ref().map(|s| s.default_duration) else {
            tracing::debug!("notification ignored: center not initialized");
            return false;
        };
        let duration = DisplayDuration::try_new(duration_secs).unwrap_or(default);
        self.admit(text, duration)
    }

    /// Starts a notification with the configured default duration.
    pub fn start_default(&mut self, text: &str) -> bool {
        let Some(default) = self.state.as_ref().map(|s| s.default_duration) else {
            tracing::debug!("notification ignored: center not initialized");
            return false;
        };
        self.admit(text, default)
    }

    fn admit(&mut self, text: &str, duration: DisplayDuration) -> bool {
        if text.is_empty() {
            return false;
        }
        let now = self.clock.now();
        let Some(state) = &mut self.state else {
            return false;
        };

        state.history.push(truncate_text(text));
        let notification = Notification::new(text, duration, now);
        if let Some(evicted) = state.pool.admit(notification) {
            tracing::debug!(text = evicted.text(), "evicted oldest notification");
        }
        state.pool.update_positions(&state.layout);
        tracing::debug!(
            text = truncate_text(text),
            duration_secs = duration.as_secs_f32(),
            active = state.pool.len(),
            "notification started"
        );
        true
    }

    /// Removes the most recently started notification.
    pub fn stop(&mut self) -> Option<Notification> {
        let state = self.state.as_mut()?;
        let stopped = state.pool.stop_newest()?;
        state.pool.update_positions(&state.layout);
        tracing::debug!(text = stopped.text(), "notification stopped");
        Some(stopped)
    }

    /// Removes every active notification. History is untouched.
    pub fn stop_all(&mut self) -> usize {
        self.state.as_mut().map_or(0, |state| state.pool.clear())
    }

    /// Per-frame update: applies configuration changes, expires and fades
    /// notifications, and reflows the stack.
    ///
    /// Reads the clock exactly once.
    pub fn update(&mut self, settings: &NotificationSettings) {
        let now = self.clock.now();
        let Some(state) = &mut self.state else {
            return;
        };
        state.apply_settings(settings);
        let expired = state.pool.update(now);
        if expired > 0 {
            tracing::debug!(expired, active = state.pool.len(), "notifications expired");
        }
        state.pool.update_positions(&state.layout);
    }

    /// Recomputes positions from the current stacking order.
    pub fn update_positions(&mut self) {
        if let Some(state) = &mut self.state {
            state.pool.update_positions(&state.layout);
        }
    }

    /// Hands every active notification to `renderer`, in stacking order.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        if let Some(state) = &self.state {
            for notification in state.pool.iter() {
                renderer.draw(notification, &state.tuning);
            }
        }
    }

    /// Host render hook: [`update`](Self::update) followed by
    /// [`draw`](Self::draw).
    pub fn on_render<R: Renderer>(&mut self, settings: &NotificationSettings, renderer: &mut R) {
        self.update(settings);
        self.draw(renderer);
    }

    /// Active notifications in stacking order (oldest first).
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.state.iter().flat_map(|state| state.pool.iter())
    }

    /// Returns the active pool, if initialized.
    #[must_use]
    pub fn pool(&self) -> Option<&ActivePool> {
        self.state.as_ref().map(|state| &state.pool)
    }

    /// Returns the history log, if initialized.
    #[must_use]
    pub fn history(&self) -> Option<&HistoryLog> {
        self.state.as_ref().map(|state| &state.history)
    }
}
