// SPDX-License-Identifier: MPL-2.0
//! Core notification data structure.
//!
//! A [`Notification`] is one slot of the active pool: bounded text, the
//! instant it was admitted, its requested lifetime, and the per-frame
//! derived state (stacking position and fade).

use super::fade::fade_state;
use crate::config::defaults::MAX_TEXT_BYTES;
use crate::domain::notifications::DisplayDuration;
use iced_core::Point;
use std::time::{Duration, Instant};

/// A notification currently eligible for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    text: String,
    start_time: Instant,
    duration: DisplayDuration,
    active: bool,
    position: Point,
    fade_state: f32,
}

impl Notification {
    /// Creates an active notification admitted at `now`.
    ///
    /// `text` is truncated to [`MAX_TEXT_BYTES`] on a character boundary.
    pub fn new(text: &str, duration: DisplayDuration, now: Instant) -> Self {
        Self {
            text: truncate_text(text).to_owned(),
            start_time: now,
            duration,
            active: true,
            position: Point::ORIGIN,
            fade_state: 0.0,
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when this notification was admitted.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Returns the requested lifetime.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    /// Returns whether this slot still holds a live notification.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the screen anchor resolved by the last layout pass.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the cached fade state in `0.0..=1.0`.
    #[must_use]
    pub fn fade_state(&self) -> f32 {
        self.fade_state
    }

    /// Returns the time elapsed since admission, saturating at zero.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }

    /// Advances the notification to `now`.
    ///
    /// Returns `false` once the lifetime is over; the slot is then inactive
    /// and must be removed from the pool.
    pub fn update(&mut self, now: Instant) -> bool {
        let elapsed = self.elapsed(now);
        if elapsed >= self.duration.as_duration() {
            self.deactivate();
            return false;
        }
        self.fade_state = fade_state(elapsed.as_secs_f32(), self.duration.as_secs_f32());
        true
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.fade_state = 0.0;
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// Truncates `text` to at most [`MAX_TEXT_BYTES`] bytes without splitting a
/// UTF-8 sequence.
#[must_use]
pub fn truncate_text(text: &str) -> &str {
    if text.len() <= MAX_TEXT_BYTES {
        return text;
    }
    let end = (0..=MAX_TEXT_BYTES)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_is_active_and_transparent() {
        let now = Instant::now();
        let n = Notification::new("hello", DisplayDuration::new(2.0), now);

        assert!(n.is_active());
        assert_eq!(n.text(), "hello");
        assert_eq!(n.start_time(), now);
        assert_eq!(n.fade_state(), 0.0);
        assert_eq!(n.position(), Point::ORIGIN);
    }

    #[test]
    fn long_text_is_truncated() {
        let text = "x".repeat(400);
        let n = Notification::new(&text, DisplayDuration::default(), Instant::now());
        assert_eq!(n.text().len(), MAX_TEXT_BYTES);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes, so 128 of them straddle the limit.
        let text = "é".repeat(128);
        let truncated = truncate_text(&text);
        assert!(truncated.len() <= MAX_TEXT_BYTES);
        assert_eq!(truncated.len() % 2, 0);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[test]
    fn update_expires_at_duration() {
        let start = Instant::now();
        let mut n = Notification::new("bye", DisplayDuration::new(1.0), start);

        assert!(n.update(start + Duration::from_millis(999)));
        assert!(n.is_active());

        assert!(!n.update(start + Duration::from_secs(1)));
        assert!(!n.is_active());
    }

    #[test]
    fn update_refreshes_fade_state() {
        let start = Instant::now();
        let mut n = Notification::new("mid", DisplayDuration::new(2.0), start);

        n.update(start + Duration::from_secs(1));
        assert_eq!(n.fade_state(), 1.0);
    }

    #[test]
    fn clock_before_start_counts_as_zero_elapsed() {
        let start = Instant::now() + Duration::from_secs(5);
        let n = Notification::new("early", DisplayDuration::default(), start);
        assert_eq!(n.elapsed(Instant::now()), Duration::ZERO);
    }
}
