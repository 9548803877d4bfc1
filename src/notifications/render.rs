// SPDX-License-Identifier: MPL-2.0
//! Renderer boundary.
//!
//! The notification center never draws. Hosts implement [`Renderer`] and
//! receive every active notification, in stacking order, with its resolved
//! position and fade state.

use super::notification::Notification;
use super::settings::DisplayTuning;

/// Draws a single notification.
pub trait Renderer {
    fn draw(&mut self, notification: &Notification, tuning: &DisplayTuning);
}

/// Renders notifications as plain text lines.
///
/// Used by the `hover-notify` binary to print simulated frames.
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines drawn since the last [`TextRenderer::take_lines`].
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns and clears the drawn lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, notification: &Notification, tuning: &DisplayTuning) {
        let position = notification.position();
        self.lines.push(format!(
            "({:>6.1}, {:>6.1}) alpha {:.2}  {}",
            position.x,
            position.y,
            tuning.alpha(notification.fade_state()),
            notification.text()
        ));
    }
}
