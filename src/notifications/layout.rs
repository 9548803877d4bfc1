// SPDX-License-Identifier: MPL-2.0
//! Vertical stacking layout for active notifications.

use super::settings::DisplayTuning;
use iced_core::{Point, Size};

/// Resolves a notification's rank into a screen anchor.
///
/// Notifications stack downward from a top-center anchor; rank 0 (the
/// oldest) sits at the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    anchor: Point,
    spacing: f32,
}

impl StackLayout {
    /// Builds the layout for a viewport.
    #[must_use]
    pub fn new(viewport: Size, tuning: &DisplayTuning) -> Self {
        Self {
            anchor: Point::new(viewport.width / 2.0, tuning.top_margin),
            spacing: tuning.spacing,
        }
    }

    /// Returns the anchor of the first notification.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the position for the notification at `rank`.
    #[must_use]
    pub fn position_for(&self, rank: usize) -> Point {
        Point::new(self.anchor.x, self.anchor.y + rank as f32 * self.spacing)
    }
}
