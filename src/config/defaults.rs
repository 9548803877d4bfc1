// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: Active pool and history log sizes
//! - **Timing**: Notification lifetime and fade envelope
//! - **Display**: Opacity and stacking layout consumed by renderers

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of simultaneously visible notifications.
pub const DEFAULT_MAX_NOTIFICATIONS: i64 = 5;

/// Default number of texts kept in the history log.
pub const DEFAULT_MAX_HISTORY: i64 = 50;

/// Whether the history log survives `on_reset` by default.
pub const DEFAULT_KEEP_HISTORY_ON_RESET: bool = true;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default notification lifetime (in seconds).
pub const DEFAULT_DURATION_SECS: f32 = 3.0;

/// Share of the lifetime spent fading in.
pub const FADE_IN_FRACTION: f32 = 0.1;

/// Share of the lifetime spent fading out.
pub const FADE_OUT_FRACTION: f32 = 0.2;

/// Longest text a notification stores, in bytes.
pub const MAX_TEXT_BYTES: usize = 255;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default global opacity multiplier (0.0 to 1.0).
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Whether renderers apply the fade envelope by default.
pub const DEFAULT_FADE_ENABLED: bool = true;

/// Vertical distance between stacked notifications (in logical pixels).
pub const DEFAULT_STACK_SPACING: f32 = 28.0;

/// Distance from the top of the viewport to the first notification.
pub const DEFAULT_TOP_MARGIN: f32 = 40.0;
