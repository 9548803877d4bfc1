// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for notification values,
//! ensuring they are always within valid ranges. Configured values arrive
//! as raw integers/floats from the settings file and are clamped exactly
//! once, when one of these types is constructed.

use std::time::Duration;

// =============================================================================
// Pool Capacity Bounds
// =============================================================================

/// Active pool capacity bounds (1 to 64 notifications).
pub mod pool_capacity_bounds {
    /// Minimum pool capacity.
    pub const MIN: usize = 1;
    /// Maximum pool capacity.
    pub const MAX: usize = 64;
    /// Default pool capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// PoolCapacity
// =============================================================================

/// Maximum number of simultaneously active notifications.
///
/// Zero or negative configured values are a configuration error and are
/// clamped to [`pool_capacity_bounds::MIN`], so the pool can always admit.
///
/// # Example
///
/// ```
/// use hover_notify::domain::notifications::PoolCapacity;
///
/// assert_eq!(PoolCapacity::new(3).value(), 3);
/// assert_eq!(PoolCapacity::new(0).value(), 1);
/// assert_eq!(PoolCapacity::new(-7).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolCapacity(usize);

impl PoolCapacity {
    /// Creates a new pool capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(clamp_count(
            value,
            pool_capacity_bounds::MIN,
            pool_capacity_bounds::MAX,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= pool_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= pool_capacity_bounds::MAX
    }
}

impl Default for PoolCapacity {
    fn default() -> Self {
        Self(pool_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// History log capacity bounds (1 to 1024 entries).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 1;
    /// Maximum history capacity.
    pub const MAX: usize = 1024;
    /// Default history capacity.
    pub const DEFAULT: usize = 50;
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of notification texts the history log retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(clamp_count(
            value,
            history_capacity_bounds::MIN,
            history_capacity_bounds::MAX,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= history_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= history_capacity_bounds::MAX
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

fn clamp_count(value: i64, min: usize, max: usize) -> usize {
    if value <= 0 {
        return min;
    }
    usize::try_from(value).map_or(max, |v| v.clamp(min, max))
}

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Notification lifetime bounds, in seconds.
pub mod display_duration_bounds {
    /// Duration used when none (or an invalid one) is requested.
    pub const DEFAULT_SECS: f32 = 3.0;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// Requested visible lifetime of a notification.
///
/// Invalid requests (zero, negative, NaN, infinite) are normalized to
/// [`display_duration_bounds::DEFAULT_SECS`] instead of being rejected.
/// Valid requests are kept as-is, however long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(f32);

impl DisplayDuration {
    /// Creates a new display duration, normalizing invalid values.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        Self::try_new(secs).unwrap_or_default()
    }

    /// Returns `None` for zero, negative or non-finite requests.
    #[must_use]
    pub fn try_new(secs: f32) -> Option<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        Some(Self(secs))
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn as_secs_f32(self) -> f32 {
        self.0
    }

    /// Returns the duration as a [`Duration`], saturating at [`Duration::MAX`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::try_from_secs_f32(self.0).unwrap_or(Duration::MAX)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(display_duration_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Global opacity multiplier, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Creates a new opacity, clamping to the valid range. NaN becomes opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(1.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
