// SPDX-License-Identifier: MPL-2.0
//! Detects capacity changes in the configured settings.
//!
//! This is the single place where raw configured capacities are clamped.
//! Everything downstream works with [`PoolCapacity`] and [`HistoryCapacity`].

use super::settings::NotificationSettings;
use crate::domain::notifications::{HistoryCapacity, PoolCapacity};

/// Capacities that differ from the cached ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityChange {
    pub pool: Option<PoolCapacity>,
    pub history: Option<HistoryCapacity>,
}

impl CapacityChange {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_none() && self.history.is_none()
    }
}

/// Caches the last seen capacities and reports changes.
#[derive(Debug, Clone)]
pub struct CapacityWatcher {
    raw_pool: i64,
    raw_history: i64,
    pool: PoolCapacity,
    history: HistoryCapacity,
}

impl CapacityWatcher {
    /// Starts watching from the capacities in `settings`.
    #[must_use]
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            raw_pool: settings.max_notifications,
            raw_history: settings.max_history,
            pool: clamp_pool(settings.max_notifications),
            history: clamp_history(settings.max_history),
        }
    }

    /// Current clamped pool capacity.
    #[must_use]
    pub fn pool(&self) -> PoolCapacity {
        self.pool
    }

    /// Current clamped history capacity.
    #[must_use]
    pub fn history(&self) -> HistoryCapacity {
        self.history
    }

    /// Compares `settings` against the cache.
    ///
    /// Returns `None` when the raw values are unchanged or clamp to the
    /// capacities already in use.
    pub fn poll(&mut self, settings: &NotificationSettings) -> Option<CapacityChange> {
        if settings.max_notifications == self.raw_pool && settings.max_history == self.raw_history
        {
            return None;
        }

        let mut change = CapacityChange::default();
        if settings.max_notifications != self.raw_pool {
            self.raw_pool = settings.max_notifications;
            let pool = clamp_pool(self.raw_pool);
            if pool != self.pool {
                self.pool = pool;
                change.pool = Some(pool);
            }
        }
        if settings.max_history != self.raw_history {
            self.raw_history = settings.max_history;
            let history = clamp_history(self.raw_history);
            if history != self.history {
                self.history = history;
                change.history = Some(history);
            }
        }

        (!change.is_empty()).then_some(change)
    }
}

fn clamp_pool(raw: i64) -> PoolCapacity {
    let capacity = PoolCapacity::new(raw);
    if i64::try_from(capacity.value()) != Ok(raw) {
        tracing::warn!(
            configured = raw,
            used = capacity.value(),
            "max_notifications out of range, clamped"
        );
    }
    capacity
}

fn clamp_history(raw: i64) -> HistoryCapacity {
    let capacity = HistoryCapacity::new(raw);
    if i64::try_from(capacity.value()) != Ok(raw) {
        tracing::warn!(
            configured = raw,
            used = capacity.value(),
            "max_history out of range, clamped"
        );
    }
    capacity
}
