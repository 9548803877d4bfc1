// SPDX-License-Identifier: MPL-2.0
//! Bounded pool of currently displayed notifications.
//!
//! The pool is a compacting array kept in admission order (oldest first).
//! Slot order is the stacking order. When full, admitting a new notification
//! evicts the oldest one.

use super::layout::StackLayout;
use super::notification::Notification;
use crate::domain::notifications::PoolCapacity;
use std::time::Instant;

/// Notifications eligible for display, oldest first.
#[derive(Debug, Clone)]
pub struct ActivePool {
    slots: Vec<Notification>,
    capacity: PoolCapacity,
}

impl ActivePool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(capacity: PoolCapacity) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.value()),
            capacity,
        }
    }

    /// Admits `notification`, returning the evicted oldest one if the pool
    /// was full.
    pub fn admit(&mut self, notification: Notification) -> Option<Notification> {
        let evicted = if self.is_full() {
            let mut oldest = self.slots.remove(0);
            oldest.deactivate();
            Some(oldest)
        } else {
            None
        };
        self.slots.push(notification);
        evicted
    }

    /// Removes the most recently admitted notification.
    pub fn stop_newest(&mut self) -> Option<Notification> {
        self.slots.pop().map(|mut n| {
            n.deactivate();
            n
        })
    }

    /// Removes every notification, returning how many were active.
    pub fn clear(&mut self) -> usize {
        let count = self.slots.len();
        self.slots.clear();
        count
    }

    /// Advances every notification to `now`, dropping expired ones.
    ///
    /// Returns the number of notifications that expired.
    pub fn update(&mut self, now: Instant) -> usize {
        let before = self.slots.len();
        self.slots.retain_mut(|n| n.update(now));
        before - self.slots.len()
    }

    /// Recomputes every position from its rank in the pool.
    pub fn update_positions(&mut self, layout: &StackLayout) {
        for (rank, notification) in self.slots.iter_mut().enumerate() {
            notification.set_position(layout.position_for(rank));
        }
    }

    /// Builds a pool with a new capacity keeping the most recent
    /// notifications. Returns the new pool and how many were dropped.
    #[must_use]
    pub fn resized(&self, capacity: PoolCapacity) -> (Self, usize) {
        let mut migrated = Self::new(capacity);
        let dropped = self.slots.len().saturating_sub(capacity.value());
        migrated.slots.extend(self.slots.iter().skip(dropped).cloned());
        (migrated, dropped)
    }

    /// Iterates in stacking order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.slots.iter()
    }

    /// Returns the most recently admitted notification.
    #[must_use]
    pub fn newest(&self) -> Option<&Notification> {
        self.slots.last()
    }

    /// Returns the oldest notification still displayed.
    #[must_use]
    pub fn oldest(&self) -> Option<&Notification> {
        self.slots.first()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no notification is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true if the next admission will evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity.value()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> PoolCapacity {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::DisplayDuration;
    use proptest::prelude::*;
    use std::time::Duration;

    fn pool_with(capacity: i64, texts: &[&str], now: Instant) -> ActivePool {
        let mut pool = ActivePool::new(PoolCapacity::new(capacity));
        for text in texts {
            pool.admit(Notification::new(text, DisplayDuration::default(), now));
        }
        pool
    }

    fn texts(pool: &ActivePool) -> Vec<&str> {
        pool.iter().map(Notification::text).collect()
    }

    #[test]
    fn admit_keeps_insertion_order() {
        let pool = pool_with(3, &["a", "b"], Instant::now());
        assert_eq!(texts(&pool), vec!["a", "b"]);
        assert!(!pool.is_full());
    }

    #[test]
    fn full_pool_evicts_oldest() {
        let now = Instant::now();
        let mut pool = pool_with(2, &["A", "B"], now);

        let evicted = pool.admit(Notification::new("C", DisplayDuration::default(), now));

        let evicted = evicted.expect("oldest should be evicted");
        assert_eq!(evicted.text(), "A");
        assert!(!evicted.is_active());
        assert_eq!(texts(&pool), vec!["B", "C"]);
    }

    #[test]
    fn stop_newest_is_lifo() {
        let mut pool = pool_with(3, &["a", "b", "c"], Instant::now());

        let stopped = pool.stop_newest().map(|n| n.text().to_owned());

        assert_eq!(stopped.as_deref(), Some("c"));
        assert_eq!(texts(&pool), vec!["a", "b"]);
    }

    #[test]
    fn stop_on_empty_pool_is_noop() {
        let mut pool = pool_with(3, &[], Instant::now());
        assert!(pool.stop_newest().is_none());
    }

    #[test]
    fn update_drops_expired_and_compacts() {
        let start = Instant::now();
        let mut pool = ActivePool::new(PoolCapacity::new(3));
        pool.admit(Notification::new("short", DisplayDuration::new(1.0), start));
        pool.admit(Notification::new("long", DisplayDuration::new(5.0), start));

        let expired = pool.update(start + Duration::from_secs(2));

        assert_eq!(expired, 1);
        assert_eq!(texts(&pool), vec!["long"]);
    }

    #[test]
    fn shrinking_keeps_most_recent() {
        let pool = pool_with(5, &["a", "b", "c", "d"], Instant::now());

        let (shrunk, dropped) = pool.resized(PoolCapacity::new(2));

        assert_eq!(dropped, 2);
        assert_eq!(texts(&shrunk), vec!["c", "d"]);
        assert_eq!(shrunk.capacity().value(), 2);
    }

    #[test]
    fn growing_keeps_everything() {
        let pool = pool_with(2, &["a", "b"], Instant::now());

        let (grown, dropped) = pool.resized(PoolCapacity::new(6));

        assert_eq!(dropped, 0);
        assert_eq!(texts(&grown), vec!["a", "b"]);
        assert!(!grown.is_full());
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 1i64..16, admissions in 0usize..64) {
            let now = Instant::now();
            let mut pool = ActivePool::new(PoolCapacity::new(capacity));
            for i in 0..admissions {
                pool.admit(Notification::new(&format!("n{i}"), DisplayDuration::default(), now));
                prop_assert!(pool.len() <= pool.capacity().value());
            }
            prop_assert_eq!(pool.len(), admissions.min(capacity as usize));
        }
    }
}
