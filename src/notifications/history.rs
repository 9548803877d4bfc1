// SPDX-License-Identifier: MPL-2.0
//! Ring buffer recording the text of every notification ever shown.
//!
//! Storage is a fixed-size slot array with a write cursor (`head`) and a
//! count. Once full, each write overwrites the oldest entry. All wraparound
//! arithmetic lives in [`HistoryLog::physical_index`].

use crate::domain::notifications::HistoryCapacity;

/// Fixed-capacity, FIFO-evicting log of notification texts.
///
/// # Example
///
/// ```
/// use hover_notify::domain::notifications::HistoryCapacity;
/// use hover_notify::notifications::HistoryLog;
///
/// let mut log = HistoryLog::new(HistoryCapacity::new(2));
/// log.push("a");
/// log.push("b");
/// log.push("c");
///
/// let texts: Vec<_> = log.iter().collect();
/// assert_eq!(texts, vec!["b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct HistoryLog {
    slots: Box<[Option<String>]>,
    head: usize,
    len: usize,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Appends `text`, overwriting the oldest entry once full.
    pub fn push(&mut self, text: impl Into<String>) {
        self.slots[self.head] = Some(text.into());
        self.head = (self.head + 1) % self.capacity();
        if self.len < self.capacity() {
            self.len += 1;
        }
    }

    /// Returns the entry at `logical` position, where 0 is the oldest.
    #[must_use]
    pub fn get(&self, logical: usize) -> Option<&str> {
        if logical >= self.len {
            return None;
        }
        self.slots[self.physical_index(logical)].as_deref()
    }

    /// Returns the most recently written entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        // Slots below `len` are always filled.
        (0..self.len).map(move |i| {
            self.slots[self.physical_index(i)]
                .as_deref()
                .unwrap_or_default()
        })
    }

    /// Iterates from newest to oldest.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().rev()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the next write position.
    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Removes every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Builds a log with a new capacity holding the most recent entries of
    /// this one, in the same chronological order.
    #[must_use]
    pub fn resized(&self, capacity: HistoryCapacity) -> Self {
        let mut migrated = Self::new(capacity);
        let skip = self.len.saturating_sub(migrated.capacity());
        for text in self.iter().skip(skip) {
            migrated.push(text);
        }
        migrated
    }

    /// Translates a logical position (0 = oldest) into a slot index.
    fn physical_index(&self, logical: usize) -> usize {
        let capacity = self.capacity();
        let oldest = (self.head + capacity - self.len) % capacity;
        (oldest + logical) % capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn log_with(capacity: i64, texts: &[&str]) -> HistoryLog {
        let mut log = HistoryLog::new(HistoryCapacity::new(capacity));
        for text in texts {
            log.push(*text);
        }
        log
    }

    #[test]
    fn push_and_iterate_before_wrap() {
        let log = log_with(5, &["a", "b", "c"]);

        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.head(), 3);
        assert_eq!(log.get(0), Some("a"));
        assert_eq!(log.latest(), Some("c"));
    }

    #[test]
    fn wrap_overwrites_oldest() {
        let log = log_with(3, &["a", "b", "c", "d", "e"]);

        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["c", "d", "e"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.head(), 2);
        assert_eq!(log.get(0), Some("c"));
        assert_eq!(log.get(3), None);
    }

    #[test]
    fn newest_first_reverses_order() {
        let log = log_with(3, &["a", "b", "c", "d"]);
        assert_eq!(
            log.iter_newest_first().collect::<Vec<_>>(),
            vec!["d", "c", "b"]
        );
    }

    #[test]
    fn empty_log_has_no_latest() {
        let log = log_with(4, &[]);
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);
        assert_eq!(log.iter().count(), 0);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut log = log_with(3, &["a", "b", "c", "d"]);
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.capacity(), 3);
        log.push("z");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["z"]);
    }

    #[test]
    fn growing_preserves_entries_and_order() {
        let log = log_with(5, &["1", "2", "3", "4", "5"]);
        let grown = log.resized(HistoryCapacity::new(10));

        assert_eq!(grown.capacity(), 10);
        assert_eq!(
            grown.iter().collect::<Vec<_>>(),
            vec!["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn shrinking_full_wrapped_log_keeps_most_recent() {
        let texts: Vec<String> = (0..13).map(|i| i.to_string()).collect();
        let mut log = HistoryLog::new(HistoryCapacity::new(10));
        for text in &texts {
            log.push(text.as_str());
        }
        let shrunk = log.resized(HistoryCapacity::new(4));

        assert_eq!(
            shrunk.iter().collect::<Vec<_>>(),
            vec!["9", "10", "11", "12"]
        );
        assert_eq!(shrunk.len(), 4);
    }

    #[test]
    fn resized_log_keeps_wrapping_correctly() {
        let log = log_with(3, &["a", "b", "c", "d"]);
        let mut grown = log.resized(HistoryCapacity::new(4));
        grown.push("e");
        grown.push("f");

        assert_eq!(
            grown.iter().collect::<Vec<_>>(),
            vec!["c", "d", "e", "f"]
        );
    }

    proptest! {
        #[test]
        fn keeps_exactly_the_last_capacity_texts(capacity in 1usize..32, count in 0usize..100) {
            let mut log = HistoryLog::new(HistoryCapacity::new(capacity as i64));
            let texts: Vec<String> = (0..count).map(|i| format!("n{i}")).collect();
            for text in &texts {
                log.push(text.as_str());
            }

            let expected: Vec<&str> = texts
                .iter()
                .skip(count.saturating_sub(capacity))
                .map(String::as_str)
                .collect();
            prop_assert_eq!(log.len(), count.min(capacity));
            prop_assert_eq!(log.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn resize_keeps_most_recent_in_order(
            from in 1usize..32,
            to in 1usize..32,
            count in 0usize..80,
        ) {
            let mut log = HistoryLog::new(HistoryCapacity::new(from as i64));
            let texts: Vec<String> = (0..count).map(|i| format!("n{i}")).collect();
            for text in &texts {
                log.push(text.as_str());
            }
            let before: Vec<String> = log.iter().map(str::to_owned).collect();

            let resized = log.resized(HistoryCapacity::new(to as i64));

            let expected: Vec<&str> = before
                .iter()
                .skip(before.len().saturating_sub(to))
                .map(String::as_str)
                .collect();
            prop_assert_eq!(resized.capacity(), to);
            prop_assert_eq!(resized.iter().collect::<Vec<_>>(), expected);
        }
    }
}
