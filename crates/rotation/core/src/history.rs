//! Cross-tick memory of accepted actions.
//!
//! Guards like "Tiger Palm was not the previous action" need to know what the
//! character did on earlier ticks. That memory lives here, on the host side,
//! and never on the tree.

use std::collections::VecDeque;
use std::time::Duration;

use crate::ids::{AbilityId, TargetHandle};

/// Read API over previously accepted actions, newest last.
pub trait ActionHistory {
    /// The most recently accepted ability.
    fn last_action(&self) -> Option<AbilityId>;

    /// Combat time at which `ability` was last accepted.
    fn last_used(&self, ability: AbilityId) -> Option<Duration>;

    /// Up to `n` most recent abilities, newest first.
    fn recent(&self, n: usize) -> Vec<AbilityId>;

    /// Whether `ability` was the most recently accepted action.
    fn was_last_action(&self, ability: AbilityId) -> bool {
        self.last_action() == Some(ability)
    }
}

/// One accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub ability: AbilityId,
    pub target: TargetHandle,
    pub at: Duration,
}

/// Bounded ring buffer of accepted actions.
#[derive(Clone, Debug)]
pub struct CastHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl CastHistory {
    /// Default number of entries kept.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty history holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl Default for CastHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ActionHistory for CastHistory {
    fn last_action(&self) -> Option<AbilityId> {
        self.entries.back().map(|entry| entry.ability)
    }

    fn last_used(&self, ability: AbilityId) -> Option<Duration> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.ability == ability)
            .map(|entry| entry.at)
    }

    fn recent(&self, n: usize) -> Vec<AbilityId> {
        self.entries
            .iter()
            .rev()
            .take(n)
            .map(|entry| entry.ability)
            .collect()
    }
}
