//! Shared counters across groupings.
//!
//! A [`CatalogTally`] is handed explicitly to every grouping that should be
//! counted. Clones share the same counters, so one tally can be passed around
//! (or across threads) and still report a single aggregate.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};

use crate::{Grouping, Item};

/// Point-in-time read of a tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallySnapshot {
    pub groupings: u64,
    pub items: u64,
}

#[derive(Debug, Default)]
struct Counters {
    groupings: AtomicU64,
    items: AtomicU64,
}

/// Running count of groupings built and items currently held.
///
/// Groupings are counted once when built and never uncounted; dropping a
/// grouping leaves both counters untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogTally {
    counters: Arc<Counters>,
}

impl CatalogTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total groupings ever built against this tally.
    pub fn groupings(&self) -> u64 {
        self.counters.groupings.load(Ordering::SeqCst)
    }

    /// Total items currently held across this tally's groupings.
    pub fn items(&self) -> u64 {
        self.counters.items.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            groupings: self.groupings(),
            items: self.items(),
        }
    }

    /// Build a grouping that reports to this tally.
    pub fn grouping(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Grouping {
        Grouping::tracked(name, description, items, self)
    }

    /// Whether `other` shares counters with this tally.
    pub fn same_as(&self, other: &CatalogTally) -> bool {
        Arc::ptr_eq(&self.counters, &other.counters)
    }

    pub(crate) fn record_grouping(&self, initial_items: u64) {
        let groupings = self.counters.groupings.fetch_add(1, Ordering::SeqCst) + 1;
        let items = self.counters.items.fetch_add(initial_items, Ordering::SeqCst) + initial_items;
        tracing::debug!(groupings, items, initial_items, "grouping counted");
    }

    pub(crate) fn item_added(&self) {
        let items = self.counters.items.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(items, "item counted");
    }

    pub(crate) fn item_removed(&self) {
        let result = self
            .counters
            .items
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        match result {
            Ok(previous) => tracing::debug!(items = previous - 1, "item uncounted"),
            Err(_) => tracing::warn!("item tally already at zero; decrement ignored"),
        }
    }
}
