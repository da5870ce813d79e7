use serde::Serialize;

use crate::{CatalogTally, Item};

/// A named collection of distinct items, kept in insertion order.
///
/// Membership is by structural equality: adding an item equal to one already
/// held does nothing, and so does removing an item that is not held. A
/// grouping built with [`Grouping::tracked`] also reports its membership
/// changes to a shared [`CatalogTally`].
///
/// Not `Clone`: a copy would hold items its tally never counted.
#[derive(Debug, Serialize)]
pub struct Grouping {
    name: String,
    description: String,
    items: Vec<Item>,
    #[serde(skip)]
    tally: Option<CatalogTally>,
}

impl Grouping {
    /// Build an uncounted grouping.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self::build(name.into(), description.into(), items, None)
    }

    /// Build a grouping that reports to `tally`.
    ///
    /// Counts one grouping plus the number of distinct initial items.
    pub fn tracked(
        name: impl Into<String>,
        description: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
        tally: &CatalogTally,
    ) -> Self {
        let grouping = Self::build(name.into(), description.into(), items, Some(tally.clone()));
        tally.record_grouping(grouping.items.len() as u64);
        grouping
    }

    fn build(
        name: String,
        description: String,
        items: impl IntoIterator<Item = Item>,
        tally: Option<CatalogTally>,
    ) -> Self {
        let mut distinct: Vec<Item> = Vec::new();
        for item in items {
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }

        tracing::debug!(
            grouping = %name,
            items = distinct.len(),
            tracked = tally.is_some(),
            "grouping created"
        );

        Self {
            name,
            description,
            items: distinct,
            tally,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Number of items held by this grouping.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_tracked(&self) -> bool {
        self.tally.is_some()
    }

    pub fn tally(&self) -> Option<&CatalogTally> {
        self.tally.as_ref()
    }

    /// Groupings counted by this grouping's tally, if it has one.
    pub fn total_groupings(&self) -> Option<u64> {
        self.tally.as_ref().map(CatalogTally::groupings)
    }

    /// Items held across every grouping sharing this grouping's tally.
    pub fn total_items(&self) -> Option<u64> {
        self.tally.as_ref().map(CatalogTally::items)
    }

    /// Append `item` unless an equal item is already held.
    ///
    /// Returns whether the item was appended.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.items.contains(&item) {
            tracing::trace!(grouping = %self.name, item = %item.name(), "item already present");
            return false;
        }

        tracing::debug!(grouping = %self.name, item = %item.name(), "item added");
        self.items.push(item);
        if let Some(tally) = &self.tally {
            tally.item_added();
        }
        true
    }

    /// Remove the item equal to `item`, if held.
    ///
    /// Returns whether an item was removed.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        let Some(index) = self.items.iter().position(|held| held == item) else {
            tracing::trace!(grouping = %self.name, item = %item.name(), "item not present");
            return false;
        };

        self.items.remove(index);
        tracing::debug!(grouping = %self.name, item = %item.name(), "item removed");
        if let Some(tally) = &self.tally {
            tally.item_removed();
        }
        true
    }
}
