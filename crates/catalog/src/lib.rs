//! Catalog domain module.
//!
//! Items for sale, named groupings of items, and an optional tally that keeps
//! aggregate counts across every grouping built against it. Pure domain logic
//! (no IO, no storage).

pub mod grouping;
pub mod item;
pub mod tally;

pub use grouping::Grouping;
pub use item::Item;
pub use tally::{CatalogTally, TallySnapshot};
