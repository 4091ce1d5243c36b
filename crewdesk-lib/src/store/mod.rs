//! Repository layer
//!
//! Views never reach into ambient module state for their data; they ask
//! a [`DataStore`] for a collection and treat the result as read-only for
//! the duration of the view session. The only shipped implementation is
//! [`InMemoryStore`], which serves the seeded demo dataset; a networked
//! backend would implement the same trait.

mod memory;
pub mod seed;

pub use memory::*;

use crate::error::StoreError;
use crate::model::EntityKind;
use crate::model::Record;

/// Abstract interface for loading entity collections.
///
/// Loading is synchronous: the whole application is single-threaded and
/// event-driven, and collections are small enough to materialize whole.
pub trait DataStore {
    /// Loads the full collection for one entity kind.
    fn load(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError>;
}
