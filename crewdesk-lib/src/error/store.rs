//! StoreError for the repository layer

use crate::model::EntityKind;

/// Error type for repository load operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store holds no collection for the requested entity kind.
    #[error("No collection loaded for entity kind '{kind}'")]
    UnknownEntity { kind: EntityKind },
}

impl StoreError {
    /// Creates a new unknown entity error.
    pub fn unknown_entity(kind: EntityKind) -> Self {
        Self::UnknownEntity { kind }
    }
}
