//! Entity identity by surrogate key.
//!
//! Every persisted entity is identified by a `BIGSERIAL` key assigned on
//! insert. Before that point (a create DTO that has not been saved) there is
//! no key, and an unsaved value has no identity to compare: two unsaved
//! entities are never the same entity, even when every field matches.

use crate::types::DbId;

/// A value that maps to a table row and may carry its surrogate key.
pub trait Entity {
    /// Display name used in errors and logs (e.g. `"Project"`).
    const NAME: &'static str;

    /// The surrogate key, or `None` while the value has not been persisted.
    fn id(&self) -> Option<DbId>;

    /// Whether this value has been assigned a key by the database.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Return `true` when `a` and `b` refer to the same stored row.
///
/// Both sides must carry a key and the keys must be equal. A missing key on
/// either side always yields `false`.
pub fn same_entity<A: Entity, B: Entity>(a: &A, b: &B) -> bool {
    A::NAME == B::NAME && matches!((a.id(), b.id()), (Some(x), Some(y)) if x == y)
}
