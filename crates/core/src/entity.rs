//! Identity shared by every record the registry owns.

/// A record whose identity stays fixed while its state changes.
///
/// An account keeps its id from the moment it is opened until it is closed,
/// however its balance moves. Lookups compare ids, never whole records.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Whether this record carries `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
