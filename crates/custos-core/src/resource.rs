//! Owned resources and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a resource stored in an access list.
///
/// Identifiers are assigned by the access list when a resource is added,
/// starting at 1. The zero value marks a resource that was never added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Identifier carried by resources that have not been added yet.
    pub const UNSET: ResourceId = ResourceId(0);

    /// Creates an identifier from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this identifier was assigned by an access list.
    pub const fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<ResourceId> for u64 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

/// Exclusive owner of a payload tracked by an access list.
///
/// A resource is not `Clone`: moving it moves the payload with it. Callers
/// build a resource, hand it to the access list, and get it back only by
/// popping it out again. The payload is never inspected by the list, so it
/// may be anything, including a handle that failed to open.
///
/// # Examples
///
/// ```
/// use custos_core::Resource;
///
/// let mut res = Resource::new(vec![1, 2, 3]);
/// res.payload_mut().push(4);
/// assert_eq!(res.payload().len(), 4);
/// assert!(!res.id().is_set());
/// ```
#[derive(Debug)]
pub struct Resource<T> {
    id: ResourceId,
    payload: T,
}

impl<T> Resource<T> {
    /// Wraps an existing value.
    pub fn new(payload: T) -> Self {
        Self {
            id: ResourceId::UNSET,
            payload,
        }
    }

    /// Returns the identifier assigned by the access list.
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Overwrites the identifier.
    ///
    /// Access lists call this once, when the resource is added.
    pub fn set_id(&mut self, id: ResourceId) {
        self.id = id;
    }

    /// Returns a shared reference to the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns a mutable reference to the payload.
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Consumes the resource and returns the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Resource<T> {
    fn from(payload: T) -> Self {
        Self::new(payload)
    }
}
