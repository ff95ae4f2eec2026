//! Subjects (principals) that hold resources.

use std::fmt;

use crate::error::{Error, Result};

/// A principal identified by an opaque, comparable key.
///
/// Two subjects are the same ACL entry when their ids are equal, no matter
/// which instance is used for the lookup. A subject may briefly exist
/// without an id; reading the id of such a subject fails with
/// [`Error::InvalidSubject`].
///
/// # Examples
///
/// ```
/// use custos_core::Subject;
///
/// let a = Subject::new("alice");
/// let b = Subject::new("alice");
/// assert_eq!(a, b);
/// assert_eq!(a.id().unwrap(), "alice");
///
/// let pending: Subject<&str> = Subject::unidentified();
/// assert!(pending.id().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject<T> {
    id: Option<T>,
}

impl<T> Subject<T> {
    /// Creates a subject with the given id.
    pub fn new(id: T) -> Self {
        Self { id: Some(id) }
    }

    /// Creates a subject that has no id yet.
    pub fn unidentified() -> Self {
        Self { id: None }
    }

    /// Replaces the id.
    pub fn set_id(&mut self, id: T) {
        self.id = Some(id);
    }

    /// Returns the id without copying it, if one was assigned.
    pub fn id_ref(&self) -> Option<&T> {
        self.id.as_ref()
    }

    /// Returns `true` once an id has been assigned.
    pub fn is_identified(&self) -> bool {
        self.id.is_some()
    }
}

impl<T: Clone> Subject<T> {
    /// Returns a copy of the id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSubject`] if no id was ever assigned.
    pub fn id(&self) -> Result<T> {
        self.id.clone().ok_or(Error::InvalidSubject)
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::unidentified()
    }
}

impl<T> From<T> for Subject<T> {
    fn from(id: T) -> Self {
        Self::new(id)
    }
}

impl<T: fmt::Display> fmt::Display for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("<unidentified>"),
        }
    }
}
