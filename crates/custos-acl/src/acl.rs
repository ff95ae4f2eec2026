//! The access list container.
//!
//! [`Acl`] maps every [`Subject`] to the resources it holds, each tagged with
//! an [`AccessLevel`]. The list owns every stored [`Resource`] until a caller
//! pops it out again; removing a subject or a resource drops the payload.
//!
//! Lookups are two hash-map probes: the subject key, then the resource id.
//! Misses are never errors. Operations that change an access level do
//! nothing when the pair is unknown, and queries answer `false` or `None`.
//!
//! # Usage
//!
//! ```rust
//! use custos_acl::{Acl, Resource, Subject};
//!
//! let mut acl: Acl<&str, String> = Acl::new();
//! let alice = Subject::new("alice");
//!
//! let id = acl.add(&alice, Resource::new("report.pdf".to_string())).unwrap();
//! assert!(!acl.is_allowed_id(&alice, id));
//!
//! acl.allow_access(&alice, id);
//! assert!(acl.is_allowed_id(&alice, id));
//!
//! let res = acl.try_pop(&alice, id).unwrap();
//! assert_eq!(res.payload(), "report.pdf");
//! assert!(!acl.has_resource(&alice, id));
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use custos_core::{AccessLevel, Error, Resource, ResourceId, Result, Subject};

use crate::config::{AclConfig, PopPolicy};

// ============================================================================
// Entry
// ============================================================================

/// Slot holding one owned resource and its level.
#[derive(Debug)]
struct Entry<R> {
    resource: Resource<R>,
    access: AccessLevel,
}

type Slots<R> = HashMap<ResourceId, Entry<R>>;

// ============================================================================
// AclStats
// ============================================================================

/// Point-in-time counters for an access list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AclStats {
    /// Number of tracked subjects, including ones with no resources left.
    pub subjects: usize,
    /// Number of stored resources across all subjects.
    pub resources: usize,
    /// Resources whose level is `allowed`.
    pub allowed: usize,
    /// Resources whose level is `forbidden`.
    pub forbidden: usize,
    /// Identifier the next added resource will receive.
    pub next_id: ResourceId,
}

// ============================================================================
// Acl
// ============================================================================

/// In-memory access control list.
///
/// `S` is the subject id type and `R` the resource payload type. Resource
/// ids come from a single counter owned by the list: they start at 1 and
/// strictly increase across all subjects, so a later add always receives a
/// larger id than an earlier one.
///
/// Subjects are not pruned when their last resource goes away; only
/// [`Acl::remove_subject`] (or a pop under [`PopPolicy::Subject`]) deletes
/// a subject entry.
///
/// The list does no internal locking. It is `Send`/`Sync` when `S` and `R`
/// are, so callers sharing it across threads wrap the whole list in a lock.
#[derive(Debug)]
pub struct Acl<S, R> {
    subjects: HashMap<Subject<S>, Slots<R>>,
    next_id: u64,
    config: AclConfig,
}

impl<S, R> Acl<S, R> {
    /// Creates an empty list with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AclConfig::default())
    }

    /// Creates an empty list with the given configuration.
    pub fn with_config(config: AclConfig) -> Self {
        Self {
            subjects: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// Returns the number of distinct subjects tracked.
    ///
    /// This counts subjects, not resources.
    pub fn size(&self) -> usize {
        self.subjects.len()
    }

    /// Returns `true` if no subject is tracked.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterates over the tracked subjects in arbitrary order.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject<S>> {
        self.subjects.keys()
    }

    /// Collects counters describing the current contents.
    pub fn stats(&self) -> AclStats {
        let mut stats = AclStats {
            subjects: self.subjects.len(),
            next_id: ResourceId::new(self.next_id),
            ..AclStats::default()
        };
        for entry in self.subjects.values().flat_map(|slots| slots.values()) {
            stats.resources += 1;
            if entry.access.is_allowed() {
                stats.allowed += 1;
            } else {
                stats.forbidden += 1;
            }
        }
        stats
    }
}

impl<S, R> Default for Acl<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R> Acl<S, R>
where
    S: Eq + Hash + Clone,
{
    // ------------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------------

    /// Adds a resource under `subject` with the configured default level.
    ///
    /// Returns the id assigned to the resource. The subject entry is created
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSubject`] if `subject` has no id. The
    /// resource is dropped and no id is consumed.
    pub fn add(&mut self, subject: &Subject<S>, resource: Resource<R>) -> Result<ResourceId> {
        let access = self.config.default_access;
        self.add_with_access(subject, resource, access)
    }

    /// Adds a resource under `subject` with an access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAccessSpecifier`] if `token` is neither
    /// `"allowed"` nor `"forbidden"`; nothing is stored in that case.
    /// Returns [`Error::InvalidSubject`] as [`Acl::add`] does.
    pub fn add_with_token(
        &mut self,
        subject: &Subject<S>,
        resource: Resource<R>,
        token: &str,
    ) -> Result<ResourceId> {
        let access = AccessLevel::parse(token).inspect_err(|e| {
            log::warn!("Rejected resource: {e}");
        })?;
        self.add_with_access(subject, resource, access)
    }

    /// Adds a resource under `subject` with an explicit level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSubject`] as [`Acl::add`] does.
    pub fn add_with_access(
        &mut self,
        subject: &Subject<S>,
        mut resource: Resource<R>,
        access: AccessLevel,
    ) -> Result<ResourceId> {
        if !subject.is_identified() {
            log::warn!("Rejected resource for a subject without an id");
            return Err(Error::InvalidSubject);
        }

        let id = ResourceId::new(self.next_id);
        resource.set_id(id);
        let entry = Entry { resource, access };

        match self.subjects.get_mut(subject) {
            Some(slots) => {
                slots.insert(id, entry);
            }
            None => {
                let mut slots = HashMap::new();
                slots.insert(id, entry);
                self.subjects.insert(subject.clone(), slots);
            }
        }
        self.next_id += 1;

        log::debug!(
            "Added resource {id} ({access}), {} subjects tracked",
            self.subjects.len()
        );
        Ok(id)
    }

    // ------------------------------------------------------------------------
    // Access levels
    // ------------------------------------------------------------------------

    /// Marks the resource `id` held by `subject` as allowed.
    ///
    /// Does nothing if the pair is unknown.
    pub fn allow_access(&mut self, subject: &Subject<S>, id: ResourceId) {
        self.set_access(subject, id, AccessLevel::Allowed);
    }

    /// Marks the resource `id` held by `subject` as forbidden.
    ///
    /// Does nothing if the pair is unknown.
    pub fn forbid_access(&mut self, subject: &Subject<S>, id: ResourceId) {
        self.set_access(subject, id, AccessLevel::Forbidden);
    }

    /// Replaces the level of the resource `id` held by `subject`.
    ///
    /// Returns `false` if the pair is unknown, in which case nothing changes.
    pub fn set_access(
        &mut self,
        subject: &Subject<S>,
        id: ResourceId,
        access: AccessLevel,
    ) -> bool {
        match self.entry_mut(subject, id) {
            Some(entry) => {
                entry.access = access;
                log::debug!("Resource {id} is now {access}");
                true
            }
            None => {
                log::trace!("No resource {id} to mark {access}");
                false
            }
        }
    }

    /// Returns the level of the resource `id` held by `subject`.
    pub fn access_level(&self, subject: &Subject<S>, id: ResourceId) -> Option<AccessLevel> {
        self.entry(subject, id).map(|entry| entry.access)
    }

    /// Checks whether `subject` is allowed to use the resource `resource`
    /// refers to.
    ///
    /// Only the id of `resource` is read. Returns `false` when the subject
    /// or the id is unknown.
    pub fn is_allowed(&self, subject: &Subject<S>, resource: &Resource<R>) -> bool {
        self.is_allowed_id(subject, resource.id())
    }

    /// Checks whether `subject` is allowed to use the resource `id`.
    pub fn is_allowed_id(&self, subject: &Subject<S>, id: ResourceId) -> bool {
        self.access_level(subject, id)
            .is_some_and(|access| access.is_allowed())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Returns `true` if `subject` is tracked, even with no resources.
    pub fn has_subject(&self, subject: &Subject<S>) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Returns `true` if `subject` holds the resource `id`.
    pub fn has_resource(&self, subject: &Subject<S>, id: ResourceId) -> bool {
        self.entry(subject, id).is_some()
    }

    /// Returns the number of resources held by `subject`.
    pub fn resource_count(&self, subject: &Subject<S>) -> usize {
        self.subjects.get(subject).map_or(0, HashMap::len)
    }

    /// Returns the ids of the resources held by `subject`, ascending.
    pub fn resource_ids(&self, subject: &Subject<S>) -> Vec<ResourceId> {
        let mut ids: Vec<ResourceId> = self
            .subjects
            .get(subject)
            .map(|slots| slots.keys().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Borrows a stored resource without removing it.
    pub fn get(&self, subject: &Subject<S>, id: ResourceId) -> Option<&Resource<R>> {
        self.entry(subject, id).map(|entry| &entry.resource)
    }

    /// Mutably borrows a stored resource without removing it.
    pub fn get_mut(
        &mut self,
        subject: &Subject<S>,
        id: ResourceId,
    ) -> Option<&mut Resource<R>> {
        self.entry_mut(subject, id).map(|entry| &mut entry.resource)
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Removes `subject` and drops every resource it holds.
    ///
    /// Does nothing if the subject is unknown.
    pub fn remove_subject(&mut self, subject: &Subject<S>) {
        if let Some(slots) = self.subjects.remove(subject) {
            log::debug!("Removed subject with {} resources", slots.len());
        }
    }

    /// Removes and drops the resource `id` held by `subject`.
    ///
    /// The subject stays tracked even if this was its last resource.
    pub fn remove_resource(&mut self, subject: &Subject<S>, id: ResourceId) {
        if self.take(subject, id).is_some() {
            log::debug!("Removed resource {id}");
        }
    }

    /// Pops the resource `id` held by `subject`, handing ownership back.
    ///
    /// Only that entry is removed. Returns `None` if the pair is unknown.
    pub fn try_pop(&mut self, subject: &Subject<S>, id: ResourceId) -> Option<Resource<R>> {
        let resource = self.take(subject, id)?;
        log::debug!("Popped resource {id}");
        Some(resource)
    }

    /// Pops the stored resource with the same id as `resource`.
    ///
    /// `resource` is only used to read the id. Under [`PopPolicy::Resource`]
    /// this behaves like [`Acl::try_pop`]. Under [`PopPolicy::Subject`] a
    /// successful pop also removes the whole subject entry, dropping every
    /// other resource it held. Returns `None` if the pair is unknown, in
    /// which case nothing is removed under either policy.
    pub fn try_pop_resource(
        &mut self,
        subject: &Subject<S>,
        resource: &Resource<R>,
    ) -> Option<Resource<R>> {
        let id = resource.id();
        let popped = self.try_pop(subject, id)?;
        if self.config.pop_policy == PopPolicy::Subject {
            self.remove_subject(subject);
            log::debug!("Evicted subject after popping resource {id}");
        }
        Some(popped)
    }

    // ------------------------------------------------------------------------
    // Slot helpers
    // ------------------------------------------------------------------------

    fn entry(&self, subject: &Subject<S>, id: ResourceId) -> Option<&Entry<R>> {
        let entry = self.subjects.get(subject)?.get(&id);
        if entry.is_none() {
            log::trace!("Lookup miss for resource {id}");
        }
        entry
    }

    fn entry_mut(&mut self, subject: &Subject<S>, id: ResourceId) -> Option<&mut Entry<R>> {
        self.subjects.get_mut(subject)?.get_mut(&id)
    }

    fn take(&mut self, subject: &Subject<S>, id: ResourceId) -> Option<Resource<R>> {
        self.subjects
            .get_mut(subject)?
            .remove(&id)
            .map(|entry| entry.resource)
    }
}
