//! Behavioral configuration for an access list.
//!
//! The configuration only shapes how the container behaves; it never holds
//! subjects or resources. It is usually built in code, but can also be read
//! from TOML:
//!
//! ```toml
//! default_access = "forbidden"
//! pop_policy = "resource"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use custos_core::{AccessLevel, Error, Result};

/// What popping a resource by handle removes from the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopPolicy {
    /// Remove only the popped entry; the subject keeps its other resources.
    #[default]
    Resource,
    /// Remove the popped entry and evict the whole subject with it.
    Subject,
}

impl fmt::Display for PopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopPolicy::Resource => write!(f, "resource"),
            PopPolicy::Subject => write!(f, "subject"),
        }
    }
}

/// Configuration for an [`Acl`](crate::Acl).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AclConfig {
    /// Level given to resources added without an explicit level.
    pub default_access: AccessLevel,

    /// Behavior of [`Acl::try_pop_resource`](crate::Acl::try_pop_resource).
    pub pop_policy: PopPolicy,
}

impl AclConfig {
    /// Sets the level used by [`Acl::add`](crate::Acl::add).
    pub fn with_default_access(mut self, level: AccessLevel) -> Self {
        self.default_access = level;
        self
    }

    /// Sets the pop-by-handle policy.
    pub fn with_pop_policy(mut self, policy: PopPolicy) -> Self {
        self.pop_policy = policy;
        self
    }

    /// Parses a configuration from a TOML document.
    ///
    /// Missing keys take their defaults. Unknown keys, unknown access
    /// tokens and unknown pop policies are rejected.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!(
            "Loaded ACL config from {} (default_access={}, pop_policy={})",
            path.display(),
            config.default_access,
            config.pop_policy
        );
        Ok(config)
    }

    /// Serializes the configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
