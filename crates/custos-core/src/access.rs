//! Access levels attached to every (subject, resource) pairing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Binary access flag for a resource held by a subject.
///
/// The level is a plain value: changing it means replacing it wholesale.
/// Textual tokens are validated when the level is constructed, so an
/// `AccessLevel` in hand is always one of the two recognized states.
///
/// # Examples
///
/// ```
/// use custos_core::AccessLevel;
///
/// let level: AccessLevel = "allowed".parse().unwrap();
/// assert!(level.is_allowed());
/// assert!("maybe".parse::<AccessLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessLevel {
    /// The subject may use the resource.
    Allowed,
    /// The subject may not use the resource.
    #[default]
    Forbidden,
}

impl AccessLevel {
    /// Token for [`AccessLevel::Allowed`].
    pub const ALLOWED: &'static str = "allowed";
    /// Token for [`AccessLevel::Forbidden`].
    pub const FORBIDDEN: &'static str = "forbidden";

    /// Parses an access level from its token.
    ///
    /// Only `"allowed"` and `"forbidden"` are accepted, case sensitive.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            Self::ALLOWED => Ok(AccessLevel::Allowed),
            Self::FORBIDDEN => Ok(AccessLevel::Forbidden),
            other => Err(Error::invalid_access(other)),
        }
    }

    /// Returns the level itself.
    pub fn value(&self) -> Self {
        *self
    }

    /// Returns the token for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Allowed => Self::ALLOWED,
            AccessLevel::Forbidden => Self::FORBIDDEN,
        }
    }

    /// Returns `true` for [`AccessLevel::Allowed`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessLevel::Allowed)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = Error;

    fn try_from(token: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.as_str().to_string()
    }
}
