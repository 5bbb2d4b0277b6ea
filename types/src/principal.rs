//! Opaque caller identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An externally-authenticated caller reference.
///
/// The execution substrate authenticates callers before any operation runs;
/// the core treats the principal as an opaque token used only for ownership
/// and authorization comparisons. No internal structure is assumed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw principal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
