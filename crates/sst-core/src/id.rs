//! Opaque identifiers for remote resources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a backend record.
///
/// Some endpoints emit numeric keys and others strings (UUIDs, codes). Both
/// are accepted and written back in the form they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl ResourceId {
    /// Render the identifier as a URL path segment.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => urlencoding::encode(s).into_owned(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number))
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
