//! Version-conflict policy for query-scoped bulk updates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a bulk update does when a matching document changed underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Stop the whole update at the first version conflict.
    Abort,
    /// Skip conflicting documents and keep updating the rest.
    #[default]
    Proceed,
}

impl ConflictPolicy {
    /// Value of the `conflicts` query parameter understood by the document store.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Proceed => "proceed",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_proceed() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Proceed);
    }

    #[test]
    fn test_query_values() {
        assert_eq!(ConflictPolicy::Abort.as_query_value(), "abort");
        assert_eq!(ConflictPolicy::Proceed.to_string(), "proceed");
    }

    #[test]
    fn test_deserializes_from_snake_case() {
        let policy: ConflictPolicy = serde_json::from_str("\"abort\"").unwrap();
        assert_eq!(policy, ConflictPolicy::Abort);
    }
}
