//! Error types for the checklist model.

use crate::path::NodePath;

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, ChecklistError>;

/// Errors surfaced by the tree builder and the propagator.
///
/// Invalid configuration values are not represented here: they are replaced
/// with their documented defaults when the configuration is read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// The input specification is malformed.
    #[error("Invalid checklist specification at '{location}': {message}")]
    InvalidSpec { location: String, message: String },

    /// A toggle targeted a node that does not exist in the built tree.
    #[error("No checklist node at '{path}'")]
    InvalidNodeReference { path: String },
}

impl ChecklistError {
    /// Create a specification error.
    pub fn invalid_spec(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a node reference error for a typed path.
    pub fn invalid_node(path: &NodePath) -> Self {
        Self::InvalidNodeReference {
            path: path.to_string(),
        }
    }

    /// Create a node reference error for raw text that could not be parsed as a path.
    pub fn malformed_path(raw: impl Into<String>) -> Self {
        Self::InvalidNodeReference { path: raw.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChecklistError::invalid_spec("2.1", "null is not a checklist entry");
        assert_eq!(
            err.to_string(),
            "Invalid checklist specification at '2.1': null is not a checklist entry"
        );

        let err = ChecklistError::invalid_node(&NodePath::from_indices([3, 1]));
        assert_eq!(err.to_string(), "No checklist node at '3.1'");
    }
}
