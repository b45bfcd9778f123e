use thiserror::Error;

/// Errors that make a whole document unusable.
///
/// `path` is a JSON path to the offending field, e.g. `$.subviews[1].type`.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Malformed JSON: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field '{field}' at {path}")]
    MissingField { path: String, field: &'static str },

    #[error("Unknown element type '{value}' at {path}")]
    UnknownElementType { path: String, value: String },

    #[error("Unknown action type '{value}' at {path}")]
    UnknownActionType { path: String, value: String },

    #[error("Invalid value at {path}: expected {expected}")]
    InvalidField {
        path: String,
        expected: &'static str,
    },
}

impl SchemaError {
    /// JSON path of the failure, when the failure is tied to a field.
    pub fn path(&self) -> Option<&str> {
        match self {
            SchemaError::Malformed { .. } => None,
            SchemaError::MissingField { path, .. }
            | SchemaError::UnknownElementType { path, .. }
            | SchemaError::UnknownActionType { path, .. }
            | SchemaError::InvalidField { path, .. } => Some(path),
        }
    }
}
