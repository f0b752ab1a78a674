//! Error types for the docs query tool

use serde_json::{json, Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for docs query operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocRole {
    Operations,
    Types,
}

impl DocRole {
    /// Key used for this document's path in error payloads.
    pub fn payload_key(self) -> &'static str {
        match self {
            DocRole::Operations => "operationsFile",
            DocRole::Types => "typesFile",
        }
    }

    fn keyed_by(self) -> &'static str {
        match self {
            DocRole::Operations => "operation type",
            DocRole::Types => "type name",
        }
    }
}

/// Docs query errors. Every failure is terminal for the invocation.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        role: DocRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        role: DocRole,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must be a JSON object keyed by {}", path.display(), role.keyed_by())]
    MalformedDocument { role: DocRole, path: PathBuf },

    #[error("Operation not found: {name}")]
    OperationNotFound { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsError {
    /// Render the error as the JSON object emitted on stderr:
    /// `{"error": <message>}` plus whatever context the variant carries.
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("error".to_string(), json!(self.to_string()));
        match self {
            DocsError::Read { role, path, .. }
            | DocsError::Parse { role, path, .. }
            | DocsError::MalformedDocument { role, path } => {
                payload.insert(
                    role.payload_key().to_string(),
                    json!(path.display().to_string()),
                );
            }
            DocsError::OperationNotFound { name } => {
                payload.insert("operation".to_string(), json!(name));
            }
            DocsError::Json(_) => {}
        }
        Value::Object(payload)
    }
}
