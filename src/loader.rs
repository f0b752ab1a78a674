//! Document Loading
//!
//! Resolves the operations/types file locations (with a fallback docs root
//! for installs where the bundle ships elsewhere) and loads both JSON
//! documents fresh for one invocation.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DocRole, DocsError, Result};
use crate::operations::flatten_operations;
use crate::registry::TypeRegistry;

/// Build-time defaults, the configuration points the docs generator bakes
/// into an install.
pub mod defaults {
    /// Docs root used when `--docs-root` is not given.
    pub const DOCS_ROOT: &str = ".";
    /// Root probed when the default root carries no docs bundle.
    pub const FALLBACK_DOCS_ROOT: &str = "docs";
    /// Whether `get-operation` includes `examples` without an explicit flag.
    pub const INCLUDE_EXAMPLES: bool = false;
}

/// Resolved locations of the two input documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPaths {
    pub operations: PathBuf,
    pub types: PathBuf,
}

fn data_paths(root: &Path) -> (PathBuf, PathBuf) {
    let data = root.join("_data");
    (data.join("operations.json"), data.join("types.json"))
}

/// Resolve the operations/types paths for one invocation.
///
/// Explicit overrides win untouched. Otherwise the pair under
/// `<docs_root>/_data` is used; when that pair is incomplete and the
/// fallback root holds a complete pair, the fallback root is selected.
/// Anything still missing surfaces later as a read error against the
/// chosen paths.
pub fn resolve_paths(
    docs_root: &Path,
    operations_override: Option<PathBuf>,
    types_override: Option<PathBuf>,
    fallback_root: &Path,
) -> DocPaths {
    let mut root = docs_root;
    if operations_override.is_none() && types_override.is_none() {
        let (operations, types) = data_paths(root);
        if !(operations.exists() && types.exists()) {
            let (fallback_operations, fallback_types) = data_paths(fallback_root);
            if fallback_operations.exists() && fallback_types.exists() {
                debug!(root = %fallback_root.display(), "using fallback docs root");
                root = fallback_root;
            }
        }
    }
    let (operations, types) = data_paths(root);
    DocPaths {
        operations: operations_override.unwrap_or(operations),
        types: types_override.unwrap_or(types),
    }
}

/// Load one document: read the file, parse it, and require a JSON object at
/// the top level.
pub fn load_document(path: &Path, role: DocRole) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|source| DocsError::Read {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    let json: Value = serde_json::from_str(&content).map_err(|source| DocsError::Parse {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    match json {
        Value::Object(map) => Ok(map),
        _ => Err(DocsError::MalformedDocument {
            role,
            path: path.to_path_buf(),
        }),
    }
}

/// Both documents loaded and normalized for one invocation.
pub struct DocsBundle {
    /// Flattened operations, sorted by (operationType, name).
    pub operations: Vec<Value>,
    pub registry: TypeRegistry,
}

impl DocsBundle {
    pub fn load(paths: &DocPaths) -> Result<Self> {
        let operations_by_type = load_document(&paths.operations, DocRole::Operations)?;
        let types_by_name = load_document(&paths.types, DocRole::Types)?;
        let operations = flatten_operations(&operations_by_type);
        debug!(
            operations = operations.len(),
            types = types_by_name.len(),
            "docs bundle loaded"
        );
        Ok(Self {
            operations,
            registry: TypeRegistry::new(types_by_name),
        })
    }
}
