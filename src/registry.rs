//! Type Registry
//!
//! Wraps the parsed `types.json` document and computes, for one type
//! definition, the set of other type names it references via interfaces,
//! possible types, and field/argument types.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::extract::{names_from_entries, type_names_from_ref, type_names_from_string};

/// All known type definitions, keyed by type name. Immutable for the
/// lifetime of one invocation.
pub struct TypeRegistry {
    types: Map<String, Value>,
}

impl TypeRegistry {
    pub fn new(types: Map<String, Value>) -> Self {
        Self { types }
    }

    /// Look up a type definition by exact name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Free-text extraction over `typeString` unioned with structured extraction
/// over `type`. Applies to field, argument, and any other record carrying a
/// type signature in either representation.
pub fn signature_type_names(record: &Value) -> HashSet<String> {
    let mut names = type_names_from_string(record.get("typeString").and_then(Value::as_str));
    if let Some(type_ref) = record.get("type") {
        names.extend(type_names_from_ref(type_ref));
    }
    names
}

/// Names referenced by one type definition: interfaces, possible types, and
/// the signature of every field and field argument. Duplicates collapse;
/// order is irrelevant.
pub fn referenced_type_names(type_def: &Value) -> HashSet<String> {
    let mut references = names_from_entries(type_def.get("interfaces"));
    references.extend(names_from_entries(type_def.get("possibleTypes")));

    let fields = type_def.get("fields").and_then(Value::as_array);
    for field in fields.into_iter().flatten() {
        if !field.is_object() {
            continue;
        }
        references.extend(signature_type_names(field));
        for key in ["args", "arguments"] {
            let args = field.get(key).and_then(Value::as_array);
            for arg in args.into_iter().flatten() {
                if arg.is_object() {
                    references.extend(signature_type_names(arg));
                }
            }
        }
    }
    references
}
