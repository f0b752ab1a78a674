//! Type-Reference Extraction
//!
//! Generators may describe a type signature as free text (`"[Widget!]!"`),
//! as a structured nested reference (`{"kind": "LIST", "ofType": ...}`), or
//! both. Both extractors are kept as first-class operations and unioned at
//! every call site rather than merged into one parser.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Built-in GraphQL scalars. Wire-level primitives, never graph nodes:
/// excluded from every extraction, seed set, and closure result.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Boolean", "Int", "Float", "ID"];

/// Whether `name` is one of the five built-in scalar types.
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap())
}

/// Extract candidate type names from a free-text type signature.
///
/// This is a lexical scan, not a GraphQL type parser: list/non-null wrapper
/// syntax is ignored and every identifier is a candidate. A custom name that
/// happens to contain a scalar word survives tokenization and is only caught
/// by the scalar exclusion set; that lossiness is intentional.
pub fn type_names_from_string(type_string: Option<&str>) -> HashSet<String> {
    let Some(type_string) = type_string else {
        return HashSet::new();
    };
    identifier_regex()
        .find_iter(type_string)
        .map(|m| m.as_str())
        .filter(|name| !is_builtin_scalar(name))
        .map(str::to_string)
        .collect()
}

/// Extract type names from a structured type reference.
///
/// A reference object contributes its own non-scalar `name` and recurses
/// through `ofType` wrappers (list-of / non-null-of). Anything that is not
/// an object yields nothing.
pub fn type_names_from_ref(type_ref: &Value) -> HashSet<String> {
    let mut names = HashSet::new();
    collect_ref_names(type_ref, &mut names);
    names
}

fn collect_ref_names(type_ref: &Value, names: &mut HashSet<String>) {
    let Some(obj) = type_ref.as_object() else {
        return;
    };
    if let Some(name) = obj.get("name").and_then(Value::as_str) {
        if !is_builtin_scalar(name) {
            names.insert(name.to_string());
        }
    }
    if let Some(of_type) = obj.get("ofType") {
        collect_ref_names(of_type, names);
    }
}

/// Extract names from a name-or-ref list (`interfaces`, `possibleTypes`,
/// `referencedTypes`): bare strings count as-is, objects contribute their
/// string-typed `name` and `ref` fields.
pub fn names_from_entries(entries: Option<&Value>) -> HashSet<String> {
    let mut names = HashSet::new();
    let Some(items) = entries.and_then(Value::as_array) else {
        return names;
    };
    for entry in items {
        match entry {
            Value::String(name) => {
                if !is_builtin_scalar(name) {
                    names.insert(name.clone());
                }
            }
            Value::Object(obj) => {
                for key in ["name", "ref"] {
                    if let Some(name) = obj.get(key).and_then(Value::as_str) {
                        if !is_builtin_scalar(name) {
                            names.insert(name.to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }
    names
}
