//! Related-Type Closure
//!
//! Bounded breadth-first traversal over the type graph, starting from the
//! type names an operation's signature mentions. The result map doubles as
//! the visited set, which keeps the traversal cycle-safe and duplicate-free
//! without recursion.

use serde_json::{Map, Value};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

use crate::extract::{names_from_entries, type_names_from_ref, type_names_from_string};
use crate::registry::{referenced_type_names, signature_type_names, TypeRegistry};

/// Seed type names for an operation: its return type, the type of every
/// argument, and any explicitly declared `referencedTypes`.
pub fn seed_type_names(operation: &Value) -> HashSet<String> {
    let mut seeds =
        type_names_from_string(operation.get("returnTypeString").and_then(Value::as_str));
    if let Some(return_type) = operation.get("returnType") {
        seeds.extend(type_names_from_ref(return_type));
    }
    for key in ["arguments", "args"] {
        let args = operation.get(key).and_then(Value::as_array);
        for arg in args.into_iter().flatten() {
            if arg.is_object() {
                seeds.extend(signature_type_names(arg));
            }
        }
    }
    seeds.extend(names_from_entries(operation.get("referencedTypes")));
    seeds
}

/// Compute the closure of type definitions reachable from `operation` within
/// `max_depth` hops of the seed set.
///
/// Seeds sit at depth 0 and are always included, even at `max_depth` 0.
/// Names with no entry in the registry are dangling references from the
/// generator and are dropped silently; the closure is best effort over
/// whatever resolves.
pub fn related_types(
    operation: &Value,
    registry: &TypeRegistry,
    max_depth: usize,
) -> Map<String, Value> {
    let mut related = Map::new();
    let mut queue: VecDeque<(String, usize)> = seed_type_names(operation)
        .into_iter()
        .map(|name| (name, 0))
        .collect();

    while let Some((name, depth)) = queue.pop_front() {
        if related.contains_key(&name) {
            continue;
        }
        let Some(type_def) = registry.get(&name).filter(|def| def.is_object()) else {
            debug!(%name, "dropping unresolved type reference");
            continue;
        };
        let references = if depth < max_depth {
            referenced_type_names(type_def)
        } else {
            HashSet::new()
        };
        related.insert(name, type_def.clone());
        for reference in references {
            if !related.contains_key(&reference) {
                queue.push_back((reference, depth + 1));
            }
        }
    }

    related
}
