//! Operation Store
//!
//! Flattens the type-partitioned operations document into a deterministically
//! ordered list, projects per-operation summaries for listing, and resolves
//! a single operation by name.

use serde::Serialize;
use serde_json::{Map, Value};

/// Projection of one operation for `list-operations` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSummary {
    pub name: String,
    #[serde(rename = "operationType")]
    pub operation_type: String,
    pub description: String,
    #[serde(rename = "docGroup")]
    pub doc_group: String,
    #[serde(rename = "hasExamples")]
    pub has_examples: bool,
}

fn str_field<'a>(operation: &'a Value, key: &str) -> &'a str {
    operation.get(key).and_then(Value::as_str).unwrap_or("")
}

fn has_nonempty_string(record: &Map<String, Value>, key: &str) -> bool {
    record
        .get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Flatten the operations-by-type document into a single sorted list.
///
/// `name` defaults from the inner map key and `operationType` from the bucket
/// key when the record does not carry its own non-empty value. Entries that
/// are not objects are skipped. The result is sorted by (operationType, name)
/// compared as strings, so listing output is stable across invocations.
pub fn flatten_operations(operations_by_type: &Map<String, Value>) -> Vec<Value> {
    let mut operations = Vec::new();
    for (operation_type, entries) in operations_by_type {
        let Some(entries) = entries.as_object() else {
            continue;
        };
        for (operation_name, operation) in entries {
            let Some(record) = operation.as_object() else {
                continue;
            };
            let mut record = record.clone();
            if !has_nonempty_string(&record, "name") {
                record.insert("name".to_string(), Value::String(operation_name.clone()));
            }
            if !has_nonempty_string(&record, "operationType") {
                record.insert(
                    "operationType".to_string(),
                    Value::String(operation_type.clone()),
                );
            }
            operations.push(Value::Object(record));
        }
    }
    operations.sort_by(|a, b| {
        (str_field(a, "operationType"), str_field(a, "name"))
            .cmp(&(str_field(b, "operationType"), str_field(b, "name")))
    });
    operations
}

/// Python-style truthiness, used for `hasExamples`: presence of a non-empty
/// `examples` value is the only thing that matters.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Project one (flattened) operation to its listing summary.
pub fn summarize_operation(operation: &Value) -> OperationSummary {
    let doc_group = operation
        .get("directives")
        .and_then(|directives| directives.get("docGroup"))
        .and_then(|group| group.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("Uncategorized");
    let description = str_field(operation, "description").trim();

    OperationSummary {
        name: str_field(operation, "name").to_string(),
        operation_type: str_field(operation, "operationType").to_string(),
        description: description.to_string(),
        doc_group: doc_group.to_string(),
        has_examples: operation.get("examples").map(is_truthy).unwrap_or(false),
    }
}

/// Find an operation by name: exact match first, then a case-insensitive
/// fallback. The first match in list order wins, which is deterministic
/// because the list comes pre-sorted from [`flatten_operations`].
pub fn find_operation<'a>(operations: &'a [Value], name: &str) -> Option<&'a Value> {
    if let Some(operation) = operations
        .iter()
        .find(|op| op.get("name").and_then(Value::as_str) == Some(name))
    {
        return Some(operation);
    }
    let lowercase = name.to_lowercase();
    operations.iter().find(|op| {
        op.get("name")
            .and_then(Value::as_str)
            .is_some_and(|n| n.to_lowercase() == lowercase)
    })
}
