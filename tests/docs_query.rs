//! End-to-end tests over a temporary docs bundle.
//!
//! Exercises the full pipeline the binary runs: path resolution, document
//! loading, operation lookup, and the related-type closure.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::tempdir;

use graphql_docs_query::cli;
use graphql_docs_query::{find_operation, related_types, summarize_operation, DocPaths, DocsBundle};

fn write_bundle(root: &Path, operations: &Value, types: &Value) -> DocPaths {
    let data = root.join("_data");
    fs::create_dir_all(&data).unwrap();
    let operations_path = data.join("operations.json");
    let types_path = data.join("types.json");
    fs::write(&operations_path, serde_json::to_string_pretty(operations).unwrap()).unwrap();
    fs::write(&types_path, serde_json::to_string_pretty(types).unwrap()).unwrap();
    DocPaths {
        operations: operations_path,
        types: types_path,
    }
}

fn fixture_operations() -> Value {
    json!({
        "query": {
            "widgets": {
                "description": "List widgets",
                "returnTypeString": "[Widget!]!",
                "arguments": [
                    { "name": "filter", "typeString": "WidgetFilter" }
                ],
                "examples": [{ "label": "basic" }]
            },
            "node": {
                "returnType": { "kind": "INTERFACE", "name": "Node" },
                "args": [
                    { "name": "id", "typeString": "ID!" }
                ]
            }
        },
        "mutation": {
            "createWidget": {
                "directives": { "docGroup": { "name": "Widgets" } },
                "returnTypeString": "Widget",
                "referencedTypes": ["WidgetInput", { "ref": "Pruned" }]
            }
        }
    })
}

fn fixture_types() -> Value {
    json!({
        "Widget": {
            "interfaces": ["Node"],
            "fields": [
                { "name": "id", "typeString": "ID!" },
                { "name": "parts", "typeString": "[Part!]" }
            ]
        },
        "WidgetFilter": {
            "fields": [
                { "name": "name", "typeString": "String" }
            ]
        },
        "WidgetInput": {},
        "Node": { "possibleTypes": ["Widget"] },
        "Part": {
            "fields": [
                { "name": "widget", "typeString": "Widget" }
            ]
        }
    })
}

#[test]
fn test_bundle_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let paths = write_bundle(dir.path(), &fixture_operations(), &fixture_types());
    let bundle = DocsBundle::load(&paths).unwrap();

    // Flattened and sorted by (operationType, name).
    let names: Vec<&str> = bundle
        .operations
        .iter()
        .map(|op| op["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["createWidget", "node", "widgets"]);

    let summaries: Vec<_> = bundle.operations.iter().map(summarize_operation).collect();
    assert_eq!(summaries[0].doc_group, "Widgets");
    assert!(!summaries[0].has_examples);
    assert!(summaries[2].has_examples);
    assert_eq!(summaries[2].description, "List widgets");

    // Closure for `widgets` at depth 1: seeds plus one hop, cycle-safe
    // through Widget <-> Part, dangling names dropped.
    let operation = find_operation(&bundle.operations, "WIDGETS").unwrap();
    let related = related_types(operation, &bundle.registry, 1);
    let related_names: Vec<&str> = related.keys().map(String::as_str).collect();
    assert_eq!(related_names, vec!["Node", "Part", "Widget", "WidgetFilter"]);

    // Depth 0 stops at the resolvable seeds.
    let related = related_types(operation, &bundle.registry, 0);
    let related_names: Vec<&str> = related.keys().map(String::as_str).collect();
    assert_eq!(related_names, vec!["Widget", "WidgetFilter"]);

    // `createWidget` seeds include explicit referencedTypes; `Pruned` is
    // dangling and silently omitted.
    let operation = find_operation(&bundle.operations, "createWidget").unwrap();
    let related = related_types(operation, &bundle.registry, 0);
    let related_names: Vec<&str> = related.keys().map(String::as_str).collect();
    assert_eq!(related_names, vec!["Widget", "WidgetInput"]);
}

#[test]
fn test_cli_exit_codes() {
    let dir = tempdir().unwrap();
    write_bundle(dir.path(), &fixture_operations(), &fixture_types());
    let root = dir.path().to_str().unwrap().to_string();

    let code = cli::run(vec![
        "--docs-root".to_string(),
        root.clone(),
        "list-operations".to_string(),
    ]);
    assert_eq!(code, 0);

    // Globals after the subcommand behave identically.
    let code = cli::run(vec![
        "get-operation".to_string(),
        "widgets".to_string(),
        "--docs-root".to_string(),
        root.clone(),
    ]);
    assert_eq!(code, 0);

    let code = cli::run(vec![
        format!("--docs-root={root}"),
        "get-operation".to_string(),
        "doesNotExist".to_string(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn test_cli_reports_unreadable_bundle() {
    let code = cli::run(vec![
        "--docs-root".to_string(),
        "/nonexistent-docs-root".to_string(),
        "--operations-file".to_string(),
        "/nonexistent-docs-root/_data/operations.json".to_string(),
        "list-operations".to_string(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn test_file_overrides_win_over_docs_root() {
    let dir = tempdir().unwrap();
    let paths = write_bundle(dir.path(), &fixture_operations(), &fixture_types());
    let elsewhere = tempdir().unwrap();

    let code = cli::run(vec![
        "--docs-root".to_string(),
        elsewhere.path().to_str().unwrap().to_string(),
        "--operations-file".to_string(),
        paths.operations.to_str().unwrap().to_string(),
        "--types-file".to_string(),
        paths.types.to_str().unwrap().to_string(),
        "list-operations".to_string(),
    ]);
    assert_eq!(code, 0);
}

#[test]
fn test_negative_max_depth_clamped() {
    let dir = tempdir().unwrap();
    write_bundle(dir.path(), &fixture_operations(), &fixture_types());
    let root = dir.path().to_str().unwrap().to_string();

    let code = cli::run(vec![
        "--docs-root".to_string(),
        root,
        "get-operation".to_string(),
        "widgets".to_string(),
        "--max-depth".to_string(),
        "-3".to_string(),
    ]);
    assert_eq!(code, 0);
}

#[test]
fn test_examples_stripped_unless_requested() {
    let dir = tempdir().unwrap();
    let paths = write_bundle(dir.path(), &fixture_operations(), &fixture_types());
    let bundle = DocsBundle::load(&paths).unwrap();
    let operation = find_operation(&bundle.operations, "widgets").unwrap();
    assert!(operation.get("examples").is_some());

    // The store keeps examples; the CLI strips them from the payload. Both
    // flag spellings are accepted on the command line.
    let root = dir.path().to_str().unwrap().to_string();
    for flag in ["--include-examples", "--no-include-examples"] {
        let code = cli::run(vec![
            "--docs-root".to_string(),
            root.clone(),
            "get-operation".to_string(),
            "widgets".to_string(),
            flag.to_string(),
        ]);
        assert_eq!(code, 0);
    }
}

#[test]
fn test_fallback_root_never_used_with_overrides() {
    // An override pins the exact file even when the docs root is empty.
    let dir = tempdir().unwrap();
    let paths = write_bundle(dir.path(), &fixture_operations(), &fixture_types());

    let resolved = graphql_docs_query::loader::resolve_paths(
        Path::new("/nonexistent-docs-root"),
        Some(paths.operations.clone()),
        Some(paths.types.clone()),
        Path::new("/nonexistent-fallback"),
    );
    assert_eq!(resolved.operations, paths.operations);
    assert_eq!(resolved.types, paths.types);
}
