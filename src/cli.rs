//! Command-Line Interface
//!
//! Two subcommands over a loaded docs bundle. Global options may appear
//! before or after the subcommand token; a token-rewriting pass relocates
//! trailing ones before clap ever sees the argument vector.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::closure::related_types;
use crate::error::{DocsError, Result};
use crate::loader::{defaults, resolve_paths, DocsBundle};
use crate::operations::{find_operation, summarize_operation, OperationSummary};

/// Subcommand tokens recognized by the repositioning pass.
const SUBCOMMANDS: [&str; 2] = ["list-operations", "get-operation"];

/// Global options that take a value, recognized by the repositioning pass.
const GLOBAL_OPTIONS_WITH_VALUES: [&str; 3] =
    ["--docs-root", "--operations-file", "--types-file"];

#[derive(Debug, Parser)]
#[command(name = "graphql-docs")]
#[command(about = "Inspect generated GraphQL docs JSON for operation-level lookup")]
pub struct Cli {
    /// Directory containing _data/operations.json and _data/types.json
    #[arg(long, default_value = defaults::DOCS_ROOT)]
    pub docs_root: PathBuf,

    /// Override the operations JSON path
    #[arg(long)]
    pub operations_file: Option<PathBuf>,

    /// Override the types JSON path
    #[arg(long)]
    pub types_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List operation names and descriptions
    ListOperations,

    /// Fetch full details for one operation, with its related types
    GetOperation {
        /// Operation name to fetch
        operation_name: String,

        /// Max type traversal depth
        #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
        max_depth: i64,

        /// Include examples in the operation payload
        #[arg(long, overrides_with = "no_include_examples")]
        include_examples: bool,

        /// Exclude examples from the operation payload
        #[arg(long, overrides_with = "include_examples")]
        no_include_examples: bool,
    },
}

/// Move global options found after the subcommand token to just before it.
///
/// `args` is the argument vector without the program name. The relative
/// order of the moved options is preserved, as is the order of everything
/// else, so `get-operation Foo --docs-root /x` parses identically to
/// `--docs-root /x get-operation Foo`. With no subcommand token, or nothing
/// to move, the vector is returned unchanged.
pub fn normalize_global_option_placement(args: Vec<String>) -> Vec<String> {
    let Some(command_index) = args
        .iter()
        .position(|token| SUBCOMMANDS.contains(&token.as_str()))
    else {
        return args;
    };

    let after_command = &args[command_index + 1..];
    let mut moved: Vec<String> = Vec::new();
    let mut remaining: Vec<String> = Vec::new();

    let mut idx = 0;
    while idx < after_command.len() {
        let token = &after_command[idx];

        let is_inline_option = GLOBAL_OPTIONS_WITH_VALUES.iter().any(|option| {
            token
                .strip_prefix(option)
                .is_some_and(|rest| rest.starts_with('='))
        });
        if is_inline_option {
            moved.push(token.clone());
            idx += 1;
            continue;
        }

        if GLOBAL_OPTIONS_WITH_VALUES.contains(&token.as_str()) {
            moved.push(token.clone());
            if let Some(value) = after_command.get(idx + 1) {
                moved.push(value.clone());
                idx += 2;
            } else {
                idx += 1;
            }
            continue;
        }

        remaining.push(token.clone());
        idx += 1;
    }

    if moved.is_empty() {
        return args;
    }

    let mut normalized = args[..command_index].to_vec();
    normalized.extend(moved);
    normalized.push(args[command_index].clone());
    normalized.extend(remaining);
    normalized
}

/// Parse `args` (program name excluded), run the selected command, and
/// return the process exit code. Results go to stdout as JSON; errors go to
/// stderr as a JSON object.
pub fn run(args: Vec<String>) -> i32 {
    let args = normalize_global_option_placement(args);
    let cli = Cli::parse_from(std::iter::once("graphql-docs".to_string()).chain(args));
    match execute(cli) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(error) => {
            let payload = serde_json::to_string_pretty(&error.to_payload())
                .unwrap_or_else(|_| error.to_payload().to_string());
            eprintln!("{payload}");
            1
        }
    }
}

fn execute(cli: Cli) -> Result<String> {
    let paths = resolve_paths(
        &cli.docs_root,
        cli.operations_file,
        cli.types_file,
        Path::new(defaults::FALLBACK_DOCS_ROOT),
    );
    let bundle = DocsBundle::load(&paths)?;

    match cli.command {
        Commands::ListOperations => {
            let summaries: Vec<OperationSummary> =
                bundle.operations.iter().map(summarize_operation).collect();
            Ok(serde_json::to_string_pretty(&summaries)?)
        }
        Commands::GetOperation {
            operation_name,
            max_depth,
            include_examples,
            no_include_examples,
        } => {
            let operation = find_operation(&bundle.operations, &operation_name).ok_or(
                DocsError::OperationNotFound {
                    name: operation_name,
                },
            )?;
            let mut operation = operation.clone();

            let include = if no_include_examples {
                false
            } else if include_examples {
                true
            } else {
                defaults::INCLUDE_EXAMPLES
            };
            if !include {
                if let Some(record) = operation.as_object_mut() {
                    record.remove("examples");
                }
            }

            let max_depth = max_depth.max(0) as usize;
            let related = related_types(&operation, &bundle.registry, max_depth);
            let payload = json!({
                "operation": operation,
                "relatedTypes": Value::Object(related),
            });
            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}
