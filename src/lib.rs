//! GraphQL Docs Query
//!
//! Read-only command-line lookup over a pre-generated GraphQL schema
//! document set. An external documentation generator emits two JSON
//! artifacts; this crate lists the operations they describe and retrieves
//! full details for one operation together with a bounded-depth closure of
//! the types its signature reaches.
//!
//! ## Inputs
//!
//! ```text
//! <docs-root>/
//! └── _data/
//!     ├── operations.json   # operation type -> operation name -> record
//!     └── types.json        # type name -> type definition
//! ```
//!
//! Both documents are loaded fresh per invocation; there is no caching and
//! no mutation beyond stripping `examples` from output when not requested.

pub mod cli;
pub mod closure;
pub mod error;
pub mod extract;
pub mod loader;
pub mod operations;
pub mod registry;

pub use closure::{related_types, seed_type_names};
pub use error::{DocRole, DocsError, Result};
pub use extract::{names_from_entries, type_names_from_ref, type_names_from_string};
pub use loader::{DocPaths, DocsBundle};
pub use operations::{find_operation, flatten_operations, summarize_operation, OperationSummary};
pub use registry::{referenced_type_names, TypeRegistry};
