//! GraphQL Docs Query CLI
//!
//! Lists operations or fetches one operation with its related-type closure.
//! Stdout carries JSON results only; diagnostics and error payloads go to
//! stderr.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(graphql_docs_query::cli::run(args));
}
