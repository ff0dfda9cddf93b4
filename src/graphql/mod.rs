//! GraphQL schema and resolvers.
//!
//! Exposes the directory through the Relay object identification
//! conventions: every object implements `Node`, its `id` field holds a
//! global ID, and any node can be refetched through the `node` root field.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! relay-node serve --port 4000
//!
//! # Execute a query from CLI
//! relay-node query '{ node(id: "QnVzaW5lc3M6MTk") { id ... on Business { name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `node`, `nodes`, `business`, `person`, `businesses`, `people`
//! - **Mutations**: `renameBusiness`, `hirePerson`
//!
//! Codec and dispatch failures surface as field errors whose
//! `extensions.code` is one of `MALFORMED_ID`, `TYPE_MISMATCH`,
//! `UNKNOWN_TYPE` and so on; the rest of the response is unaffected.

mod error;
mod schema;
mod server;
mod types;

pub use schema::{AppState, MutationRoot, QueryRoot, RelaySchema, build_registry, build_schema};
pub use server::{router, run_server};
pub use types::*;
