//! # relay-node - Relay global object identification
//!
//! Encodes `(type name, internal id)` pairs into opaque global IDs, decodes
//! them back, and dispatches decoded IDs to per-type resolvers. Ships with an
//! async-graphql integration and a small demo directory served over HTTP.
//!
//! ## Quick Start
//!
//! ```
//! use relay_node::global_id::{decode, decode_with_expected_type, encode};
//!
//! let id = encode("Business", "19").unwrap();
//! let node = decode(id.as_str()).unwrap();
//! assert_eq!(node.type_name, "Business");
//! assert_eq!(node.internal_id, "19");
//!
//! // References of a known type should always be type-checked.
//! assert!(decode_with_expected_type(id.as_str(), "Person").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`global_id`]: the global ID codec
//! - [`node`]: per-type resolver registry and node dispatch
//! - [`graphql`]: async-graphql schema, `Node` interface and HTTP server
//! - [`config`]: configuration loading and management
//! - [`error`]: error types and result aliases
//! - [`model`]: directory records (`Business`, `Person`)
//! - [`storage`]: in-memory directory backed by a YAML file
//! - [`cli`]: command-line interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.relay-node.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RelayError` enum and `Result<T>` type alias.
pub mod error;

pub mod global_id;

/// GraphQL schema and resolvers.
///
/// Provides async-graphql schema for fetching and mutating directory nodes.
pub mod graphql;

pub mod logging;

/// Data models for the directory.
pub mod model;

pub mod node;

/// In-memory directory storage.
pub mod storage;

/// Input validation utilities.
pub mod validation;
