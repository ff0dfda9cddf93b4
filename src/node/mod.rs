//! Node dispatch.
//!
//! A [`NodeRegistry`] maps each registered type name to the resolver that
//! fetches records of that type. It is assembled once with
//! [`NodeRegistryBuilder`] and then only read, so a single instance can be
//! shared across requests without locking.
//!
//! Results distinguish three outcomes:
//!
//! - `Err(MalformedId | TypeMismatch | UnknownType)`: the client sent a bad token
//! - `Ok(None)`: a well-formed reference to a record that does not exist
//! - `Ok(Some(node))`: the record

mod registry;
mod resolver;

pub use registry::{NodeRegistry, NodeRegistryBuilder};
pub use resolver::NodeResolver;
