//! Global object identification.
//!
//! Every node exposed to clients carries a single opaque ID that encodes both
//! its type name and its backing-store key:
//!
//! ```text
//! ("Business", "19")  --join-->  "Business:19"  --base64-->  "QnVzaW5lc3M6MTk"
//! ```
//!
//! Decoding reverses both steps and splits on the *first* `:` only, so
//! internal ids are free to contain colons while type names never can.
//!
//! ## Components
//!
//! - [`IdCodec`]: encoder/decoder configured with a primary [`IdFormat`]
//!   and optional legacy formats it still accepts
//! - [`encode`], [`decode`], [`decode_with_expected_type`]: the same
//!   operations on the default codec
//! - [`Identify`]: hooks a node type implements so its ID can be derived
//!   from a resolved value
//!
//! The codec is pure: no I/O, no shared state, safe to call from any task.
//! IDs are encoded, not signed. Anyone can forge a well-formed token, so
//! resolvers still apply their own authorization.

mod codec;
mod types;

pub use codec::{IdCodec, IdFormat, decode, decode_with_expected_type, encode};
pub use types::{DELIMITER, GlobalId, Identify, InternalId, NodeDescriptor, TypeName};
