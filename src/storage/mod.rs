//! Backing store for the demo directory.
//!
//! Records live in memory and are loaded from a YAML file:
//!
//! ```yaml
//! businesses:
//!   - id: "19"
//!     name: Joe's Diner
//!     city: Springfield
//! people:
//!   - id: 1
//!     name: Ada Lovelace
//!     employer: "19"
//! ```
//!
//! Business ids are strings and person ids are integers, so the two node
//! types exercise both kinds of internal id.

mod directory;

pub use directory::{Directory, DirectoryData, atomic_write};
