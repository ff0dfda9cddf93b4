//! Records held by the directory.
//!
//! - [`Business`]: keyed by a string id
//! - [`Person`]: keyed by an integer id, optionally employed by a business

mod business;
mod person;

pub use business::Business;
pub use person::Person;
