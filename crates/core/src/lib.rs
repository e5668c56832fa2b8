//! Domain types and rules shared by the `wells` crates.
//!
//! Nothing in here touches the database or HTTP: the persistence layer
//! (`wells-db`) and the web layer (`wells-api`) both build on it.

pub mod error;
pub mod types;
pub mod well;
