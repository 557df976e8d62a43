//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.

pub mod link;

pub use link::Link;
