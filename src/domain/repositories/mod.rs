//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
