//! Repository implementations.
//!
//! Storage is volatile and process-local: the mapping lives for as long as
//! the process does.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Code to URL mapping backed by a sharded concurrent map

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
