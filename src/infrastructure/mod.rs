//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution used by the URL validator
//! - [`persistence`] - Process-local repository implementations

pub mod dns;
pub mod persistence;
