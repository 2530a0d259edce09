//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code to URL mapping.
///
/// There is no update or delete: a link is inserted once and read any number
/// of times afterwards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link unless its code is already taken.
    ///
    /// The existence check and the insert happen as one atomic step, so two
    /// concurrent callers can never both claim the same code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if the link was stored
    /// - `Ok(None)` if the code already exists (nothing is changed)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError>;

    /// Finds a link by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
