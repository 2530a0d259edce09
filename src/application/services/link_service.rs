//! Short code issuing and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};

/// Default number of generate-and-insert rounds before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for issuing codes and resolving them back to URLs.
///
/// Does not validate URLs; callers run [`super::UrlValidator`] first.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_length: usize,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a link service with the default code length and attempt limit.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_code_policy(link_repository, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a link service issuing `code_length`-character codes and
    /// retrying at most `max_attempts` times on collision.
    pub fn with_code_policy(
        link_repository: Arc<L>,
        code_length: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_repository,
            code_length,
            max_attempts,
        }
    }

    /// Stores `original_url` under a freshly generated code.
    ///
    /// # Code Generation
    ///
    /// - Generates a cryptographically random code
    /// - Inserts it only if no link already holds that code
    /// - On collision, generates a new code, up to `max_attempts` times
    ///
    /// The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the random source fails or every
    /// attempt collides.
    pub async fn shorten(&self, original_url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length).map_err(|e| {
                AppError::internal(
                    "Failed to generate short code",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            let new_link = NewLink {
                code,
                original_url: original_url.clone(),
            };

            match self.link_repository.insert_if_absent(new_link).await? {
                Some(link) => return Ok(link),
                None => warn!(attempt, "Generated code already in use, regenerating"),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Looks up the link stored under `code`.
    ///
    /// An empty code is an ordinary miss.
    pub async fn resolve(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = self.link_repository.find_by_code(code).await?;
        debug!(code, hit = link.is_some(), "Resolved short code");
        Ok(link)
    }

    /// Retrieves a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.resolve(code)
            .await?
            .ok_or_else(|| AppError::not_found("short url not found", json!({ "code": code })))
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
