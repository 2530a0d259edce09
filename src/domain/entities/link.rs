//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a generated code to the URL it stands for.
///
/// `original_url` is kept exactly as submitted. Links are never updated;
/// the store only inserts and reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    /// Materializes the link, stamping it with the current time.
    pub fn into_link(self) -> Link {
        Link::new(self.code, self.original_url, Utc::now())
    }
}
