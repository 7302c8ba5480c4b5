//! Directory API: the GraphQL listing query and the REST mutations
//!
//! [`UserService`] is the seam the view talks to. [`ApiClient`] implements it
//! over HTTP; tests substitute in-memory services.

mod client;
pub mod graphql;
pub mod rest;

pub use client::ApiClient;

use crate::user::User;

/// Result of a mutation the server answered well-formed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server reports the change was applied
    Applied,
    /// The server answered but did not apply the change
    Rejected(String),
}

impl MutationOutcome {
    /// Whether the change was applied
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Failure talking to the directory API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error status
    #[error("{method} {url} failed with status {status}")]
    Status {
        /// HTTP method
        method: &'static str,
        /// Request URL
        url: String,
        /// Response status code
        status: u16,
    },
    /// The request never produced a response
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method
        method: &'static str,
        /// Request URL
        url: String,
        /// Underlying transport error
        #[source]
        source: Box<ureq::Error>,
    },
    /// The response body was not the expected JSON
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL
        url: String,
        /// Underlying decode error
        #[source]
        source: Box<ureq::Error>,
    },
    /// The listing query returned GraphQL errors or no data
    #[error("{0}")]
    Query(String),
}

/// Operations the user directory needs from its backend
pub trait UserService: Send + Sync {
    /// Fetch every user, in server order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or its response is malformed.
    fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    fn create_user(&self, user: &User) -> Result<MutationOutcome, ApiError>;

    /// Replace the user addressed by `target_email` with `user`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    fn update_user(&self, target_email: &str, user: &User) -> Result<MutationOutcome, ApiError>;

    /// Delete the user addressed by `email`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    fn delete_user(&self, email: &str) -> Result<MutationOutcome, ApiError>;
}
