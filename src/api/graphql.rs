//! Wire shapes for the GraphQL listing query

use super::ApiError;
use crate::user::User;
use serde::{Deserialize, Serialize};

/// Operation name sent alongside [`USERS_QUERY`]
pub const USERS_OPERATION: &str = "get_Users";

/// The listing query document
pub const USERS_QUERY: &str = "query get_Users {\n  users {\n    name\n    email\n  }\n}";

/// Body of a GraphQL-over-HTTP POST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Request<'a> {
    /// Query document
    pub query: &'a str,
    /// Operation to run within the document
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
}

impl Request<'static> {
    /// The user listing request
    #[must_use]
    pub const fn users() -> Self {
        Self {
            query: USERS_QUERY,
            operation_name: USERS_OPERATION,
        }
    }
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Error {
    /// Human-readable message
    pub message: String,
}

/// A GraphQL response envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Response<T> {
    /// Result data, absent when execution failed
    pub data: Option<T>,
    /// Errors raised while executing the query
    #[serde(default)]
    pub errors: Vec<Error>,
}

/// `data` payload of the listing query
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UsersData {
    /// Users in server order; a null list reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<User>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<User>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Response<UsersData> {
    /// Extract the user list, turning GraphQL errors into [`ApiError::Query`]
    ///
    /// # Errors
    ///
    /// Returns an error if the response carries errors or no data.
    pub fn into_users(self) -> Result<Vec<User>, ApiError> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::Query(messages.join("; ")));
        }
        self.data
            .map(|data| data.users)
            .ok_or_else(|| ApiError::Query("Listing query returned no data".to_string()))
    }
}
