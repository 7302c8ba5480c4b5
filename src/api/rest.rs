//! Wire shapes for the REST mutations

use super::MutationOutcome;
use serde::Deserialize;

/// The `message` value that marks an applied create or update
pub const SUCCESS_MESSAGE: &str = "success";

/// Response to `POST /users` and `PUT /update/{email}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    /// Status message; only [`SUCCESS_MESSAGE`] counts as applied
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Interpret the response
    #[must_use]
    pub fn outcome(self) -> MutationOutcome {
        match self.message {
            Some(message) if message == SUCCESS_MESSAGE => MutationOutcome::Applied,
            Some(message) => MutationOutcome::Rejected(format!("server replied \"{message}\"")),
            None => MutationOutcome::Rejected("server reply carried no message".to_string()),
        }
    }
}

/// Response to `DELETE /delete/{email}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    /// Rows removed by the delete; zero or absent means nothing happened
    #[serde(rename = "affectedRows", default)]
    pub affected_rows: Option<u64>,
}

impl DeleteResponse {
    /// Interpret the response
    #[must_use]
    pub fn outcome(self) -> MutationOutcome {
        match self.affected_rows {
            Some(rows) if rows > 0 => MutationOutcome::Applied,
            _ => MutationOutcome::Rejected("no rows were deleted".to_string()),
        }
    }
}
