//! HTTP implementation of [`UserService`]

use super::graphql::{self, UsersData};
use super::rest::{DeleteResponse, MessageResponse};
use super::{ApiError, MutationOutcome, UserService};
use crate::config::Config;
use crate::user::User;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};
use ureq::Agent;
use ureq::http::Response;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the directory API
#[derive(Clone)]
pub struct ApiClient {
    agent: Agent,
    api_url: String,
    graphql_url: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.api_url)
            .field("graphql_url", &self.graphql_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the given REST base URL and GraphQL endpoint
    #[must_use]
    pub fn new(api_url: impl Into<String>, graphql_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.new_agent(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            graphql_url: graphql_url.into(),
        }
    }

    /// Create a client from application configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_url.clone(),
            config.graphql_url.clone(),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    fn user_url(&self, route: &str, email: &str) -> String {
        format!("{}/{route}/{}", self.api_url, urlencoding::encode(email))
    }
}

fn read_json<T: DeserializeOwned>(
    method: &'static str,
    url: &str,
    result: Result<Response<ureq::Body>, ureq::Error>,
) -> Result<T, ApiError> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => {
            warn!(method, url, status, "Request rejected");
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Err(err) => {
            warn!(method, url, error = %err, "Request failed");
            return Err(ApiError::Transport {
                method,
                url: url.to_string(),
                source: Box::new(err),
            });
        }
    };

    response
        .into_body()
        .read_json()
        .map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source: Box::new(source),
        })
}

fn log_outcome(action: &str, key: &str, outcome: &MutationOutcome) {
    match outcome {
        MutationOutcome::Applied => info!(action, key, "Mutation applied"),
        MutationOutcome::Rejected(reason) => warn!(action, key, reason = %reason, "Mutation not applied"),
    }
}

impl UserService for ApiClient {
    fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.graphql_url.as_str();
        debug!(url, "Querying users");
        let result = self
            .agent
            .post(url)
            .header("User-Agent", USER_AGENT)
            .send_json(graphql::Request::users());
        let response: graphql::Response<UsersData> = read_json("POST", url, result)?;
        let users = response.into_users()?;
        debug!(count = users.len(), "Users loaded");
        Ok(users)
    }

    fn create_user(&self, user: &User) -> Result<MutationOutcome, ApiError> {
        let url = format!("{}/users", self.api_url);
        debug!(url = %url, email = %user.email, "Creating user");
        let result = self
            .agent
            .post(url.as_str())
            .header("User-Agent", USER_AGENT)
            .send_json(user);
        let outcome = read_json::<MessageResponse>("POST", &url, result)?.outcome();
        log_outcome("create", &user.email, &outcome);
        Ok(outcome)
    }

    fn update_user(&self, target_email: &str, user: &User) -> Result<MutationOutcome, ApiError> {
        let url = self.user_url("update", target_email);
        debug!(url = %url, "Updating user");
        let result = self
            .agent
            .put(url.as_str())
            .header("User-Agent", USER_AGENT)
            .send_json(user);
        let outcome = read_json::<MessageResponse>("PUT", &url, result)?.outcome();
        log_outcome("update", target_email, &outcome);
        Ok(outcome)
    }

    fn delete_user(&self, email: &str) -> Result<MutationOutcome, ApiError> {
        let url = self.user_url("delete", email);
        debug!(url = %url, "Deleting user");
        let result = self
            .agent
            .delete(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call();
        let outcome = read_json::<DeleteResponse>("DELETE", &url, result)?.outcome();
        log_outcome("delete", email, &outcome);
        Ok(outcome)
    }
}
