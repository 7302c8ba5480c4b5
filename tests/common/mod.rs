//! Common test utilities shared across integration tests
//!
//! [`MockApi`] stands up a mockito server that speaks both the GraphQL
//! listing query and the REST mutation routes, and builds a [`Runtime`]
//! wired to it through the real [`ApiClient`].

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use userdesk::api::{ApiClient, UserService};
use userdesk::directory::Msg;
use userdesk::feedback::Notification;
use userdesk::Runtime;

/// How long a flow may take before the test fails
pub const WAIT: Duration = Duration::from_secs(10);

pub type TestRuntime = Runtime<Vec<Notification>>;

/// A mock user API server
pub struct MockApi {
    pub server: ServerGuard,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            server: mockito::Server::new(),
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(
            self.server.url(),
            format!("{}/graphql", self.server.url()),
            Duration::from_secs(5),
        )
    }

    /// Runtime that has mounted and applied its first listing
    pub fn started_runtime(&self) -> TestRuntime {
        let service: Arc<dyn UserService> = Arc::new(self.client());
        let mut runtime = Runtime::new(service, Vec::new());
        runtime.start();
        assert!(runtime.settle(WAIT), "initial listing did not complete");
        runtime
    }

    /// Listing query answered with `users`, expected exactly `hits` times
    pub fn mock_listing(&mut self, users: &[(&str, &str)], hits: usize) -> Mock {
        let users: Vec<_> = users
            .iter()
            .map(|(name, email)| json!({"name": name, "email": email}))
            .collect();
        self.server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({"operationName": "get_Users"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"data": {"users": users}}).to_string())
            .expect(hits)
            .create()
    }

    /// A REST route answering `body` with status 200
    pub fn mock_route(&mut self, method: &str, path: &str, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

pub fn type_text(runtime: &mut TestRuntime, text: &str) {
    for c in text.chars() {
        runtime.dispatch(Msg::InsertChar(c));
    }
}

/// Empty the focused field of the open panel
pub fn clear_field(runtime: &mut TestRuntime) {
    let len = runtime
        .state()
        .panel
        .as_ref()
        .map_or(0, |panel| panel.draft.get(panel.focus).chars().count());
    for _ in 0..len {
        runtime.dispatch(Msg::DeleteChar);
    }
}
