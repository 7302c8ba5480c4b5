//! Listing query flows

use crate::common::{MockApi, WAIT};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use userdesk::api::UserService;
use userdesk::directory::Msg;
use userdesk::feedback::Notification;
use userdesk::{ApiClient, Listing, Runtime, User};

#[test]
fn test_mount_shows_users_in_server_order() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(
        &[("Zed", "zed@example.com"), ("Amy", "amy@example.com")],
        1,
    );

    let runtime = api.started_runtime();

    listing.assert();
    assert_eq!(
        runtime.state().listing,
        Listing::Loaded(vec![
            User::new("Zed", "zed@example.com"),
            User::new("Amy", "amy@example.com"),
        ])
    );
    assert!(runtime.notifier().is_empty());
}

#[test]
fn test_query_error_replaces_listing() {
    let mut api = MockApi::new();
    let listing = api.mock_route(
        "POST",
        "/graphql",
        r#"{"data":null,"errors":[{"message":"db offline"}]}"#,
    );

    let mut runtime = api.started_runtime();

    listing.assert();
    assert_eq!(runtime.state().listing, Listing::Failed("db offline".to_string()));

    // Nothing to create into while the listing is broken
    runtime.dispatch(Msg::OpenCreate);
    assert!(runtime.state().panel.is_none());
}

#[test]
fn test_refresh_refetches() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 2);

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::Refresh);
    assert!(runtime.state().listing.is_loading());
    assert!(runtime.settle(WAIT));

    listing.assert();
    assert_eq!(runtime.state().listing.users().len(), 1);
}

#[test]
fn test_unreachable_api_is_query_failure() {
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        "http://127.0.0.1:9/graphql",
        Duration::from_millis(500),
    );
    let service: Arc<dyn UserService> = Arc::new(client);
    let mut runtime = Runtime::new(service, Vec::<Notification>::new());
    runtime.start();

    assert!(runtime.settle(WAIT));
    assert!(matches!(runtime.state().listing, Listing::Failed(_)));
}
