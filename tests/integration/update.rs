//! Update flows

use crate::common::{MockApi, WAIT, clear_field, type_text};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;
use userdesk::directory::{Msg, UPDATED_MESSAGE};
use userdesk::feedback::Notification;
use userdesk::validate::ValidationError;

#[test]
fn test_update_addresses_original_email() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 2);
    let update = api
        .server
        .mock("PUT", "/update/alice%40example.com")
        .match_body(Matcher::Json(json!({"name": "Alicia", "email": "alicia@example.com"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"success"}"#)
        .create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenUpdate);
    clear_field(&mut runtime);
    type_text(&mut runtime, "Alicia");
    runtime.dispatch(Msg::FocusNextField);
    clear_field(&mut runtime);
    type_text(&mut runtime, "alicia@example.com");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    update.assert();
    listing.assert();
    assert!(runtime.state().panel.is_none());
    assert_eq!(
        runtime.notifier(),
        &vec![Notification::Success(UPDATED_MESSAGE.to_string())]
    );
}

#[test]
fn test_update_invalid_email_sends_nothing() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 1);
    let update = api.server.mock("PUT", Matcher::Any).expect(0).create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenUpdate);
    runtime.dispatch(Msg::FocusNextField);
    clear_field(&mut runtime);
    type_text(&mut runtime, "alice@example");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    update.assert();
    listing.assert();
    let error = runtime.state().panel.as_ref().and_then(|p| p.error());
    assert_eq!(error, Some(ValidationError::InvalidEmail));
}

#[test]
fn test_update_server_error_keeps_draft() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 1);
    let update = api
        .server
        .mock("PUT", "/update/alice%40example.com")
        .with_status(500)
        .create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenUpdate);
    type_text(&mut runtime, "xyz");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    update.assert();
    listing.assert();
    assert_eq!(
        runtime.state().panel.as_ref().map(|p| p.draft.name.as_str()),
        Some("Alicexyz")
    );
    assert!(matches!(
        runtime.notifier().as_slice(),
        [Notification::Error(message)] if message.contains("500")
    ));
}
