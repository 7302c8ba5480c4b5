//! Create flows

use crate::common::{MockApi, WAIT, type_text};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;
use userdesk::directory::{CREATED_MESSAGE, Msg};
use userdesk::feedback::Notification;
use userdesk::validate::ValidationError;

#[test]
fn test_create_success_refreshes_and_closes() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[], 2);
    let create = api
        .server
        .mock("POST", "/users")
        .match_body(Matcher::Json(json!({"name": "Carol", "email": "carol@example.com"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"success"}"#)
        .create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenCreate);
    type_text(&mut runtime, "  Carol ");
    runtime.dispatch(Msg::FocusNextField);
    type_text(&mut runtime, "carol@example.com");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    create.assert();
    listing.assert();
    assert!(runtime.state().panel.is_none());
    assert_eq!(
        runtime.notifier(),
        &vec![Notification::Success(CREATED_MESSAGE.to_string())]
    );
}

#[test]
fn test_create_short_name_sends_nothing() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[], 1);
    let create = api.server.mock("POST", "/users").expect(0).create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenCreate);
    type_text(&mut runtime, "Al");
    runtime.dispatch(Msg::FocusNextField);
    type_text(&mut runtime, "al@example.com");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    create.assert();
    listing.assert();
    let error = runtime.state().panel.as_ref().and_then(|p| p.error());
    assert_eq!(error, Some(ValidationError::NameTooShort));
}

#[test]
fn test_create_rejected_keeps_panel() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[], 1);
    let create = api.mock_route("POST", "/users", r#"{"message":"duplicate email"}"#);

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::OpenCreate);
    type_text(&mut runtime, "Carol");
    runtime.dispatch(Msg::FocusNextField);
    type_text(&mut runtime, "carol@example.com");
    runtime.dispatch(Msg::Submit);
    assert!(runtime.settle(WAIT));

    create.assert();
    listing.assert();
    let panel = runtime.state().panel.as_ref();
    assert_eq!(panel.map(|p| p.draft.name.as_str()), Some("Carol"));
    assert_eq!(panel.map(|p| p.is_pending()), Some(false));
    assert_eq!(
        runtime.notifier(),
        &vec![Notification::Error(
            "Could not create user: server replied \"duplicate email\"".to_string()
        )]
    );
}
