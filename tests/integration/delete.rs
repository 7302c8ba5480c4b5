//! Delete flows

use crate::common::{MockApi, WAIT};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use userdesk::directory::{DELETED_TITLE, Msg};
use userdesk::feedback::Notification;

#[test]
fn test_delete_confirmed_refreshes_and_alerts() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(
        &[("Alice", "alice@example.com"), ("Bob", "bob@example.com")],
        2,
    );
    let delete = api.mock_route("DELETE", "/delete/bob%40example.com", r#"{"affectedRows":1}"#);

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::SelectNext);
    runtime.dispatch(Msg::RequestDelete);
    runtime.dispatch(Msg::AnswerDelete(true));
    assert!(runtime.settle(WAIT));

    delete.assert();
    listing.assert();
    assert_eq!(
        runtime.notifier(),
        &vec![Notification::Alert {
            title: DELETED_TITLE.to_string(),
            text: "Bob has been deleted.".to_string(),
        }]
    );
}

#[test]
fn test_delete_declined_sends_nothing() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 1);
    let delete = api.server.mock("DELETE", Matcher::Any).expect(0).create();

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::RequestDelete);
    runtime.dispatch(Msg::AnswerDelete(false));
    assert!(runtime.settle(WAIT));

    delete.assert();
    listing.assert();
    assert!(runtime.state().confirm.is_none());
    assert!(runtime.notifier().is_empty());
}

#[test]
fn test_delete_zero_rows_is_error() {
    let mut api = MockApi::new();
    let listing = api.mock_listing(&[("Alice", "alice@example.com")], 1);
    let delete = api.mock_route("DELETE", "/delete/alice%40example.com", r#"{"affectedRows":0}"#);

    let mut runtime = api.started_runtime();
    runtime.dispatch(Msg::RequestDelete);
    runtime.dispatch(Msg::AnswerDelete(true));
    assert!(runtime.settle(WAIT));

    delete.assert();
    listing.assert();
    assert_eq!(
        runtime.notifier(),
        &vec![Notification::Error(
            "Could not delete Alice: no rows were deleted".to_string()
        )]
    );
    assert_eq!(runtime.state().listing.users().len(), 1);
}
