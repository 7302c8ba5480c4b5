use super::*;
use crate::api::stub::StubService;
use crate::api::UserService;
use crate::config::Config;
use crate::directory::Msg;
use crate::feedback::{Notification, Notifier};
use crate::user::User;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Cell;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

fn create_test_app(stub: StubService, settle: bool) -> App {
    let service: Arc<dyn UserService> = Arc::new(stub);
    let mut app = App::new(Config::default(), service);
    if settle {
        assert!(app.runtime.settle(Duration::from_secs(5)));
    }
    app
}

fn create_test_app_with_users() -> App {
    create_test_app(
        StubService::with_users(vec![
            User::new("Alice", "alice@example.com"),
            User::new("Bob", "bob@example.com"),
        ]),
        true,
    )
}

fn draw(app: &App) -> Result<Terminal<TestBackend>, Box<dyn Error>> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(terminal)
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer.cell((x, y)).map_or(" ", Cell::symbol))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_loading_hides_rows() -> Result<(), Box<dyn Error>> {
    let app = create_test_app(
        StubService::with_users(vec![User::new("Alice", "alice@example.com")]),
        false,
    );
    assert!(app.state().listing.is_loading());

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Loading…"));
    assert!(!text.contains("alice@example.com"));
    Ok(())
}

#[test]
fn test_render_loaded_table() -> Result<(), Box<dyn Error>> {
    let app = create_test_app_with_users();
    let text = screen_text(&draw(&app)?);

    assert!(text.contains("Users Information"));
    assert!(text.contains("[a] Add"));
    for column in ["#", "Name", "Email", "Action"] {
        assert!(text.contains(column), "missing column {column}");
    }
    assert!(text.contains("Alice"));
    assert!(text.contains("bob@example.com"));
    assert!(text.contains("[u] Update"));
    assert!(text.contains("2 users"));
    assert!(!text.contains("Loading…"));
    Ok(())
}

#[test]
fn test_render_rows_in_server_order() -> Result<(), Box<dyn Error>> {
    let app = create_test_app(
        StubService::with_users(vec![
            User::new("Zed", "zed@example.com"),
            User::new("Amy", "amy@example.com"),
        ]),
        true,
    );
    let text = screen_text(&draw(&app)?);
    let zed = text.find("Zed");
    let amy = text.find("Amy");
    assert!(zed.is_some() && amy.is_some());
    assert!(zed < amy);
    Ok(())
}

#[test]
fn test_render_selected_row_highlight() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::SelectNext);
    let terminal = draw(&app)?;
    let buffer = terminal.backend().buffer();

    // header line, table border, column header, Alice, Bob
    let alice_bg = buffer.cell((10, 3)).map(|c| c.bg);
    let bob_bg = buffer.cell((10, 4)).map(|c| c.bg);
    assert_eq!(bob_bg, Some(colors::SURFACE_HIGHLIGHT));
    assert_ne!(alice_bg, Some(colors::SURFACE_HIGHLIGHT));
    Ok(())
}

#[test]
fn test_render_empty_listing() -> Result<(), Box<dyn Error>> {
    let app = create_test_app(StubService::default(), true);
    let text = screen_text(&draw(&app)?);
    assert!(text.contains("No users found"));
    assert!(text.contains("0 users"));
    Ok(())
}

#[test]
fn test_render_failed_listing_replaces_view() -> Result<(), Box<dyn Error>> {
    let stub = StubService::default();
    stub.fail_listing(Some("db offline"));
    let app = create_test_app(stub, true);

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Error: db offline"));
    assert!(text.contains("Press r to retry"));
    assert!(!text.contains("Users Information"));
    Ok(())
}

#[test]
fn test_render_create_panel_with_error() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::OpenCreate);
    app.dispatch(Msg::InsertChar('A'));
    app.dispatch(Msg::Submit);

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Create a new user"));
    assert!(text.contains("Name must be 3 characters"));
    assert!(text.contains("[Enter] Submit"));
    Ok(())
}

#[test]
fn test_render_panel_footer_fits_80_columns() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::OpenUpdate);

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("[Enter] Update  [Tab] Switch field  [Esc] Close"));
    Ok(())
}

#[test]
fn test_render_update_panel() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::OpenUpdate);
    app.dispatch(Msg::FocusNextField);
    for _ in 0.."example.com".len() {
        app.dispatch(Msg::DeleteChar);
    }
    app.dispatch(Msg::Submit);

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Update the user"));
    assert!(text.contains("Editing alice@example.com"));
    assert!(text.contains("Invalid email!"));
    assert!(text.contains("[Enter] Update"));
    Ok(())
}

#[test]
fn test_render_pending_panel() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::OpenUpdate);
    app.dispatch(Msg::Submit);
    // completion not pumped yet
    assert!(app.state().panel.as_ref().is_some_and(|p| p.is_pending()));

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Saving…"));
    Ok(())
}

#[test]
fn test_render_delete_confirm() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.dispatch(Msg::RequestDelete);

    let text = screen_text(&draw(&app)?);
    assert!(text.contains("Are you sure?"));
    assert!(text.contains("You won't be able to revert this!"));
    assert!(text.contains("Yes, delete it!"));
    Ok(())
}

#[test]
fn test_render_alert_and_toast() -> Result<(), Box<dyn Error>> {
    let mut app = create_test_app_with_users();
    app.runtime.notifier_mut().notify(Notification::Alert {
        title: "Deleted!".to_string(),
        text: "Alice has been deleted.".to_string(),
    });
    app.runtime
        .notifier_mut()
        .notify(Notification::Success("User created successfully!".to_string()));

    let terminal = draw(&app)?;
    let text = screen_text(&terminal);
    assert!(text.contains("Alice has been deleted."));
    assert!(text.contains("Press any key to dismiss"));

    let toast_line = text.lines().nth(2).unwrap_or_default();
    assert!(toast_line.contains("User created successfully!"));
    Ok(())
}
