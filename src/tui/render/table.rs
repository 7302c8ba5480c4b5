//! User table rendering

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::colors;
use crate::config::{Action, KeyBindings};
use crate::directory::{DirectoryState, Listing};

const WIDTHS: [Constraint; 4] = [
    Constraint::Length(4),
    Constraint::Percentage(30),
    Constraint::Percentage(40),
    Constraint::Min(18),
];

/// Render the users table, one row per user in server order
pub fn render_users(frame: &mut Frame<'_>, state: &DirectoryState, keys: &KeyBindings, area: Rect) {
    let header = Row::new(["#", "Name", "Email", "Action"]).style(
        Style::default()
            .fg(colors::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));

    let rows = match &state.listing {
        Listing::Loading => vec![placeholder_row("Loading…")],
        Listing::Loaded(users) if users.is_empty() => vec![placeholder_row("No users found")],
        Listing::Loaded(users) => {
            let actions = action_hint(keys);
            users
                .iter()
                .enumerate()
                .map(|(i, user)| {
                    Row::new(vec![
                        Cell::from((i + 1).to_string()),
                        Cell::from(user.name.as_str()),
                        Cell::from(user.email.as_str()),
                        Cell::from(actions.clone()),
                    ])
                    .style(Style::default().fg(colors::TEXT_PRIMARY))
                })
                .collect()
        }
        Listing::Failed(_) => Vec::new(),
    };

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(colors::SURFACE_HIGHLIGHT)
                .fg(colors::SELECTED),
        );

    let mut table_state = TableState::default();
    if !state.listing.users().is_empty() {
        table_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn placeholder_row(text: &str) -> Row<'_> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(
            text,
            Style::default()
                .fg(colors::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
}

fn action_hint(keys: &KeyBindings) -> Line<'static> {
    let first = |action| {
        keys.format_keys(action)
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string()
    };
    Line::from(vec![
        Span::styled(
            format!("[{}] Update", first(Action::UpdateUser)),
            Style::default().fg(colors::SELECTED),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}] Delete", first(Action::DeleteUser)),
            Style::default().fg(colors::ACCENT_NEGATIVE),
        ),
    ])
}
