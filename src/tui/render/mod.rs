//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `table`: The user table
//! - `modals`: Panel, confirmation and dialog overlays

pub(crate) mod colors;
mod modals;
mod table;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::Action;
use crate::directory::Listing;
use crate::feedback::{FeedbackCenter, ToastLevel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    if let Listing::Failed(message) = &state.listing {
        render_failure(frame, app, message, chunks[0]);
    } else {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(chunks[0]);
        render_header(frame, app, main[0]);
        table::render_users(frame, state, &app.config.keys, main[1]);
    }
    render_status_bar(frame, app, chunks[1]);

    if let Some(panel) = &state.panel {
        modals::render_panel_overlay(frame, panel);
    }
    if let Some(user) = &state.confirm {
        modals::render_delete_confirm(frame, user);
    }
    if let Some(alert) = app.feedback().alert() {
        modals::render_alert_modal(frame, alert);
    }
    render_toasts(frame, app.feedback());
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let add_key = app.config.keys.format_keys(Action::AddUser);
    let add_key = add_key.split('/').next().unwrap_or_default();
    let add_label = format!("[{add_key}] Add ");

    let add_width = u16::try_from(add_label.chars().count())
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(add_width)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Users Information",
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(title, chunks[0]);

    let add = Paragraph::new(Line::from(Span::styled(
        add_label,
        Style::default()
            .fg(colors::ACCENT_POSITIVE)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::SURFACE))
    .alignment(Alignment::Right);
    frame.render_widget(add, chunks[1]);
}

/// A failed listing replaces the whole view
fn render_failure(frame: &mut Frame<'_>, app: &App, message: &str, area: Rect) {
    let refresh = app.config.keys.format_keys(Action::Refresh);
    let lines = vec![
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default()
                .fg(colors::MODAL_BORDER_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Press {refresh} to retry"),
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_ERROR)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let hints = app.config.keys.status_hints();
    let left = match &state.listing {
        Listing::Loading => format!(" Loading users… | {hints} "),
        Listing::Failed(_) => format!(" Listing failed | {hints} "),
        Listing::Loaded(users) => {
            let noun = if users.len() == 1 { "user" } else { "users" };
            format!(" {} {noun} | {hints} ", users.len())
        }
    };

    let status = Paragraph::new(Line::from(Span::styled(
        left,
        Style::default().fg(colors::TEXT_DIM),
    )))
    .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(status, area);
}

/// Stack toasts top-center, newest at the bottom
fn render_toasts(frame: &mut Frame<'_>, feedback: &FeedbackCenter) {
    let area = frame.area();
    let mut y = area.y.saturating_add(1);

    for toast in feedback.toasts() {
        if y.saturating_add(3) > area.bottom() {
            break;
        }
        let color = match toast.level {
            ToastLevel::Success => colors::ACCENT_POSITIVE,
            ToastLevel::Error => colors::ACCENT_NEGATIVE,
        };
        let icon = match toast.level {
            ToastLevel::Success => "✔",
            ToastLevel::Error => "✖",
        };
        let text = format!(" {icon} {} ", toast.message);
        let width = u16::try_from(text.chars().count() + 2)
            .unwrap_or(u16::MAX)
            .min(area.width);
        let rect = Rect {
            x: area.x + (area.width - width) / 2,
            y,
            width,
            height: 3,
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(colors::TEXT_PRIMARY),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
        y = y.saturating_add(3);
    }
}
