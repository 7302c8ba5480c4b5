//! Delete confirmation rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::directory::{DELETE_CONFIRM_LABEL, DELETE_CONFIRM_TEXT, DELETE_CONFIRM_TITLE};
use crate::tui::render::colors;
use crate::user::User;

/// Render the "Are you sure?" overlay for `user`
pub fn render_delete_confirm(frame: &mut Frame<'_>, user: &User) {
    let lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            DELETE_CONFIRM_TITLE,
            Style::default()
                .fg(colors::MODAL_BORDER_WARNING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name:  ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                user.name.as_str(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Email: ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(user.email.as_str(), Style::default().fg(colors::TEXT_PRIMARY)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            DELETE_CONFIRM_TEXT,
            Style::default().fg(colors::ACCENT_NEGATIVE),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Y] ",
                Style::default()
                    .fg(colors::ACCENT_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(DELETE_CONFIRM_LABEL, Style::default().fg(colors::TEXT_PRIMARY)),
            Span::styled("  ", Style::default()),
            Span::styled(
                "[N] ",
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Cancel", Style::default().fg(colors::TEXT_PRIMARY)),
        ]),
    ];

    // Height: content lines + 2 for borders
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_WARNING)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
