//! Create/update panel rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::directory::Panel;
use crate::tui::render::colors;
use crate::user::Field;

/// Render the form panel with inline validation errors
pub fn render_panel_overlay(frame: &mut Frame<'_>, panel: &Panel) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    if let Some(target) = panel.target() {
        lines.push(Line::from(vec![
            Span::styled("Editing ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(target, Style::default().fg(colors::TEXT_PRIMARY)),
        ]));
        lines.push(Line::from(""));
    }

    for field in [Field::Name, Field::Email] {
        let focused = panel.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_DIM)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = panel.draft.get(field);
        let text = if focused {
            format!(" {value}│")
        } else {
            format!(" {value}")
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(colors::TEXT_PRIMARY).bg(colors::INPUT_BG),
        )));

        match panel.error_for(field) {
            Some(error) => lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(colors::MODAL_BORDER_ERROR),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    lines.push(footer(panel));

    // Height: content lines + 2 for borders
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(70, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", panel.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn footer(panel: &Panel) -> Line<'static> {
    if panel.is_pending() {
        return Line::from(Span::styled(
            "Saving…",
            Style::default()
                .fg(colors::ACCENT_WARNING)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let key = Style::default()
        .fg(colors::SELECTED)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(colors::TEXT_DIM);
    Line::from(vec![
        Span::styled("[Enter] ", key),
        Span::styled(panel.submit_label(), text),
        Span::styled("  [Tab] ", key),
        Span::styled("Switch field", text),
        Span::styled("  [Esc] ", key),
        Span::styled("Close", text),
    ])
}
