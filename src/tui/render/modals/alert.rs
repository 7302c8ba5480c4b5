//! Success dialog rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect_absolute, wrap_words};
use crate::feedback::Alert;
use crate::tui::render::colors;

/// Render the dialog that stays up until any key is pressed
pub fn render_alert_modal(frame: &mut Frame<'_>, alert: &Alert) {
    // 44 chars fit inside a 50% modal on an 80 column terminal
    let max_line_width = 44;
    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            format!("✔ {}", alert.title),
            Style::default()
                .fg(colors::ACCENT_POSITIVE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    lines.extend(
        wrap_words(&alert.text, max_line_width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY)))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    // Height: content lines + 2 for borders, min 7 lines
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX).max(7);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT_POSITIVE)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
