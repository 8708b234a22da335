//! Current-value pane rendering

use crate::accumulator::operation::Operation;
use crate::ui::theme::DEFAULT_THEME;
use rust_decimal::Decimal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the current value and the operation that produced it
pub fn render_value_pane(
    frame: &mut Frame,
    area: Rect,
    value: Decimal,
    last_op: Option<&Operation>,
) {
    let block = Block::default()
        .title(" Value ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let last_line = match last_op {
        Some(op) => Line::from(Span::styled(
            format!("after {}", op),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        None => Line::from(Span::styled(
            "start value",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        last_line,
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
