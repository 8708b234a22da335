//! Input line pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the command input line with a block cursor
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
