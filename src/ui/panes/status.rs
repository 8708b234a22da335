//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_is_error: bool,
    op_count: usize,
    undo_depth: usize,
    redo_depth: usize,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: counts and the latest message
    let counts_text = format!(" Ops {} | Undo {} | Redo {} ", op_count, undo_depth, redo_depth);

    let left_spans = vec![
        Span::styled(
            counts_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            message,
            Style::default().fg(if message_is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans));
    frame.render_widget(left, layout[0]);

    // Right side: keybindings
    let right_spans = vec![
        Span::styled("Enter", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(" apply  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("^Z", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(" undo  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("^Y", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(" redo  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("↑/↓", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(" scroll  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("Esc", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(" quit ", Style::default().fg(DEFAULT_THEME.comment)),
    ];

    let right = Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
