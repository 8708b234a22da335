//! History tape pane rendering

use crate::accumulator::operation::Operation;
use crate::ui::theme::DEFAULT_THEME;
use rust_decimal::Decimal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the operation tape.
///
/// Each line shows the entry index, the operation, and the running value
/// after that entry (an incremental replay of the log front to back). The
/// newest entry is highlighted; REDO-tagged entries get the secondary color.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &[Operation],
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if history.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 1, 0, 0));

    // Fold the tape front to back so every row carries its running value.
    let mut running = Decimal::ZERO;
    let last_index = history.len() - 1;
    let all_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, op)| {
            // History entries were validated on apply; re-application to the
            // same prefix cannot fail.
            running = match op.apply_to(running) {
                Ok(value) => value,
                Err(e) => unreachable!("history entry failed to replay: {}", e),
            };

            let mut spans = vec![
                Span::styled(
                    format!("{:>3}  ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{} {}", op.kind.symbol(), op.operand),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ];
            if let Some(note) = &op.note {
                spans.push(Span::styled(
                    format!("  [{}]", note),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::styled(
                format!("  = {}", running),
                Style::default().fg(DEFAULT_THEME.number),
            ));

            let item = ListItem::new(Line::from(spans));
            if i == last_index {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
