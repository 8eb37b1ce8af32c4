//! Narration pane: the description of every step so far

use super::clamp_scroll;
use crate::catalog::Replay;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render steps `0..=position`, newest at the bottom
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    replay: &Replay,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = replay
        .frames
        .iter()
        .take(position + 1)
        .map(|f| {
            let is_current = f.step == position;
            let text_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.accent)
                    .bg(DEFAULT_THEME.panel_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", f.step),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(
                    format!("{:<22}", f.event),
                    Style::default().fg(DEFAULT_THEME.event_tag),
                ),
                Span::styled(f.description.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
