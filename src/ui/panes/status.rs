//! Status bar: replay position on the left, key hints on the right

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: [(&str, &str); 5] = [
    ("←/→", "step"),
    ("1-9", "skip"),
    ("⎵", "play"),
    ("↵/⌫", "end/start"),
    ("q", "quit"),
];

fn badge(label: String, bg: Color) -> Span<'static> {
    Span::styled(
        label,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

fn on_panel(fg: Color) -> Style {
    Style::default().bg(DEFAULT_THEME.panel_bg).fg(fg)
}

/// Badge for where playback stands, if anything notable
fn position_badge(current_step: usize, total_steps: usize, is_playing: bool) -> Option<Span<'static>> {
    if is_playing {
        Some(badge(" ▶ PLAYING ".to_string(), DEFAULT_THEME.playing))
    } else if current_step + 1 >= total_steps {
        Some(badge(" END ".to_string(), DEFAULT_THEME.at_end))
    } else if current_step == 0 {
        Some(badge(" START ".to_string(), DEFAULT_THEME.at_start))
    } else {
        None
    }
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Line::from(vec![
        badge(
            format!(" {}/{} ", current_step + 1, total_steps),
            DEFAULT_THEME.accent,
        ),
        Span::styled(format!(" {} ", title), on_panel(DEFAULT_THEME.event_tag)),
        Span::styled("│", on_panel(DEFAULT_THEME.muted)),
        Span::styled(format!(" {} ", message), on_panel(DEFAULT_THEME.text)),
    ]);
    frame.render_widget(
        Paragraph::new(left)
            .style(Style::default().bg(DEFAULT_THEME.panel_bg))
            .alignment(Alignment::Left),
        halves[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let mut right: Vec<Span> = Vec::new();
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            right.push(Span::styled(" │ ", on_panel(DEFAULT_THEME.muted)));
        }
        right.push(Span::styled(format!(" {} ", key), key_style));
        right.push(Span::styled(format!(" {}", action), on_panel(DEFAULT_THEME.text)));
    }
    if let Some(indicator) = position_badge(current_step, total_steps, is_playing) {
        right.push(Span::styled(" ", on_panel(DEFAULT_THEME.text)));
        right.push(indicator);
    }
    frame.render_widget(
        Paragraph::new(Line::from(right))
            .style(Style::default().bg(DEFAULT_THEME.panel_bg))
            .alignment(Alignment::Right),
        halves[1],
    );
}
