//! Structure pane: the traced data at the current step
//!
//! Array-based traces (sorting, searching) are drawn as horizontal bars, one
//! per element, colored by the role the element plays at this step.  The
//! remaining state fields are listed below the bars as indented JSON.  Traces
//! without an array are shown as JSON only.

use super::clamp_scroll;
use crate::catalog::ReplayFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use serde_json::Value;

/// What an array element is doing at this step, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Idle,
    /// Sorted, eliminated or already checked
    Settled,
    Pivot,
    Comparing,
    Swapping,
    Found,
}

impl Role {
    fn color(self) -> Color {
        match self {
            Role::Idle => DEFAULT_THEME.bar_idle,
            Role::Settled => DEFAULT_THEME.bar_settled,
            Role::Pivot => DEFAULT_THEME.bar_pivot,
            Role::Comparing => DEFAULT_THEME.bar_comparing,
            Role::Swapping => DEFAULT_THEME.bar_swapping,
            Role::Found => DEFAULT_THEME.bar_found,
        }
    }
}

/// Role of each array index, strongest role wins
pub fn roles(frame: &ReplayFrame, len: usize) -> Vec<Role> {
    let mut roles = vec![Role::Idle; len];
    let mut mark = |indices: Vec<usize>, role: Role| {
        for i in indices {
            if let Some(slot) = roles.get_mut(i) {
                *slot = (*slot).max(role);
            }
        }
    };

    for key in ["sorted", "eliminated", "checked"] {
        mark(frame.indices(key), Role::Settled);
    }
    if let Some(boundary) = scalar(frame, "sorted_from") {
        mark((boundary..len).collect(), Role::Settled);
    }
    for key in ["pivot", "current_min"] {
        mark(scalar(frame, key).into_iter().collect(), Role::Pivot);
    }
    mark(frame.indices("comparing"), Role::Comparing);
    mark(frame.indices("swapping"), Role::Swapping);
    if frame.state.get("swapped").and_then(Value::as_bool) == Some(true) {
        mark(frame.indices("comparing"), Role::Swapping);
    }
    mark(scalar(frame, "found_index").into_iter().collect(), Role::Found);
    roles
}

fn scalar(frame: &ReplayFrame, key: &str) -> Option<usize> {
    frame.state.get(key)?.as_u64().map(|v| v as usize)
}

/// One bar per value, scaled so the largest magnitude fills `width`
pub fn bar_lines(values: &[i64], roles: &[Role], width: usize) -> Vec<Line<'static>> {
    let label_width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let max_abs = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
    let room = width.saturating_sub(label_width + 8).max(1) as u64;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let role = roles.get(i).copied().unwrap_or(Role::Idle);
            let len = if v == 0 {
                0
            } else {
                let scaled = u128::from(v.unsigned_abs()) * u128::from(room) / u128::from(max_abs);
                (scaled as usize).max(1)
            };
            let glyph = if v < 0 { "▒" } else { "█" };
            let mut label_style = Style::default().fg(DEFAULT_THEME.text);
            if role != Role::Idle && role != Role::Settled {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(
                    format!("{:>width$} ", v, width = label_width),
                    label_style,
                ),
                Span::styled(glyph.repeat(len), Style::default().fg(role.color())),
            ])
        })
        .collect()
}

fn json_lines(state: &serde_json::Map<String, Value>, skip: &[&str]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (key, value) in state.iter().filter(|(k, _)| !skip.contains(&k.as_str())) {
        let rendered =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        let mut rows = rendered.lines();
        let first = rows.next().unwrap_or_default().to_string();
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", key), Style::default().fg(DEFAULT_THEME.field_name)),
            Span::styled(first, Style::default().fg(DEFAULT_THEME.text)),
        ]));
        for row in rows {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(DEFAULT_THEME.text),
            )));
        }
    }
    lines
}

/// Render the structure pane for one replay frame
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    current: &ReplayFrame,
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
        .title(format!(" Step {} · {} ", current.step, current.event))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let inner_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    match current.array() {
        Some(values) => {
            let roles = roles(current, values.len());
            lines.extend(bar_lines(&values, &roles, inner_width));
            lines.push(Line::from(""));
            lines.extend(json_lines(&current.state, &["array"]));
        }
        None => lines.extend(json_lines(&current.state, &[])),
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(state: Value) -> ReplayFrame {
        let Value::Object(state) = state else {
            panic!("state must be an object");
        };
        ReplayFrame {
            step: 0,
            event: "compare".to_string(),
            description: String::new(),
            state,
        }
    }

    #[test]
    fn test_found_outranks_comparing() {
        let f = frame(json!({
            "array": [1, 2, 3],
            "comparing": [1],
            "eliminated": [0],
            "found_index": 1
        }));
        assert_eq!(roles(&f, 3), vec![Role::Settled, Role::Found, Role::Idle]);
    }

    #[test]
    fn test_swapped_pair() {
        let f = frame(json!({
            "array": [2, 1, 3],
            "comparing": [0, 1],
            "swapped": true,
            "sorted_from": 2
        }));
        assert_eq!(
            roles(&f, 3),
            vec![Role::Swapping, Role::Swapping, Role::Settled]
        );
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let f = frame(json!({ "comparing": [7] }));
        assert_eq!(roles(&f, 2), vec![Role::Idle, Role::Idle]);
    }

    #[test]
    fn test_bar_lengths_scale() {
        let lines = bar_lines(&[10, 5, 0], &[], 28);
        let bar_len = |line: &Line| line.spans[2].content.chars().count();
        assert_eq!(bar_len(&lines[0]), 18);
        assert_eq!(bar_len(&lines[1]), 9);
        assert_eq!(bar_len(&lines[2]), 0);
    }
}
