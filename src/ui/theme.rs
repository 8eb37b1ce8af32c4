use ratatui::style::Color;

/// Colors for the replay viewer, one per thing being drawn
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    /// Step badge and the narration row under the cursor
    pub accent: Color,
    pub event_tag: Color,
    pub field_name: Color,
    pub panel_bg: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub playing: Color,
    pub at_end: Color,
    pub at_start: Color,

    // Array bars, by role
    pub bar_idle: Color,
    pub bar_settled: Color,
    pub bar_pivot: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_found: Color,
}

// Catppuccin Mocha
const TEXT: Color = Color::Rgb(205, 214, 244);
const OVERLAY: Color = Color::Rgb(108, 112, 134);
const SURFACE: Color = Color::Rgb(50, 50, 70);
const BLUE: Color = Color::Rgb(137, 180, 250);
const PEACH: Color = Color::Rgb(250, 179, 135);
const GREEN: Color = Color::Rgb(166, 227, 161);
const RED: Color = Color::Rgb(243, 139, 168);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const TEAL: Color = Color::Rgb(148, 226, 213);
const PINK: Color = Color::Rgb(245, 194, 231);

pub const DEFAULT_THEME: Theme = Theme {
    text: TEXT,
    muted: OVERLAY,
    accent: YELLOW,
    event_tag: PINK,
    field_name: TEAL,
    panel_bg: SURFACE,
    border_focused: YELLOW,
    border_normal: OVERLAY,
    playing: PEACH,
    at_end: RED,
    at_start: GREEN,

    bar_idle: BLUE,
    bar_settled: OVERLAY,
    bar_pivot: TEAL,
    bar_comparing: PEACH,
    bar_swapping: RED,
    bar_found: GREEN,
};
