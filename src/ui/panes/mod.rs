//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structure`]: the traced structure at the current step; arrays are
//!   drawn as bars with the indices of interest highlighted, anything else
//!   as indented JSON
//! - [`narration`]: descriptions of every step up to the current one
//! - [`status`]: status bar with keybindings and replay position
//!
//! Each pane module exports a primary `render_*` function.  Scroll offsets
//! are owned by the [`App`](crate::ui::App) and clamped by the pane.

pub mod narration;
pub mod status;
pub mod structure;

pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use structure::render_structure_pane;

/// Clamp `offset` so that a window of `visible` rows stays inside `total`
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 4, 10);
        assert_eq!(offset, 0);
    }
}
