//! Status bar listing the keyboard shortcuts of the current view.

use cursive::view::Resizable;
use cursive::views::{LinearLayout, TextView};

pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

fn hint_text(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

pub fn build_status_bar(hints: &[KeyHint]) -> LinearLayout {
    LinearLayout::horizontal().child(TextView::new(hint_text(hints)).full_width())
}

pub mod hints {
    use super::KeyHint;

    pub const TAB: KeyHint = KeyHint::new("Tab", "Next");
    pub const SHIFT_TAB: KeyHint = KeyHint::new("S-Tab", "Prev");
    pub const ENTER: KeyHint = KeyHint::new("Enter", "Choose");
    pub const SPACE: KeyHint = KeyHint::new("Space", "Toggle");
    pub const CTRL_E: KeyHint = KeyHint::new("C-e", "Export");
    pub const CTRL_R: KeyHint = KeyHint::new("C-r", "Reset");
    pub const CTRL_Q: KeyHint = KeyHint::new("C-q", "Quit");
}
