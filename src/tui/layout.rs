//! Responsive breakpoints for the navigation bar.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: links collapse to number key and first letter
    Compact,
    /// 80-119 cols: full labels, no key hints
    Normal,
    /// 120+ cols: full labels with number-key hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Text for a nav link at this width. `index` is zero-based.
    pub fn link_label(&self, index: usize, label: &str) -> String {
        match self {
            Breakpoint::Compact => match label.chars().next() {
                Some(initial) => format!("{}{}", index + 1, initial),
                None => (index + 1).to_string(),
            },
            Breakpoint::Normal => label.to_string(),
            Breakpoint::Wide => format!("{} {}", index + 1, label),
        }
    }
}
