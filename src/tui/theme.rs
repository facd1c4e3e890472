// Theme system for the TUI
//
// Two palettes: a light one modelled on a bootstrap "light" navbar and a
// dark one for dark terminals. Every color the shell draws comes from here.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Navigation bar
    pub brand: Color,
    pub link: Color,
    pub link_active_fg: Color,
    pub link_active_bg: Color,

    // Connection badge
    pub badge_fg: Color,
    pub badge_bg: Color,

    // Accents
    pub highlight: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Look up a theme by name, falling back to light
    pub fn named(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Reset,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            brand: Color::Black,
            link: Color::DarkGray,
            link_active_fg: Color::White,
            link_active_bg: Color::Blue,
            badge_fg: Color::White,
            badge_bg: Color::Red,
            highlight: Color::Blue,
            error: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            brand: Color::Cyan,
            link: Color::Gray,
            link_active_fg: Color::Black,
            link_active_bg: Color::Cyan,
            badge_fg: Color::White,
            badge_bg: Color::LightRed,
            highlight: Color::Cyan,
            error: Color::LightRed,
        }
    }

    pub fn brand_style(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    pub fn link_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.link_active_fg)
                .bg(self.link_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.link)
        }
    }

    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.badge_fg)
            .bg(self.badge_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_falls_back_to_light() {
        assert_eq!(Theme::named("Dark").name, "dark");
        assert_eq!(Theme::named("solarized").name, "light");
    }
}
