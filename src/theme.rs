use ratatui::style::{Color, Modifier, Style};

// Centralized theme colors. Keep these as small helpers so every component
// draws the split view with the same palette.

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);
pub const ACCENT_ALT_RGB: (u8, u8, u8) = (255, 165, 0);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

pub fn accent_alt() -> Color {
    rgb_to_color(ACCENT_ALT_RGB)
}

// Separator
pub fn separator_track() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

pub fn separator_grip(active: bool, focused: bool) -> Style {
    let fg = if active {
        accent_alt()
    } else if focused {
        accent()
    } else {
        Color::Gray
    };
    let style = Style::default().fg(fg);
    if active || focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

// Panes
pub fn pane_border_style(focused: bool, inert: bool) -> Style {
    if inert {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if focused {
        Style::default().fg(accent())
    } else {
        Style::default().fg(Color::Gray)
    }
}

// Status bar
pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_colors_are_rgb() {
        assert_eq!(accent(), Color::Rgb(200, 100, 0));
        assert_eq!(accent_alt(), Color::Rgb(255, 165, 0));
    }

    #[test]
    fn active_grip_outranks_focus() {
        assert_eq!(separator_grip(true, true).fg, Some(accent_alt()));
        assert_eq!(separator_grip(false, true).fg, Some(accent()));
        assert_eq!(separator_grip(false, false).fg, Some(Color::Gray));
    }

    #[test]
    fn inert_border_is_dimmed() {
        let style = pane_border_style(true, true);
        assert!(style.add_modifier.contains(Modifier::DIM));
    }
}
