use ratatui::layout::Rect;
use ratatui::style::Style;

use super::{Component, ComponentContext};
use crate::splitter::SplitterState;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-line status strip with left and right aligned text.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            style: crate::theme::status_style(),
        }
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    /// Summarize a split's observable state on the left side.
    pub fn show_splitter(&mut self, state: &SplitterState) {
        let mut flags = Vec::new();
        if state.is_fixed() {
            flags.push("fixed");
        }
        if state.is_dragging() {
            flags.push("dragging");
        } else if state.is_hovering() {
            flags.push("hover");
        }
        if state.is_primary_collapsed() {
            flags.push("primary collapsed");
        }
        if state.is_secondary_collapsed() {
            flags.push("secondary collapsed");
        }
        let mut text = format!(
            " {} | movement {:+}",
            state.direction(),
            state.total_movement()
        );
        if !flags.is_empty() {
            text.push_str(" | ");
            text.push_str(&flags.join(", "));
        }
        self.left = text;
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let y = area.y;
        let x = area.x;
        let width = area.width as usize;
        frame.fill(
            Rect {
                height: 1,
                ..area
            },
            " ",
            self.style,
        );
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }

        let left = truncate_to_width(&self.left, width);
        safe_set_string(buffer, bounds, x, y, &left, self.style);

        if !self.right.is_empty() {
            let right = truncate_to_width(&self.right, width);
            let right_width = right.chars().count();
            if right_width < width {
                let start_x = x.saturating_add((width - right_width) as u16);
                safe_set_string(buffer, bounds, start_x, y, &right, self.style);
            }
        }
    }
}
