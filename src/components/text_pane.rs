use crossterm::event::{Event, KeyCode, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::constants::WHEEL_SCROLL_LINES;
use crate::ui::UiFrame;

/// Bordered, wrapped, vertically scrollable text.
#[derive(Debug)]
pub struct TextPane {
    title: String,
    text: Text<'static>,
    offset: usize,
    view: usize,
    total: usize,
}

impl TextPane {
    pub fn new<T: Into<String>>(title: T, text: Text<'static>) -> Self {
        Self {
            title: title.into(),
            text,
            offset: 0,
            view: 0,
            total: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.total.saturating_sub(self.view);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Component for TextPane {
    fn resize(&mut self, area: Rect, _ctx: &ComponentContext) {
        let inner = Self::inner(area);
        self.view = inner.height as usize;
        self.total = compute_display_lines(&self.text, inner.width);
        let max = self.total.saturating_sub(self.view);
        self.offset = self.offset.min(max);
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.resize(area, ctx);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(self.title.clone()))
            .border_style(crate::theme::pane_border_style(ctx.focused(), ctx.inert()));
        let paragraph = Paragraph::new(self.text.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.offset.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        if ctx.inert() {
            return false;
        }
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-(WHEEL_SCROLL_LINES as isize));
                    true
                }
                MouseEventKind::ScrollDown => {
                    self.scroll_by(WHEEL_SCROLL_LINES as isize);
                    true
                }
                _ => false,
            },
            Event::Key(key) if ctx.focused() => {
                let page = self.view.max(1) as isize;
                match key.code {
                    KeyCode::Up => self.scroll_by(-1),
                    KeyCode::Down => self.scroll_by(1),
                    KeyCode::PageUp => self.scroll_by(-page),
                    KeyCode::PageDown => self.scroll_by(page),
                    _ => return false,
                }
                true
            }
            _ => false,
        }
    }
}

fn compute_display_lines(text: &Text<'_>, width: u16) -> usize {
    let usable = width.max(1) as usize;
    text.lines
        .iter()
        .map(|line| {
            let w = line.width();
            if w == 0 { 1 } else { w.div_ceil(usable) }
        })
        .sum::<usize>()
        .max(1)
}
