//! Key event cleanup between crossterm and the components.
//!
//! Terminals disagree on how they report Shift+Tab and whether they emit
//! release/repeat kinds. Components only see presses: releases are dropped
//! and repeats become presses, so holding an arrow key keeps moving a
//! focused separator on every platform.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardNormalizer {
    esc_down: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        let Event::Key(mut key) = evt else {
            return Some(evt);
        };
        if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
            key.code = KeyCode::BackTab;
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
        match key.kind {
            KeyEventKind::Release => {
                if key.code == KeyCode::Esc {
                    self.esc_down = false;
                }
                return None;
            }
            KeyEventKind::Repeat => key.kind = KeyEventKind::Press,
            KeyEventKind::Press => {}
        }
        // windows: one Esc per physical press
        if key.code == KeyCode::Esc {
            if self.esc_down {
                return None;
            }
            self.esc_down = cfg!(windows);
        } else {
            self.esc_down = false;
        }
        Some(Event::Key(key))
    }
}
