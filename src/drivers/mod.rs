//! Terminal I/O seams.
//!
//! The event loop and the demo only talk to these traits, so tests can feed
//! scripted events without a real terminal.

pub mod console;
pub mod keyboard;

pub use console::{ConsoleInputDriver, ConsoleOutputDriver};
pub use keyboard::KeyboardNormalizer;

use ::crossterm::event::Event;
use ratatui::backend::Backend;
use std::io;
use std::time::Duration;

use crate::ui::UiFrame;

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn blanket_impl_for_mut_ref_forwards() {
        let mut d = Scripted(VecDeque::from([Event::Key(KeyEvent::new(
            KeyCode::Home,
            KeyModifiers::NONE,
        ))]));
        let mut r = &mut d;
        assert!(r.poll(Duration::ZERO).unwrap());
        assert!(matches!(r.read().unwrap(), Event::Key(k) if k.code == KeyCode::Home));
        assert!(!r.poll(Duration::ZERO).unwrap());
        assert!(r.set_mouse_capture(true).is_ok());
    }
}
