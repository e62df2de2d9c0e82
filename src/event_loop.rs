use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Message pump for the UI thread.
///
/// The loop is the only caller of `poll` / `read` on its driver. Each
/// iteration hands the handler `None` first (an idle tick, used for
/// drawing), then drains every queued event so a burst of drag motion is
/// applied before the next frame instead of one event per frame.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn poll(&mut self) -> io::Result<Option<Event>> {
        if self.driver.poll(self.poll_interval)? {
            Ok(Some(self.driver.read()?))
        } else {
            Ok(None)
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler returns [`ControlFlow::Quit`].
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, None)? == ControlFlow::Quit {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
        polls: usize,
    }

    impl Scripted {
        fn new(codes: &[KeyCode]) -> Self {
            Self {
                events: codes
                    .iter()
                    .map(|code| Event::Key(KeyEvent::new(*code, KeyModifiers::NONE)))
                    .collect(),
                polls: 0,
            }
        }
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            self.polls += 1;
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("no event"))
        }
    }

    #[test]
    fn burst_is_drained_between_ticks() {
        let driver = Scripted::new(&[KeyCode::Left, KeyCode::Left, KeyCode::Esc]);
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(1));
        let mut ticks = 0;
        let mut keys = Vec::new();
        event_loop
            .run(|_, event| match event {
                None => {
                    ticks += 1;
                    Ok(ControlFlow::Continue)
                }
                Some(Event::Key(key)) if key.code == KeyCode::Esc => Ok(ControlFlow::Quit),
                Some(Event::Key(key)) => {
                    keys.push(key.code);
                    Ok(ControlFlow::Continue)
                }
                Some(_) => Ok(ControlFlow::Continue),
            })
            .unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(keys, vec![KeyCode::Left, KeyCode::Left]);
    }

    #[test]
    fn idle_tick_can_quit() {
        let mut event_loop = EventLoop::new(Scripted::new(&[]), Duration::from_millis(1));
        event_loop.run(|_, _| Ok(ControlFlow::Quit)).unwrap();
        assert_eq!(event_loop.driver().polls, 0);
    }

    #[test]
    fn poll_returns_none_when_idle() {
        let mut event_loop = EventLoop::new(Scripted::new(&[]), Duration::from_millis(1));
        assert!(event_loop.poll().unwrap().is_none());
    }
}
