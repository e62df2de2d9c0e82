use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::text::Text;
use thiserror::Error;

use term_splitter::components::{Component, ComponentContext, SplitView, StatusBar, TextPane};
use term_splitter::config::{Cli, ConfigError, SplitterConfig};
use term_splitter::drivers::{ConsoleInputDriver, ConsoleOutputDriver, InputDriver, OutputDriver};
use term_splitter::event_loop::{ControlFlow, EventLoop};
use term_splitter::splitter::SplitDirection;
use term_splitter::tracing_sub;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

const HELP: &str = " Tab focus | Ctrl+T toggle | Ctrl+D direction | Ctrl+R reset | Ctrl+Q quit ";

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let level = cli.log_level()?;
    let config = SplitterConfig::try_from(&cli)?;
    tracing_sub::init(cli.log_file.as_deref(), level)?;
    tracing::info!(
        direction = %config.direction,
        fixed = config.is_fixed,
        separator = config.separator_size,
        "starting split view"
    );

    let mut view = SplitView::new(
        config,
        Box::new(TextPane::new("Primary", primary_text(config.direction))),
        Box::new(TextPane::new("Secondary", secondary_text())),
    );

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    let result = input
        .set_mouse_capture(true)
        .map_err(AppError::from)
        .and_then(|()| run(&mut output, input, &mut view));
    output.exit()?;
    result
}

fn run(
    output: &mut ConsoleOutputDriver,
    input: ConsoleInputDriver,
    view: &mut SplitView,
) -> Result<(), AppError> {
    let mut split = view.mount();
    let mut status = StatusBar::new();
    status.set_right(HELP);
    let ctx = ComponentContext::new(true);

    let mut event_loop = EventLoop::new(input, POLL_INTERVAL);
    event_loop.run(|_, event| {
        let Some(event) = event else {
            status.show_splitter(split.state());
            output.draw(|mut frame| {
                let (body, footer) = split_footer(frame.area());
                split.render(&mut frame, body, &ctx);
                status.render(&mut frame, footer, &ctx);
            })?;
            return Ok(ControlFlow::Continue);
        };

        if let Event::Key(key) = &event
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => return Ok(ControlFlow::Quit),
                KeyCode::Char('t') => {
                    split.toggle_primary_pane();
                    return Ok(ControlFlow::Continue);
                }
                KeyCode::Char('d') => {
                    let config = split.config();
                    let direction = match config.direction {
                        SplitDirection::Horizontal => SplitDirection::Vertical,
                        SplitDirection::Vertical => SplitDirection::Horizontal,
                    };
                    split.apply_config(config.with_direction(direction));
                    return Ok(ControlFlow::Continue);
                }
                KeyCode::Char('r') => {
                    split.set_total_movement(0);
                    return Ok(ControlFlow::Continue);
                }
                _ => {}
            }
        }
        split.handle_event(&event, &ctx);
        Ok(ControlFlow::Continue)
    })?;
    Ok(())
}

fn split_footer(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(1);
    let body = Rect {
        height: area.height - footer_height,
        ..area
    };
    let footer = Rect {
        y: area.y + body.height,
        height: footer_height,
        ..area
    };
    (body, footer)
}

fn primary_text(direction: SplitDirection) -> Text<'static> {
    let keys = match direction {
        SplitDirection::Horizontal => "Left / Right",
        SplitDirection::Vertical => "Up / Down",
    };
    let mut text = Text::from(indoc! {"
        Drag the separator with the left mouse button to resize the panes.
        While the pointer is over the separator, or a drag is in progress,
        the panes stop receiving mouse input.

        Focus the separator with Tab, then:
    "});
    text.push_line(format!("  {keys}  move it by one cell"));
    text.extend(Text::from(indoc! {"
          Home          collapse this pane
          End           collapse the other pane
          Enter         toggle this pane
    "}));
    text
}

fn secondary_text() -> Text<'static> {
    Text::from(indoc! {"
        A collapsed pane is hidden from keyboard focus until it grows again.

        Run with --direction vertical to stack the panes, or --fixed to lock
        the separator in place. Home, End and Enter still work on a fixed
        split.

        --log-file <PATH> records drag, collapse and observer events.
    "})
}
