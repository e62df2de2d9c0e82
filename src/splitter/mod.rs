//! Renderer-agnostic split view core.
//!
//! Everything in this module works on plain integers: pointer coordinates,
//! pane extents and the movement scalar share one unit (a terminal cell in
//! the `SplitView` adapter, a pixel elsewhere). Nothing here knows about
//! ratatui or crossterm; adapters translate their events into
//! [`PointerEvent`] / [`SplitterKey`] and feed the resulting movement into
//! [`layout::split_extents`].

pub mod drag;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod observer;
pub mod state;

pub use drag::{DragController, PointerEvent, PointerEventKind, PointerListener};
pub use geometry::{Extents, PaneGeometry};
pub use keyboard::{KeyOutcome, SplitterKey, handle_key};
pub use layout::split_extents;
pub use observer::{ResizeEntry, ResizeObserver, SizeObserverBridge};
pub use state::SplitterState;

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Axis along which the two panes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Panes side by side; the separator moves along x.
    #[default]
    Horizontal,
    /// Panes stacked; the separator moves along y.
    Vertical,
}

impl SplitDirection {
    /// Pick the coordinate on this direction's axis.
    pub fn axis(self, x: i32, y: i32) -> i32 {
        match self {
            SplitDirection::Horizontal => x,
            SplitDirection::Vertical => y,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SplitDirection::Horizontal => "horizontal",
            SplitDirection::Vertical => "vertical",
        }
    }
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitDirection {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(SplitDirection::Horizontal),
            "vertical" => Ok(SplitDirection::Vertical),
            _ => Err(ConfigError::InvalidDirection(value.to_string())),
        }
    }
}
