use super::SplitDirection;
use super::geometry::PaneGeometry;
use super::state::SplitterState;

/// Keys the separator responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Other,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key changed (or tried to change) the split.
    pub handled: bool,
    /// The host should suppress its default action for this key.
    pub prevent_default: bool,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
    const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };
    const HANDLED_PREVENT: Self = Self {
        handled: true,
        prevent_default: true,
    };
}

/// Apply a keydown to the split.
///
/// Arrow keys move the separator by one unit on the configured axis and are
/// blocked while fixed. Home, End and Enter act even on a fixed split.
pub fn handle_key(
    state: &mut SplitterState,
    geometry: &impl PaneGeometry,
    key: SplitterKey,
    on_separator: bool,
) -> KeyOutcome {
    if !on_separator {
        return KeyOutcome::IGNORED;
    }
    let direction = state.direction();
    match key {
        SplitterKey::ArrowLeft | SplitterKey::ArrowRight
            if direction == SplitDirection::Horizontal =>
        {
            arrow(state, key)
        }
        SplitterKey::ArrowUp | SplitterKey::ArrowDown if direction == SplitDirection::Vertical => {
            arrow(state, key)
        }
        SplitterKey::End => {
            state.collapse_secondary_pane(geometry);
            KeyOutcome::HANDLED_PREVENT
        }
        SplitterKey::Home => {
            state.collapse_primary_pane(geometry);
            KeyOutcome::HANDLED_PREVENT
        }
        SplitterKey::Enter => {
            state.toggle_primary_pane(geometry);
            KeyOutcome::HANDLED
        }
        _ => KeyOutcome::IGNORED,
    }
}

fn arrow(state: &mut SplitterState, key: SplitterKey) -> KeyOutcome {
    let delta = match key {
        SplitterKey::ArrowLeft | SplitterKey::ArrowUp => -1,
        _ => 1,
    };
    if state.nudge(delta) {
        tracing::trace!(delta, movement = state.total_movement(), "keyboard nudge");
        KeyOutcome::HANDLED
    } else {
        KeyOutcome::IGNORED
    }
}
