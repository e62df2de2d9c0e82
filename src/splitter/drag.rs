//! Pointer-driven separator dragging.
//!
//! The controller keeps explicit track of which pointer listeners are
//! registered so that every exit path (pointer up, pointer leaving the view,
//! forced teardown) provably removes them. Deltas are always taken against
//! the last recorded pointer location, never against the drag start, so
//! coalesced move events cannot desynchronize the movement.

use super::state::SplitterState;

/// Button mask value of the primary (left) button alone.
pub const PRIMARY_BUTTON: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The pointer left the whole split view.
    Leave,
    /// The pointer crossed onto the separator.
    SeparatorEnter,
    /// The pointer crossed off the separator.
    SeparatorLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: i32,
    pub y: i32,
    /// Pressed buttons as a bit mask (bit 0 = primary).
    pub buttons: u8,
    /// Whether the separator lies on the event's target path.
    pub on_separator: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            buttons: 0,
            on_separator: false,
        }
    }

    pub fn with_buttons(mut self, buttons: u8) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn on_separator(mut self, on_separator: bool) -> Self {
        self.on_separator = on_separator;
        self
    }
}

/// Listeners the controller can have registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerListener {
    Move,
    Up,
    Leave,
    HoverEnter,
    HoverLeave,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct DragListeners {
    pointer_move: bool,
    pointer_up: bool,
    pointer_leave: bool,
}

impl DragListeners {
    const ARMED: Self = Self {
        pointer_move: true,
        pointer_up: true,
        pointer_leave: true,
    };

    fn any(self) -> bool {
        self.pointer_move || self.pointer_up || self.pointer_leave
    }
}

/// One-shot hover listener currently registered; enter and leave alternate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum HoverListener {
    #[default]
    Enter,
    Leave,
}

#[derive(Debug, Default)]
pub struct DragController {
    listeners: DragListeners,
    hover: HoverListener,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Armed: a drag session is listening for move/up/leave.
    pub fn is_armed(&self) -> bool {
        self.listeners.any()
    }

    pub fn is_listening(&self, listener: PointerListener) -> bool {
        match listener {
            PointerListener::Move => self.listeners.pointer_move,
            PointerListener::Up => self.listeners.pointer_up,
            PointerListener::Leave => self.listeners.pointer_leave,
            PointerListener::HoverEnter => self.hover == HoverListener::Enter,
            PointerListener::HoverLeave => self.hover == HoverListener::Leave,
        }
    }

    /// Route one pointer event. Returns whether the event was consumed.
    pub fn handle_pointer(&mut self, state: &mut SplitterState, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(state, event),
            PointerEventKind::Move if self.listeners.pointer_move => {
                self.pointer_move(state, event);
                true
            }
            PointerEventKind::Up if self.listeners.pointer_up => {
                self.disarm(state);
                true
            }
            PointerEventKind::Leave => {
                let armed = self.listeners.pointer_leave;
                if armed {
                    self.disarm(state);
                }
                // leaving the view also ends any hover over the separator
                let hovered = self.hover_leave(state);
                armed || hovered
            }
            PointerEventKind::SeparatorEnter => self.hover_enter(state),
            PointerEventKind::SeparatorLeave => self.hover_leave(state),
            _ => false,
        }
    }

    /// Remove every listener and clear drag and hover state.
    pub fn teardown(&mut self, state: &mut SplitterState) {
        if self.listeners.any() {
            tracing::debug!("drag listeners torn down");
        }
        self.listeners = DragListeners::default();
        self.hover = HoverListener::Enter;
        state.set_dragging(false);
        state.set_hovering(false);
        state.set_current_pointer_location(None);
    }

    fn pointer_down(&mut self, state: &mut SplitterState, event: &PointerEvent) -> bool {
        if event.buttons != PRIMARY_BUTTON
            || !event.on_separator
            || state.is_dragging()
            || state.is_fixed()
        {
            return false;
        }
        let location = state.direction().axis(event.x, event.y);
        state.set_dragging(true);
        state.set_current_pointer_location(Some(location));
        self.listeners = DragListeners::ARMED;
        tracing::debug!(location, direction = %state.direction(), "drag armed");
        true
    }

    fn pointer_move(&mut self, state: &mut SplitterState, event: &PointerEvent) {
        let location = state.direction().axis(event.x, event.y);
        let Some(previous) = state.current_pointer_location() else {
            state.set_current_pointer_location(Some(location));
            return;
        };
        let delta = location - previous;
        state.set_current_pointer_location(Some(location));
        if delta == 0 {
            return;
        }
        tracing::trace!(delta, "drag move");
        state.nudge(delta);
    }

    fn disarm(&mut self, state: &mut SplitterState) {
        self.listeners = DragListeners::default();
        state.set_dragging(false);
        state.set_current_pointer_location(None);
        tracing::debug!(movement = state.total_movement(), "drag released");
    }

    fn hover_enter(&mut self, state: &mut SplitterState) -> bool {
        if self.hover != HoverListener::Enter || state.is_fixed() {
            return false;
        }
        self.hover = HoverListener::Leave;
        state.set_hovering(true);
        true
    }

    fn hover_leave(&mut self, state: &mut SplitterState) -> bool {
        if self.hover != HoverListener::Leave {
            return false;
        }
        self.hover = HoverListener::Enter;
        state.set_hovering(false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::SplitDirection;

    fn down(x: i32, y: i32) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Down, x, y)
            .with_buttons(PRIMARY_BUTTON)
            .on_separator(true)
    }

    fn moved(x: i32, y: i32) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Move, x, y).with_buttons(PRIMARY_BUTTON)
    }

    #[test]
    fn drag_session_accumulates_delta() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        assert!(drag.handle_pointer(&mut state, &down(100, 5)));
        assert!(state.is_dragging());
        assert_eq!(state.current_pointer_location(), Some(100));
        assert!(drag.is_listening(PointerListener::Move));

        drag.handle_pointer(&mut state, &moved(140, 5));
        assert_eq!(state.total_movement(), 40);

        drag.handle_pointer(
            &mut state,
            &PointerEvent::new(PointerEventKind::Up, 140, 5),
        );
        assert!(!state.is_dragging());
        assert!(!drag.is_armed());
        assert!(!drag.is_listening(PointerListener::Leave));

        // no listeners left: further moves are inert
        assert!(!drag.handle_pointer(&mut state, &moved(200, 5)));
        assert_eq!(state.total_movement(), 40);
    }

    #[test]
    fn deltas_sum_regardless_of_event_count() {
        let path = [3, 3, 10, -4, -4, 25, 0];
        let mut state = SplitterState::default();
        state.set_total_movement(7);
        let mut drag = DragController::new();
        drag.handle_pointer(&mut state, &down(50, 0));
        let mut x = 50;
        let mut expected = 7;
        for step in path {
            x += step;
            expected += step;
            drag.handle_pointer(&mut state, &moved(x, 0));
        }
        assert_eq!(state.total_movement(), expected);
    }

    #[test]
    fn zero_delta_moves_do_not_write() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        drag.handle_pointer(&mut state, &down(10, 0));
        let revision = state.revision();
        drag.handle_pointer(&mut state, &moved(10, 0));
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn vertical_direction_tracks_y() {
        let mut state = SplitterState::new(SplitDirection::Vertical, false);
        let mut drag = DragController::new();
        drag.handle_pointer(&mut state, &down(100, 20));
        drag.handle_pointer(&mut state, &moved(300, 12));
        assert_eq!(state.total_movement(), -8);
    }

    #[test]
    fn pointer_down_requires_primary_button_and_separator() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        let right_button = down(1, 1).with_buttons(2);
        assert!(!drag.handle_pointer(&mut state, &right_button));
        let chorded = down(1, 1).with_buttons(3);
        assert!(!drag.handle_pointer(&mut state, &chorded));
        let off_separator = down(1, 1).on_separator(false);
        assert!(!drag.handle_pointer(&mut state, &off_separator));
        assert!(!state.is_dragging());
        assert!(!drag.is_armed());
    }

    #[test]
    fn second_pointer_down_while_dragging_is_ignored() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        drag.handle_pointer(&mut state, &down(10, 0));
        assert!(!drag.handle_pointer(&mut state, &down(90, 0)));
        assert_eq!(state.current_pointer_location(), Some(10));
    }

    #[test]
    fn fixed_split_does_not_arm() {
        let mut state = SplitterState::new(SplitDirection::Horizontal, true);
        let mut drag = DragController::new();
        assert!(!drag.handle_pointer(&mut state, &down(10, 0)));
        assert!(!drag.handle_pointer(
            &mut state,
            &PointerEvent::new(PointerEventKind::SeparatorEnter, 10, 0)
        ));
        assert!(!state.is_active());
    }

    #[test]
    fn leave_ends_drag() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        drag.handle_pointer(&mut state, &down(10, 0));
        drag.handle_pointer(&mut state, &moved(15, 0));
        assert!(drag.handle_pointer(
            &mut state,
            &PointerEvent::new(PointerEventKind::Leave, 99, 0)
        ));
        assert!(!drag.is_armed());
        assert_eq!(state.current_pointer_location(), None);
        assert_eq!(state.total_movement(), 5);
    }

    #[test]
    fn hover_listeners_alternate() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        assert!(drag.is_listening(PointerListener::HoverEnter));
        let enter = PointerEvent::new(PointerEventKind::SeparatorEnter, 0, 0);
        let leave = PointerEvent::new(PointerEventKind::SeparatorLeave, 0, 0);

        assert!(drag.handle_pointer(&mut state, &enter));
        assert!(state.is_hovering());
        assert!(state.is_being_dragged());
        assert!(!state.is_dragging());
        // enter is one-shot until a leave re-registers it
        assert!(!drag.handle_pointer(&mut state, &enter));
        assert!(drag.is_listening(PointerListener::HoverLeave));

        assert!(drag.handle_pointer(&mut state, &leave));
        assert!(!state.is_hovering());
        assert!(!drag.handle_pointer(&mut state, &leave));
        assert!(drag.is_listening(PointerListener::HoverEnter));
    }

    #[test]
    fn hover_does_not_block_arming() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        drag.handle_pointer(
            &mut state,
            &PointerEvent::new(PointerEventKind::SeparatorEnter, 10, 0),
        );
        assert!(drag.handle_pointer(&mut state, &down(10, 0)));
        assert!(state.is_dragging());
    }

    #[test]
    fn teardown_removes_everything() {
        let mut state = SplitterState::default();
        let mut drag = DragController::new();
        drag.handle_pointer(
            &mut state,
            &PointerEvent::new(PointerEventKind::SeparatorEnter, 10, 0),
        );
        drag.handle_pointer(&mut state, &down(10, 0));
        drag.teardown(&mut state);
        assert!(!drag.is_armed());
        assert!(!state.is_active());
        assert!(drag.is_listening(PointerListener::HoverEnter));
        assert!(!drag.handle_pointer(&mut state, &moved(50, 0)));
        assert_eq!(state.total_movement(), 0);
    }
}
