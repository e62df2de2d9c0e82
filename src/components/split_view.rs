//! Terminal split view: two panes and a draggable, focusable separator.
//!
//! `SplitView` is the crossterm/ratatui binding of the core in
//! [`crate::splitter`]. It owns one [`SplitterState`], translates mouse and
//! key events into core pointer/key events, lays the three regions out from
//! the current movement and feeds rendered pane extents back through the
//! size observers.
//!
//! Observers only run while the view is mounted. [`SplitView::mount`]
//! returns a guard; dropping it disconnects the observers, removes any drag
//! listeners and resets the split to neutral, on every exit path.

use std::ops::{Deref, DerefMut};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{Component, ComponentContext};
use crate::config::SplitterConfig;
use crate::constants::IDLE_GRIP_PERCENT;
use crate::layout::{SplitRegion, SplitRegions, rect_contains};
use crate::splitter::{
    DragController, Extents, KeyOutcome, PointerEvent, PointerEventKind, SizeObserverBridge,
    SplitDirection, SplitterKey, SplitterState, handle_key,
};
use crate::ui::UiFrame;

/// Which part of the view owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitFocus {
    Primary,
    #[default]
    Separator,
    Secondary,
}

pub struct SplitView {
    state: SplitterState,
    drag: DragController,
    observers: SizeObserverBridge,
    primary: Box<dyn Component>,
    secondary: Box<dyn Component>,
    separator: Option<Box<dyn Component>>,
    separator_size: u16,
    area: Rect,
    regions: SplitRegions,
    focus: SplitFocus,
    pointer_inside: bool,
    pointer_on_separator: bool,
    mounted: bool,
}

impl SplitView {
    pub fn new(
        config: SplitterConfig,
        primary: Box<dyn Component>,
        secondary: Box<dyn Component>,
    ) -> Self {
        Self {
            state: SplitterState::new(config.direction, config.is_fixed),
            drag: DragController::new(),
            observers: SizeObserverBridge::new(),
            primary,
            secondary,
            separator: None,
            separator_size: config.separator_size,
            area: Rect::default(),
            regions: SplitRegions::default(),
            focus: SplitFocus::default(),
            pointer_inside: false,
            pointer_on_separator: false,
            mounted: false,
        }
    }

    /// Replace the default separator with a custom component.
    pub fn with_separator(mut self, separator: Box<dyn Component>) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Attach to the render tree until the returned guard is dropped.
    pub fn mount(&mut self) -> MountGuard<'_> {
        if !self.mounted {
            self.observers.connect();
            self.mounted = true;
            tracing::debug!(direction = %self.state.direction(), "split view mounted");
        }
        MountGuard { view: self }
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.observers.disconnect();
        self.drag.teardown(&mut self.state);
        self.state.reset();
        self.pointer_inside = false;
        self.pointer_on_separator = false;
        self.focus = SplitFocus::default();
        self.mounted = false;
        self.relayout(self.area);
        tracing::debug!("split view unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> &SplitterState {
        &self.state
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn regions(&self) -> SplitRegions {
        self.regions
    }

    pub fn focus(&self) -> SplitFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: SplitFocus) {
        if self.is_focusable(focus) {
            self.focus = focus;
        }
    }

    /// Accessibility-hidden state of the primary pane.
    pub fn primary_hidden(&self) -> bool {
        self.observers.primary_hidden()
    }

    pub fn secondary_hidden(&self) -> bool {
        self.observers.secondary_hidden()
    }

    /// Re-bind configuration. Any drag in progress is dropped; a direction
    /// change also returns the split to neutral.
    pub fn apply_config(&mut self, config: SplitterConfig) {
        self.drag.teardown(&mut self.state);
        self.state.set_direction(config.direction);
        self.state.set_fixed(config.is_fixed);
        self.separator_size = config.separator_size;
        self.state.take_movement_change();
        self.relayout(self.area);
        tracing::debug!(
            direction = %config.direction,
            fixed = config.is_fixed,
            "split view reconfigured"
        );
    }

    pub fn config(&self) -> SplitterConfig {
        SplitterConfig {
            direction: self.state.direction(),
            is_fixed: self.state.is_fixed(),
            separator_size: self.separator_size,
        }
    }

    pub fn set_total_movement(&mut self, movement: i32) {
        self.state.set_total_movement(movement);
        self.sync_layout();
    }

    pub fn collapse_primary_pane(&mut self) {
        let geometry = self.live_extents();
        self.state.collapse_primary_pane(&geometry);
        self.sync_layout();
    }

    pub fn collapse_secondary_pane(&mut self) {
        let geometry = self.live_extents();
        self.state.collapse_secondary_pane(&geometry);
        self.sync_layout();
    }

    pub fn toggle_primary_pane(&mut self) {
        let geometry = self.live_extents();
        self.state.toggle_primary_pane(&geometry);
        self.sync_layout();
    }

    /// Run size observations queued by earlier renders.
    pub fn flush_observations(&mut self) -> bool {
        self.observers.deliver(&mut self.state)
    }

    /// Extents as currently laid out, recomputed from the live movement.
    fn live_extents(&self) -> Extents {
        SplitRegions::compute(
            self.area,
            self.state.direction(),
            self.separator_size,
            self.state.total_movement(),
        )
        .1
    }

    fn relayout(&mut self, area: Rect) -> Extents {
        let (regions, extents) = SplitRegions::compute(
            area,
            self.state.direction(),
            self.separator_size,
            self.state.total_movement(),
        );
        self.area = area;
        self.regions = regions;
        extents
    }

    fn sync_layout(&mut self) {
        if self.state.take_movement_change().is_some() {
            self.relayout(self.area);
        }
    }

    fn is_focusable(&self, focus: SplitFocus) -> bool {
        match focus {
            SplitFocus::Primary => !self.primary_hidden(),
            SplitFocus::Separator => true,
            SplitFocus::Secondary => !self.secondary_hidden(),
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        const ORDER: [SplitFocus; 3] = [
            SplitFocus::Primary,
            SplitFocus::Separator,
            SplitFocus::Secondary,
        ];
        let current = ORDER
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(1);
        for step in 1..ORDER.len() {
            let idx = if forward {
                (current + step) % ORDER.len()
            } else {
                (current + ORDER.len() - step) % ORDER.len()
            };
            if self.is_focusable(ORDER[idx]) {
                self.focus = ORDER[idx];
                return;
            }
        }
    }

    fn child_context(&self, focus: SplitFocus, ctx: &ComponentContext) -> ComponentContext {
        ComponentContext::new(ctx.focused() && self.focus == focus)
            .with_inert(self.state.is_active())
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, event: &Event, ctx: &ComponentContext) -> bool {
        let (x, y) = (mouse.column as i32, mouse.row as i32);
        let inside = rect_contains(self.area, mouse.column, mouse.row);
        let on_separator = inside && rect_contains(self.regions.separator, mouse.column, mouse.row);
        let mut handled = false;

        if on_separator != self.pointer_on_separator {
            self.pointer_on_separator = on_separator;
            let kind = if on_separator {
                PointerEventKind::SeparatorEnter
            } else {
                PointerEventKind::SeparatorLeave
            };
            handled |= self
                .drag
                .handle_pointer(&mut self.state, &PointerEvent::new(kind, x, y));
        }

        if !inside {
            if self.pointer_inside {
                self.pointer_inside = false;
                let leave = PointerEvent::new(PointerEventKind::Leave, x, y);
                handled |= self.drag.handle_pointer(&mut self.state, &leave);
            }
            return handled;
        }
        self.pointer_inside = true;

        let region = self.regions.region_at(mouse.column, mouse.row);
        let pointer = match mouse.kind {
            MouseEventKind::Down(button) => {
                if let Some(focus) = region.map(focus_for_region) {
                    self.set_focus(focus);
                }
                Some(
                    PointerEvent::new(PointerEventKind::Down, x, y)
                        .with_buttons(button_mask(button))
                        .on_separator(on_separator),
                )
            }
            MouseEventKind::Drag(button) => Some(
                PointerEvent::new(PointerEventKind::Move, x, y).with_buttons(button_mask(button)),
            ),
            MouseEventKind::Moved => Some(PointerEvent::new(PointerEventKind::Move, x, y)),
            MouseEventKind::Up(_) => Some(PointerEvent::new(PointerEventKind::Up, x, y)),
            _ => None,
        };
        if let Some(pointer) = pointer {
            handled |= self.drag.handle_pointer(&mut self.state, &pointer);
            self.sync_layout();
        }
        if handled || self.state.is_active() {
            return handled;
        }

        match region {
            Some(SplitRegion::Primary) => {
                let child_ctx = self.child_context(SplitFocus::Primary, ctx);
                self.primary.handle_event(event, &child_ctx)
            }
            Some(SplitRegion::Secondary) => {
                let child_ctx = self.child_context(SplitFocus::Secondary, ctx);
                self.secondary.handle_event(event, &child_ctx)
            }
            Some(SplitRegion::Separator) => {
                let child_ctx = self.child_context(SplitFocus::Separator, ctx);
                match self.separator.as_mut() {
                    Some(separator) => separator.handle_event(event, &child_ctx),
                    None => false,
                }
            }
            None => false,
        }
    }

    fn handle_key_event(&mut self, key: &KeyEvent, event: &Event, ctx: &ComponentContext) -> bool {
        if key.kind == KeyEventKind::Release || !ctx.focused() {
            return false;
        }
        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(true);
                return true;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return true;
            }
            _ => {}
        }
        match self.focus {
            SplitFocus::Separator => {
                let geometry = self.live_extents();
                let outcome: KeyOutcome =
                    handle_key(&mut self.state, &geometry, splitter_key(key.code), true);
                self.sync_layout();
                outcome.handled || outcome.prevent_default
            }
            SplitFocus::Primary => {
                let child_ctx = self.child_context(SplitFocus::Primary, ctx);
                self.primary.handle_event(event, &child_ctx)
            }
            SplitFocus::Secondary => {
                let child_ctx = self.child_context(SplitFocus::Secondary, ctx);
                self.secondary.handle_event(event, &child_ctx)
            }
        }
    }

    fn render_default_separator(&self, frame: &mut UiFrame<'_>, focused: bool) {
        let rect = self.regions.separator;
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let direction = self.state.direction();
        let (track, grip) = match direction {
            SplitDirection::Horizontal => ("│", "┃"),
            SplitDirection::Vertical => ("─", "━"),
        };
        frame.fill(rect, track, crate::theme::separator_track());

        let active = self.state.is_active();
        let cross = match direction {
            SplitDirection::Horizontal => rect.height,
            SplitDirection::Vertical => rect.width,
        };
        let grip_len = if active {
            cross
        } else {
            let share = (cross as u32 * IDLE_GRIP_PERCENT as u32 / 100) as u16;
            share.clamp(1, cross)
        };
        let start = (cross - grip_len) / 2;
        let grip_rect = match direction {
            SplitDirection::Horizontal => Rect {
                y: rect.y.saturating_add(start),
                height: grip_len,
                ..rect
            },
            SplitDirection::Vertical => Rect {
                x: rect.x.saturating_add(start),
                width: grip_len,
                ..rect
            },
        };
        frame.fill(
            grip_rect,
            grip,
            crate::theme::separator_grip(active, focused),
        );
    }
}

impl Component for SplitView {
    fn resize(&mut self, area: Rect, _ctx: &ComponentContext) {
        self.relayout(area);
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if self.mounted {
            self.flush_observations();
        }
        let extents = self.relayout(area);
        let regions = self.regions;

        if !is_empty(regions.primary) {
            let child_ctx = self.child_context(SplitFocus::Primary, ctx);
            self.primary.resize(regions.primary, &child_ctx);
            self.primary.render(frame, regions.primary, &child_ctx);
        }
        if !is_empty(regions.secondary) {
            let child_ctx = self.child_context(SplitFocus::Secondary, ctx);
            self.secondary.resize(regions.secondary, &child_ctx);
            self.secondary.render(frame, regions.secondary, &child_ctx);
        }
        let separator_ctx = self.child_context(SplitFocus::Separator, ctx);
        if let Some(separator) = self.separator.as_mut() {
            if !is_empty(regions.separator) {
                separator.render(frame, regions.separator, &separator_ctx);
            }
        } else {
            self.render_default_separator(frame, separator_ctx.focused());
        }

        if self.mounted {
            self.observers.record_layout(&extents);
        }
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        if !self.mounted {
            return false;
        }
        self.flush_observations();
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, event, ctx),
            Event::Key(key) => self.handle_key_event(key, event, ctx),
            _ => false,
        }
    }
}

/// Keeps a [`SplitView`] mounted for its lifetime.
pub struct MountGuard<'a> {
    view: &'a mut SplitView,
}

impl Deref for MountGuard<'_> {
    type Target = SplitView;

    fn deref(&self) -> &Self::Target {
        self.view
    }
}

impl DerefMut for MountGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.view
    }
}

impl Drop for MountGuard<'_> {
    fn drop(&mut self) {
        self.view.unmount();
    }
}

fn is_empty(rect: Rect) -> bool {
    rect.width == 0 || rect.height == 0
}

fn focus_for_region(region: SplitRegion) -> SplitFocus {
    match region {
        SplitRegion::Primary => SplitFocus::Primary,
        SplitRegion::Separator => SplitFocus::Separator,
        SplitRegion::Secondary => SplitFocus::Secondary,
    }
}

fn button_mask(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 4,
    }
}

fn splitter_key(code: KeyCode) -> SplitterKey {
    match code {
        KeyCode::Left => SplitterKey::ArrowLeft,
        KeyCode::Right => SplitterKey::ArrowRight,
        KeyCode::Up => SplitterKey::ArrowUp,
        KeyCode::Down => SplitterKey::ArrowDown,
        KeyCode::Home => SplitterKey::Home,
        KeyCode::End => SplitterKey::End,
        KeyCode::Enter => SplitterKey::Enter,
        _ => SplitterKey::Other,
    }
}
