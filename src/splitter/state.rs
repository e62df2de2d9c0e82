use super::SplitDirection;
use super::geometry::PaneGeometry;

/// Mutable state of one split view instance.
///
/// `total_movement` is the only value layout consumes: the signed offset of
/// the separator from the neutral even split. The model never clamps it;
/// [`super::layout::split_extents`] bounds the drawn pane sizes instead.
#[derive(Debug, Clone)]
pub struct SplitterState {
    total_movement: i32,
    direction: SplitDirection,
    is_fixed: bool,
    primary_collapsed: bool,
    secondary_collapsed: bool,
    dragging: bool,
    hovering: bool,
    current_pointer_location: Option<i32>,
    previous_movement: Option<i32>,
    revision: u64,
    movement_dirty: bool,
}

impl SplitterState {
    pub fn new(direction: SplitDirection, is_fixed: bool) -> Self {
        Self {
            total_movement: 0,
            direction,
            is_fixed,
            primary_collapsed: false,
            secondary_collapsed: false,
            dragging: false,
            hovering: false,
            current_pointer_location: None,
            previous_movement: None,
            revision: 0,
            movement_dirty: false,
        }
    }

    /// Return to the neutral split, keeping configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.direction, self.is_fixed);
    }

    pub fn total_movement(&self) -> i32 {
        self.total_movement
    }

    /// Overwrite the movement. This is the host-facing property write and is
    /// not gated by `is_fixed`.
    pub fn set_total_movement(&mut self, movement: i32) {
        self.total_movement = movement;
        self.revision = self.revision.wrapping_add(1);
        self.movement_dirty = true;
    }

    /// Apply a user-driven delta. Refused while the split is fixed.
    pub fn nudge(&mut self, delta: i32) -> bool {
        if self.is_fixed {
            return false;
        }
        self.set_total_movement(self.total_movement.saturating_add(delta));
        true
    }

    /// Bumped on every movement write; adapters key cached layouts on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn take_movement_change(&mut self) -> Option<i32> {
        if self.movement_dirty {
            self.movement_dirty = false;
            Some(self.total_movement)
        } else {
            None
        }
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Switching axes drops the movement and any toggle snapshot; an
    /// offset in columns means nothing as an offset in rows.
    pub fn set_direction(&mut self, direction: SplitDirection) {
        if direction == self.direction {
            return;
        }
        self.direction = direction;
        self.previous_movement = None;
        self.set_total_movement(0);
    }

    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.is_fixed = fixed;
    }

    pub fn is_primary_collapsed(&self) -> bool {
        self.primary_collapsed
    }

    pub fn is_secondary_collapsed(&self) -> bool {
        self.secondary_collapsed
    }

    pub(crate) fn set_primary_collapsed(&mut self, collapsed: bool) {
        self.primary_collapsed = collapsed;
    }

    pub(crate) fn set_secondary_collapsed(&mut self, collapsed: bool) {
        self.secondary_collapsed = collapsed;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub(crate) fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Drives the active presentation: wide separator, inert panes.
    pub fn is_active(&self) -> bool {
        self.dragging || self.hovering
    }

    /// Hover or drag, matching the single flag hosts used to observe.
    pub fn is_being_dragged(&self) -> bool {
        self.is_active()
    }

    pub fn current_pointer_location(&self) -> Option<i32> {
        self.current_pointer_location
    }

    pub(crate) fn set_current_pointer_location(&mut self, location: Option<i32>) {
        self.current_pointer_location = location;
    }

    pub fn previous_movement(&self) -> Option<i32> {
        self.previous_movement
    }

    /// Move the boundary to the start so the primary pane has no extent.
    ///
    /// When the secondary pane is already collapsed the separator's extent
    /// is removed as well, since it has nowhere else to go.
    pub fn collapse_primary_pane(&mut self, geometry: &impl PaneGeometry) {
        if self.primary_collapsed {
            return;
        }
        let mut movement = self.total_movement.saturating_sub(geometry.primary_extent());
        if self.secondary_collapsed {
            movement = movement.saturating_sub(geometry.separator_extent());
        }
        tracing::debug!(from = self.total_movement, to = movement, "collapse primary pane");
        self.set_total_movement(movement);
    }

    pub fn collapse_secondary_pane(&mut self, geometry: &impl PaneGeometry) {
        if self.secondary_collapsed {
            return;
        }
        let mut movement = self.total_movement.saturating_add(geometry.secondary_extent());
        if self.primary_collapsed {
            movement = movement.saturating_add(geometry.separator_extent());
        }
        tracing::debug!(from = self.total_movement, to = movement, "collapse secondary pane");
        self.set_total_movement(movement);
    }

    /// Collapse the primary pane, or restore the position it had before the
    /// previous toggle. Independent of the observed collapse flags.
    pub fn toggle_primary_pane(&mut self, geometry: &impl PaneGeometry) {
        match self.previous_movement.take() {
            None => {
                self.previous_movement = Some(self.total_movement);
                self.collapse_primary_pane(geometry);
            }
            Some(previous) => {
                tracing::debug!(restore = previous, "restore primary pane");
                self.set_total_movement(previous);
            }
        }
    }
}

impl Default for SplitterState {
    fn default() -> Self {
        Self::new(SplitDirection::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::geometry::Extents;

    #[test]
    fn starts_neutral() {
        let s = SplitterState::default();
        assert_eq!(s.total_movement(), 0);
        assert!(!s.is_primary_collapsed());
        assert!(!s.is_secondary_collapsed());
        assert!(!s.is_being_dragged());
        assert_eq!(s.current_pointer_location(), None);
        assert_eq!(s.previous_movement(), None);
    }

    #[test]
    fn collapse_primary_then_secondary_compensates_for_separator() {
        let mut s = SplitterState::default();
        s.collapse_primary_pane(&Extents::new(300, 14, 300));
        assert_eq!(s.total_movement(), -300);

        // the size observer reports the primary pane at zero extent
        s.set_primary_collapsed(true);
        s.collapse_secondary_pane(&Extents::new(0, 14, 300));
        assert_eq!(s.total_movement(), 14);
    }

    #[test]
    fn collapse_is_noop_once_collapsed() {
        let mut s = SplitterState::default();
        s.set_primary_collapsed(true);
        s.collapse_primary_pane(&Extents::new(300, 14, 300));
        assert_eq!(s.total_movement(), 0);
        assert!(s.take_movement_change().is_none());
    }

    #[test]
    fn toggle_round_trips() {
        let mut s = SplitterState::default();
        s.set_total_movement(42);
        let geometry = Extents::new(120, 1, 80);
        s.toggle_primary_pane(&geometry);
        assert_eq!(s.total_movement(), 42 - 120);
        assert_eq!(s.previous_movement(), Some(42));
        s.toggle_primary_pane(&geometry);
        assert_eq!(s.total_movement(), 42);
        assert_eq!(s.previous_movement(), None);
    }

    #[test]
    fn toggle_latches_even_when_already_collapsed() {
        let mut s = SplitterState::default();
        s.set_primary_collapsed(true);
        s.set_total_movement(-50);
        let geometry = Extents::new(0, 1, 100);
        s.toggle_primary_pane(&geometry);
        assert_eq!(s.total_movement(), -50);
        assert_eq!(s.previous_movement(), Some(-50));
        s.set_total_movement(-70);
        s.toggle_primary_pane(&geometry);
        assert_eq!(s.total_movement(), -50);
    }

    #[test]
    fn nudge_refused_when_fixed() {
        let mut s = SplitterState::new(SplitDirection::Horizontal, true);
        assert!(!s.nudge(5));
        assert_eq!(s.total_movement(), 0);
        s.set_total_movement(5);
        assert_eq!(s.total_movement(), 5);
    }

    #[test]
    fn collapse_saturates_at_movement_bounds() {
        let geometry = Extents::new(300, 14, 300);
        let mut s = SplitterState::default();
        s.set_total_movement(i32::MIN + 5);
        s.set_secondary_collapsed(true);
        s.collapse_primary_pane(&geometry);
        assert_eq!(s.total_movement(), i32::MIN);

        let mut s = SplitterState::default();
        s.set_total_movement(i32::MAX - 5);
        s.set_primary_collapsed(true);
        s.collapse_secondary_pane(&geometry);
        assert_eq!(s.total_movement(), i32::MAX);
    }

    #[test]
    fn direction_change_drops_movement_and_toggle_snapshot() {
        let geometry = Extents::new(10, 1, 10);
        let mut s = SplitterState::default();
        s.set_total_movement(-2);
        s.toggle_primary_pane(&geometry);
        assert_eq!(s.previous_movement(), Some(-2));

        s.set_direction(SplitDirection::Vertical);
        assert_eq!(s.total_movement(), 0);
        assert_eq!(s.previous_movement(), None);

        // same direction again leaves movement alone
        s.set_total_movement(4);
        s.set_direction(SplitDirection::Vertical);
        assert_eq!(s.total_movement(), 4);
    }

    #[test]
    fn movement_change_is_consumed() {
        let mut s = SplitterState::default();
        let before = s.revision();
        assert!(s.nudge(3));
        assert_eq!(s.revision(), before + 1);
        assert_eq!(s.take_movement_change(), Some(3));
        assert!(s.take_movement_change().is_none());
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut s = SplitterState::new(SplitDirection::Vertical, true);
        s.set_total_movement(9);
        s.set_hovering(true);
        s.reset();
        assert_eq!(s.total_movement(), 0);
        assert!(!s.is_active());
        assert_eq!(s.direction(), SplitDirection::Vertical);
        assert!(s.is_fixed());
    }
}
