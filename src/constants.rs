//! Shared crate-wide constants.

/// Default separator thickness, in terminal cells along the split axis.
pub const DEFAULT_SEPARATOR_SIZE: u16 = 1;

/// Largest separator thickness accepted from configuration.
pub const MAX_SEPARATOR_SIZE: u16 = 8;

/// Share of the separator's cross axis covered by its grip while idle, in
/// percent. The grip spans the whole cross axis while the view is active.
///
/// Units: percent of the separator's length. At least one cell is always
/// drawn so the separator stays discoverable in very short views.
pub const IDLE_GRIP_PERCENT: u16 = 15;

/// Rows or columns scrolled by one mouse wheel notch in a text pane.
pub const WHEEL_SCROLL_LINES: usize = 3;
