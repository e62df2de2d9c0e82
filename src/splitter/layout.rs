use super::geometry::Extents;

/// Map a logical movement onto drawable extents.
///
/// The separator is clamped to the container. The space left over is split
/// evenly (the odd cell goes to the secondary pane) and each pane is offset
/// by `movement` in opposite directions, bounded to `[0, available]`.
pub fn split_extents(container: i32, separator: i32, movement: i32) -> Extents {
    let container = container.max(0);
    let separator = separator.clamp(0, container);
    let available = container - separator;
    let initial_primary = available / 2;
    let initial_secondary = available - initial_primary;
    let primary = initial_primary.saturating_add(movement).clamp(0, available);
    let secondary = initial_secondary
        .saturating_sub(movement)
        .clamp(0, available);
    Extents {
        primary,
        separator,
        secondary,
    }
}
