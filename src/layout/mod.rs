//! Terminal geometry for the split view.
//!
//! Turns the core's logical extents into ratatui rectangles and answers hit
//! tests against them.

use ratatui::prelude::{Direction, Rect};

use crate::splitter::{Extents, SplitDirection, split_extents};

impl From<SplitDirection> for Direction {
    fn from(direction: SplitDirection) -> Self {
        match direction {
            SplitDirection::Horizontal => Direction::Horizontal,
            SplitDirection::Vertical => Direction::Vertical,
        }
    }
}

/// The three rectangles of a laid-out split view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitRegions {
    pub primary: Rect,
    pub separator: Rect,
    pub secondary: Rect,
}

impl SplitRegions {
    pub fn compute(
        area: Rect,
        direction: SplitDirection,
        separator_size: u16,
        movement: i32,
    ) -> (Self, Extents) {
        let extents = split_extents(
            axis_length(direction, area) as i32,
            separator_size as i32,
            movement,
        );
        let sizes = [
            extents.primary as u16,
            extents.separator as u16,
            extents.secondary as u16,
        ];
        let rects = build_rects_from_sizes(direction.into(), area, &sizes);
        let regions = Self {
            primary: rects[0],
            separator: rects[1],
            secondary: rects[2],
        };
        (regions, extents)
    }

    pub fn region_at(&self, column: u16, row: u16) -> Option<SplitRegion> {
        if rect_contains(self.separator, column, row) {
            Some(SplitRegion::Separator)
        } else if rect_contains(self.primary, column, row) {
            Some(SplitRegion::Primary)
        } else if rect_contains(self.secondary, column, row) {
            Some(SplitRegion::Secondary)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRegion {
    Primary,
    Separator,
    Secondary,
}

pub fn axis_length(direction: SplitDirection, area: Rect) -> u16 {
    match direction {
        SplitDirection::Horizontal => area.width,
        SplitDirection::Vertical => area.height,
    }
}

pub fn build_rects_from_sizes(direction: Direction, area: Rect, sizes: &[u16]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(sizes.len());
    let mut cursor_x = area.x;
    let mut cursor_y = area.y;
    for size in sizes {
        let rect = match direction {
            Direction::Horizontal => {
                let rect = Rect {
                    x: cursor_x,
                    y: area.y,
                    width: *size,
                    height: area.height,
                };
                cursor_x = cursor_x.saturating_add(*size);
                rect
            }
            Direction::Vertical => {
                let rect = Rect {
                    x: area.x,
                    y: cursor_y,
                    width: area.width,
                    height: *size,
                };
                cursor_y = cursor_y.saturating_add(*size);
                rect
            }
        };
        rects.push(rect);
    }
    rects
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
