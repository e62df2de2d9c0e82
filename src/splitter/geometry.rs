/// Live extents of the three regions along the split axis.
///
/// Collapse operations read geometry through this trait at call time, so
/// implementors must answer from the current layout rather than a cached
/// snapshot.
pub trait PaneGeometry {
    fn primary_extent(&self) -> i32;
    fn separator_extent(&self) -> i32;
    fn secondary_extent(&self) -> i32;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extents {
    pub primary: i32,
    pub separator: i32,
    pub secondary: i32,
}

impl Extents {
    pub const fn new(primary: i32, separator: i32, secondary: i32) -> Self {
        Self {
            primary,
            separator,
            secondary,
        }
    }

    pub const fn total(&self) -> i32 {
        self.primary + self.separator + self.secondary
    }
}

impl PaneGeometry for Extents {
    fn primary_extent(&self) -> i32 {
        self.primary
    }

    fn separator_extent(&self) -> i32 {
        self.separator
    }

    fn secondary_extent(&self) -> i32 {
        self.secondary
    }
}

impl<T: PaneGeometry + ?Sized> PaneGeometry for &T {
    fn primary_extent(&self) -> i32 {
        (**self).primary_extent()
    }

    fn separator_extent(&self) -> i32 {
        (**self).separator_extent()
    }

    fn secondary_extent(&self) -> i32 {
        (**self).secondary_extent()
    }
}
