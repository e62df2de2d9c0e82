//! Shared component rendering context
//!
//! `ComponentContext` carries the UI state a component needs while rendering
//! and handling events, so the `Component` trait does not grow ad-hoc
//! boolean parameters.

/// Context passed to `Component` trait methods.
///
/// - `focused`: whether the component currently owns keyboard focus.
/// - `inert`: whether the component is temporarily non-interactive, e.g. a
///   pane while its split view's separator is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentContext {
    focused: bool,
    inert: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            inert: false,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn inert(&self) -> bool {
        self.inert
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_inert(mut self, inert: bool) -> Self {
        self.inert = inert;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}
