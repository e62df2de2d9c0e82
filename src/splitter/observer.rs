//! Size observation of the two pane wrappers.
//!
//! Each pane gets its own [`ResizeObserver`]. The host reports rendered
//! extents after layout with [`SizeObserverBridge::record_layout`]; entries
//! queue up and are delivered later through
//! [`SizeObserverBridge::deliver`], mirroring platform resize observers
//! that call back after layout rather than synchronously. Delivery is the
//! only place the collapse flags are written.

use super::geometry::Extents;
use super::state::SplitterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEntry {
    /// Content extent along the split axis.
    pub extent: i32,
}

#[derive(Debug, Default)]
pub struct ResizeObserver {
    connected: bool,
    last_extent: Option<i32>,
    pending: Vec<ResizeEntry>,
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing. The next reported extent is always queued.
    pub fn observe(&mut self) {
        self.connected = true;
        self.last_extent = None;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.last_extent = None;
        self.pending.clear();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Host-side notification of a rendered extent. Reports made before the
    /// next delivery coalesce into one entry carrying the latest extent.
    pub fn notify(&mut self, extent: i32) {
        if !self.connected || self.last_extent == Some(extent) {
            return;
        }
        self.last_extent = Some(extent);
        self.pending.clear();
        self.pending.push(ResizeEntry { extent });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn take_entries(&mut self) -> Vec<ResizeEntry> {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Default)]
pub struct SizeObserverBridge {
    primary: ResizeObserver,
    secondary: ResizeObserver,
    primary_hidden: bool,
    secondary_hidden: bool,
}

impl SizeObserverBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) {
        self.primary.observe();
        self.secondary.observe();
        tracing::debug!("size observers connected");
    }

    pub fn disconnect(&mut self) {
        self.primary.disconnect();
        self.secondary.disconnect();
        self.primary_hidden = false;
        self.secondary_hidden = false;
        tracing::debug!("size observers disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.primary.is_connected() && self.secondary.is_connected()
    }

    pub fn record_layout(&mut self, extents: &Extents) {
        self.primary.notify(extents.primary);
        self.secondary.notify(extents.secondary);
    }

    pub fn has_pending(&self) -> bool {
        self.primary.has_pending() || self.secondary.has_pending()
    }

    /// Run queued callbacks against `state`. Returns whether any ran.
    pub fn deliver(&mut self, state: &mut SplitterState) -> bool {
        let primary = self.primary.take_entries();
        let secondary = self.secondary.take_entries();
        let mut delivered = false;
        if !primary.is_empty() {
            self.observe_primary(&primary, state);
            delivered = true;
        }
        if !secondary.is_empty() {
            self.observe_secondary(&secondary, state);
            delivered = true;
        }
        delivered
    }

    /// Accessibility-hidden state of the primary pane.
    pub fn primary_hidden(&self) -> bool {
        self.primary_hidden
    }

    pub fn secondary_hidden(&self) -> bool {
        self.secondary_hidden
    }

    fn observe_primary(&mut self, entries: &[ResizeEntry], state: &mut SplitterState) {
        let Some(entry) = entries.first() else {
            return;
        };
        let collapsed = entry.extent == 0;
        if collapsed != state.is_primary_collapsed() {
            tracing::debug!(collapsed, "primary pane collapse state changed");
        }
        state.set_primary_collapsed(collapsed);
        self.primary_hidden = collapsed;
    }

    fn observe_secondary(&mut self, entries: &[ResizeEntry], state: &mut SplitterState) {
        let Some(entry) = entries.first() else {
            return;
        };
        let collapsed = entry.extent == 0;
        if collapsed != state.is_secondary_collapsed() {
            tracing::debug!(collapsed, "secondary pane collapse state changed");
        }
        state.set_secondary_collapsed(collapsed);
        self.secondary_hidden = collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extent_collapses_and_hides() {
        let mut state = SplitterState::default();
        let mut bridge = SizeObserverBridge::new();
        bridge.connect();

        bridge.record_layout(&Extents::new(0, 1, 40));
        assert!(!state.is_primary_collapsed());
        assert!(bridge.deliver(&mut state));
        assert!(state.is_primary_collapsed());
        assert!(bridge.primary_hidden());
        assert!(!state.is_secondary_collapsed());
        assert!(!bridge.secondary_hidden());

        bridge.record_layout(&Extents::new(12, 1, 28));
        bridge.deliver(&mut state);
        assert!(!state.is_primary_collapsed());
        assert!(!bridge.primary_hidden());
    }

    #[test]
    fn unchanged_extent_is_not_reported_again() {
        let mut state = SplitterState::default();
        let mut bridge = SizeObserverBridge::new();
        bridge.connect();
        bridge.record_layout(&Extents::new(5, 1, 5));
        assert!(bridge.deliver(&mut state));
        bridge.record_layout(&Extents::new(5, 1, 5));
        assert!(!bridge.has_pending());
        assert!(!bridge.deliver(&mut state));
    }

    #[test]
    fn reports_between_deliveries_coalesce() {
        let mut state = SplitterState::default();
        let mut bridge = SizeObserverBridge::new();
        bridge.connect();
        bridge.record_layout(&Extents::new(0, 1, 10));
        bridge.record_layout(&Extents::new(4, 1, 6));
        bridge.deliver(&mut state);
        assert!(!state.is_primary_collapsed());
        assert!(!bridge.primary_hidden());
    }

    #[test]
    fn disconnected_observers_drop_reports() {
        let mut state = SplitterState::default();
        let mut bridge = SizeObserverBridge::new();
        bridge.record_layout(&Extents::new(0, 1, 0));
        assert!(!bridge.deliver(&mut state));

        bridge.connect();
        bridge.record_layout(&Extents::new(0, 1, 0));
        bridge.disconnect();
        assert!(!bridge.is_connected());
        assert!(!bridge.deliver(&mut state));
        assert!(!state.is_primary_collapsed());
        assert!(!state.is_secondary_collapsed());
    }

    #[test]
    fn reconnect_reports_current_extent_again() {
        let mut state = SplitterState::default();
        let mut bridge = SizeObserverBridge::new();
        bridge.connect();
        bridge.record_layout(&Extents::new(0, 1, 9));
        bridge.deliver(&mut state);
        bridge.disconnect();
        bridge.connect();
        bridge.record_layout(&Extents::new(0, 1, 9));
        assert!(bridge.has_pending());
    }
}
