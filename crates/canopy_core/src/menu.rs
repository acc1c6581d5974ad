//! Shared state behind a single mounted dropdown menu.
//!
//! The container owns one [`MenuState`] per mounted menu instance and hands a
//! cloned [`MenuHandle`] to the trigger, the content panel, and every item.
//! This is the state-sharing role a context provider plays in component
//! frameworks. All mutation happens on the UI thread in response to discrete
//! input events, so the state lives behind `Rc<RefCell<_>>` rather than a
//! lock.

use std::cell::RefCell;
use std::rc::Rc;

use crate::placement::{compute_placement, Align, Placement, Rect, Size};

/// Open/closed state plus the measurements a menu needs to position itself.
#[derive(Debug, Default)]
pub struct MenuState {
    open: bool,
    trigger: Option<Rect>,
    panel: Option<Size>,
    placement: Option<Placement>,
}

impl MenuState {
    /// Create a fresh, closed menu state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Set the open state directly.
    ///
    /// A closed-to-open transition starts a fresh measurement cycle: the
    /// panel's size from a previous open is discarded and the panel stays
    /// hidden until it has been measured again.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.panel = None;
        }
        self.open = open;
        tracing::trace!(open = self.open, "menu open state changed");
    }

    /// Invert the open state.
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Force the menu closed.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Record the trigger's measured geometry.
    ///
    /// Called on every layout pass; a re-mounted or moved trigger is picked
    /// up the next time it is measured.
    pub fn set_trigger(&mut self, rect: Rect) {
        self.trigger = Some(rect);
    }

    /// The trigger's last measured geometry, if it has been captured.
    pub fn trigger(&self) -> Option<Rect> {
        self.trigger
    }

    /// Record the panel's measured size.
    ///
    /// Returns `true` when the size differs from the cached one, which is the
    /// caller's cue to schedule a re-render with the panel positioned.
    pub fn set_panel_size(&mut self, size: Size) -> bool {
        let changed = self.panel != Some(size);
        if changed {
            self.panel = Some(size);
        }
        changed
    }

    /// The panel's measured size for the current open cycle.
    pub fn panel_size(&self) -> Option<Size> {
        self.panel
    }

    /// The placement produced by the last positioning pass.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Recompute the cached placement from the panel's measured size and the
    /// current viewport.
    ///
    /// Returns `None` without touching the cache when the menu is closed
    /// (viewport resizes while closed are deliberately ignored) or when the
    /// trigger has not been measured yet.
    pub fn recompute_placement(
        &mut self,
        panel: Size,
        viewport: Size,
        align: Align,
        gap: f32,
    ) -> Option<Placement> {
        if !self.open {
            return None;
        }
        let trigger = self.trigger?;

        let placement = compute_placement(trigger, panel, viewport, align, gap);
        self.placement = Some(placement);
        tracing::trace!(x = placement.x, y = placement.y, "menu placement recomputed");
        Some(placement)
    }
}

/// Cloneable handle to a menu's shared state.
#[derive(Clone, Default)]
pub struct MenuHandle {
    state: Rc<RefCell<MenuState>>,
}

impl MenuHandle {
    /// Create a handle over a fresh, closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Set the open state directly.
    pub fn set_open(&self, open: bool) {
        self.state.borrow_mut().set_open(open);
    }

    /// Invert the open state.
    pub fn toggle(&self) {
        self.state.borrow_mut().toggle();
    }

    /// Force the menu closed.
    pub fn close(&self) {
        self.state.borrow_mut().close();
    }

    /// Close the menu, then run `and_then`.
    ///
    /// Item activation goes through here: the callback runs strictly after
    /// the close, so handler logic reading the menu state sees it closed.
    pub fn close_then(&self, and_then: impl FnOnce()) {
        self.close();
        and_then();
    }

    /// Record the trigger's measured geometry.
    pub fn set_trigger_bounds(&self, rect: Rect) {
        self.state.borrow_mut().set_trigger(rect);
    }

    /// The trigger's last measured geometry.
    pub fn trigger_bounds(&self) -> Option<Rect> {
        self.state.borrow().trigger()
    }

    /// Record the panel's measured size; see [`MenuState::set_panel_size`].
    pub fn set_panel_size(&self, size: Size) -> bool {
        self.state.borrow_mut().set_panel_size(size)
    }

    /// The panel's measured size for the current open cycle.
    pub fn panel_size(&self) -> Option<Size> {
        self.state.borrow().panel_size()
    }

    /// The placement produced by the last positioning pass.
    pub fn placement(&self) -> Option<Placement> {
        self.state.borrow().placement()
    }

    /// Recompute the cached placement; see [`MenuState::recompute_placement`].
    pub fn recompute_placement(
        &self,
        panel: Size,
        viewport: Size,
        align: Align,
        gap: f32,
    ) -> Option<Placement> {
        self.state.borrow_mut().recompute_placement(panel, viewport, align, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::DEFAULT_GAP;
    use std::cell::Cell;

    fn measured_open_handle() -> MenuHandle {
        let handle = MenuHandle::new();
        handle.set_trigger_bounds(Rect::new(700.0, 20.0, 100.0, 30.0));
        handle.toggle();
        handle
    }

    #[test]
    fn test_toggle_flips_open_state() {
        let handle = MenuHandle::new();
        assert!(!handle.is_open());
        handle.toggle();
        assert!(handle.is_open());
        handle.toggle();
        assert!(!handle.is_open());
    }

    #[test]
    fn test_item_activation_closes_without_handler() {
        let handle = measured_open_handle();
        handle.close_then(|| {});
        assert!(!handle.is_open());
    }

    #[test]
    fn test_handler_observes_menu_already_closed() {
        let handle = measured_open_handle();
        let observed_open = Rc::new(Cell::new(None));

        let spy_handle = handle.clone();
        let spy_observed = observed_open.clone();
        handle.close_then(move || spy_observed.set(Some(spy_handle.is_open())));

        assert_eq!(observed_open.get(), Some(false));
        assert!(!handle.is_open());
    }

    #[test]
    fn test_recompute_matches_pure_computation() {
        let handle = measured_open_handle();
        let panel = Size::new(200.0, 150.0);
        let viewport = Size::new(800.0, 600.0);

        let placement = handle
            .recompute_placement(panel, viewport, Align::End, DEFAULT_GAP)
            .expect("open menu with a measured trigger must place");
        let expected = compute_placement(
            Rect::new(700.0, 20.0, 100.0, 30.0),
            panel,
            viewport,
            Align::End,
            DEFAULT_GAP,
        );
        assert_eq!(placement, expected);
        assert_eq!(handle.placement(), Some(expected));
    }

    #[test]
    fn test_recompute_skipped_without_trigger_measurement() {
        let handle = MenuHandle::new();
        handle.toggle();

        let result = handle.recompute_placement(
            Size::new(200.0, 150.0),
            Size::new(800.0, 600.0),
            Align::End,
            DEFAULT_GAP,
        );
        assert!(result.is_none());
        assert!(handle.placement().is_none());
    }

    #[test]
    fn test_resize_while_closed_leaves_placement_untouched() {
        let handle = measured_open_handle();
        let panel = Size::new(200.0, 150.0);
        handle.recompute_placement(panel, Size::new(800.0, 600.0), Align::End, DEFAULT_GAP);
        let before = handle.placement();

        handle.close();
        let result =
            handle.recompute_placement(panel, Size::new(500.0, 400.0), Align::End, DEFAULT_GAP);

        assert!(result.is_none());
        assert_eq!(handle.placement(), before);
    }

    #[test]
    fn test_set_panel_size_reports_changes() {
        let handle = measured_open_handle();
        assert!(handle.set_panel_size(Size::new(200.0, 150.0)));
        assert!(!handle.set_panel_size(Size::new(200.0, 150.0)));
        assert!(handle.set_panel_size(Size::new(220.0, 150.0)));
    }

    #[test]
    fn test_set_open_keeps_measurement_while_already_open() {
        let handle = measured_open_handle();
        handle.set_panel_size(Size::new(200.0, 150.0));

        handle.set_open(true);
        assert!(handle.panel_size().is_some());

        handle.set_open(false);
        assert!(!handle.is_open());
    }

    #[test]
    fn test_reopening_starts_a_fresh_measurement_cycle() {
        let handle = measured_open_handle();
        handle.set_panel_size(Size::new(200.0, 150.0));
        assert!(handle.panel_size().is_some());

        handle.close();
        assert!(handle.panel_size().is_some());

        handle.toggle();
        assert!(handle.panel_size().is_none());
    }

    #[test]
    fn test_trigger_remeasurement_replaces_geometry() {
        let handle = MenuHandle::new();
        handle.set_trigger_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        handle.set_trigger_bounds(Rect::new(5.0, 8.0, 40.0, 24.0));
        assert_eq!(handle.trigger_bounds(), Some(Rect::new(5.0, 8.0, 40.0, 24.0)));
    }
}
