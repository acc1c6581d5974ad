//! Viewport-relative placement math for popup panels.
//!
//! A panel is anchored below its trigger and clamped horizontally so that it
//! stays inside the viewport whenever it can fit. All values are logical
//! pixels; the UI crate converts to and from GPUI geometry at the boundary.

use serde::{Deserialize, Serialize};

/// Default gap between the trigger's bottom edge and the panel, in pixels.
pub const DEFAULT_GAP: f32 = 5.0;

/// Horizontal alignment of the panel relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Panel's left edge aligns with the trigger's left edge.
    Start,
    /// Panel is centered on the trigger.
    Center,
    /// Panel's right edge aligns with the trigger's right edge.
    #[default]
    End,
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Size of the rectangle.
    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }
}

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The clamped anchor for a panel, plus the trigger measurements that
/// produced it.
///
/// `x`/`y` describe where the panel attaches before the alignment shift;
/// [`Placement::panel_origin`] resolves the on-screen top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Clamped horizontal anchor.
    pub x: f32,
    /// Vertical position of the panel's top edge (below the trigger).
    pub y: f32,
    /// Measured trigger width used for the computation.
    pub trigger_width: f32,
    /// Measured trigger height used for the computation.
    pub trigger_height: f32,
}

impl Placement {
    /// Resolve the panel's on-screen top-left corner for the given alignment.
    ///
    /// The alignment shift compensates rightwards by the trigger width, so an
    /// `end` panel's right edge meets the trigger's right edge and a `center`
    /// panel straddles the trigger's midpoint.
    pub fn panel_origin(&self, align: Align, panel_width: f32) -> (f32, f32) {
        let x = match align {
            Align::Start => self.x,
            Align::Center => self.x - panel_width / 2.0 + self.trigger_width / 2.0,
            Align::End => self.x - panel_width + self.trigger_width,
        };
        (x, self.y)
    }
}

/// Compute the clamped placement of a panel below its trigger.
///
/// The horizontal anchor starts at the trigger's left edge and is clamped
/// twice: first so the shifted panel cannot escape past the viewport's left
/// edge, then against the viewport's right edge. When the panel is wider than
/// the viewport the clamp is best-effort and the left edge may go negative.
pub fn compute_placement(
    trigger: Rect,
    panel: Size,
    viewport: Size,
    align: Align,
    gap: f32,
) -> Placement {
    let mut x = trigger.x;

    // Left clamp: the alignment shift extends the panel leftwards of the
    // anchor, so anchors too close to the left edge get pushed right.
    match align {
        Align::Center => {
            if x < panel.width / 2.0 - trigger.width / 2.0 {
                x = panel.width / 2.0 - trigger.width / 2.0;
            }
        }
        Align::Start | Align::End => {
            if x < panel.width - trigger.width {
                x = panel.width - trigger.width;
            }
        }
    }

    // Right clamp against the viewport edge.
    match align {
        Align::End => {
            if viewport.width < x + trigger.width {
                x = viewport.width - trigger.width;
            }
        }
        Align::Center => {
            if viewport.width < x + trigger.width / 2.0 + panel.width / 2.0 {
                x = viewport.width - trigger.width / 2.0 - panel.width / 2.0;
            }
        }
        Align::Start => {
            if viewport.width < x + panel.width {
                x = viewport.width - panel.width;
            }
        }
    }

    Placement {
        x,
        y: trigger.y + trigger.height + gap,
        trigger_width: trigger.width,
        trigger_height: trigger.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size { width: 800.0, height: 600.0 };

    #[test]
    fn test_end_alignment_reference_scenario() {
        // Trigger flush with the right viewport edge: neither clamp fires.
        let trigger = Rect::new(700.0, 20.0, 100.0, 30.0);
        let panel = Size::new(200.0, 150.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::End, 5.0);
        assert_eq!(placement.x, 700.0);
        assert_eq!(placement.y, 55.0);

        let (x, y) = placement.panel_origin(Align::End, panel.width);
        assert_eq!((x, y), (600.0, 55.0));
    }

    #[test]
    fn test_left_clamp_keeps_end_panel_on_screen() {
        // Trigger near the left edge; the shifted panel would escape left.
        let trigger = Rect::new(50.0, 0.0, 40.0, 20.0);
        let panel = Size::new(200.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::End, 5.0);
        assert_eq!(placement.x, 160.0);

        let (x, _) = placement.panel_origin(Align::End, panel.width);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn test_left_clamp_keeps_centered_panel_on_screen() {
        let trigger = Rect::new(10.0, 0.0, 40.0, 20.0);
        let panel = Size::new(200.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::Center, 5.0);
        assert_eq!(placement.x, 80.0);

        let (x, y) = placement.panel_origin(Align::Center, panel.width);
        assert_eq!((x, y), (0.0, 25.0));
    }

    #[test]
    fn test_left_clamp_applies_to_start_alignment_too() {
        // Start alignment has no shift, but the anchor clamp still holds.
        let trigger = Rect::new(50.0, 0.0, 40.0, 20.0);
        let panel = Size::new(200.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::Start, 5.0);
        assert_eq!(placement.x, 160.0);

        let (x, _) = placement.panel_origin(Align::Start, panel.width);
        assert_eq!(x, 160.0);
    }

    #[test]
    fn test_right_clamp_for_start_alignment() {
        let trigger = Rect::new(700.0, 10.0, 50.0, 20.0);
        let panel = Size::new(200.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::Start, 5.0);
        assert_eq!(placement.x, 600.0);

        let (x, _) = placement.panel_origin(Align::Start, panel.width);
        assert_eq!(x + panel.width, VIEWPORT.width);
    }

    #[test]
    fn test_right_clamp_for_end_alignment() {
        // Trigger sticking out past the right edge.
        let trigger = Rect::new(750.0, 0.0, 100.0, 24.0);
        let panel = Size::new(180.0, 90.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::End, 5.0);
        assert_eq!(placement.x, 700.0);

        let (x, _) = placement.panel_origin(Align::End, panel.width);
        assert_eq!(x + panel.width, VIEWPORT.width);
    }

    #[test]
    fn test_wide_trigger_never_overflows_right_edge() {
        // Trigger wider than the panel; the final right edge must stay inside
        // the viewport.
        let trigger = Rect::new(600.0, 0.0, 300.0, 32.0);
        let panel = Size::new(200.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::End, 5.0);
        let (x, _) = placement.panel_origin(Align::End, panel.width);
        assert!(x >= 0.0);
        assert!(x + panel.width <= VIEWPORT.width);
    }

    #[test]
    fn test_panel_wider_than_viewport_is_best_effort() {
        // The clamp pins the right edge to the viewport; the left edge may go
        // negative when the panel simply cannot fit.
        let trigger = Rect::new(100.0, 0.0, 50.0, 20.0);
        let panel = Size::new(900.0, 100.0);

        let placement = compute_placement(trigger, panel, VIEWPORT, Align::Start, 5.0);
        let (x, _) = placement.panel_origin(Align::Start, panel.width);
        assert_eq!(x + panel.width, VIEWPORT.width);
        assert!(x < 0.0);
    }

    #[test]
    fn test_gap_only_moves_the_panel_down() {
        let trigger = Rect::new(400.0, 50.0, 80.0, 30.0);
        let panel = Size::new(120.0, 60.0);

        let near = compute_placement(trigger, panel, VIEWPORT, Align::End, 0.0);
        let far = compute_placement(trigger, panel, VIEWPORT, Align::End, 12.0);
        assert_eq!(near.x, far.x);
        assert_eq!(near.y, 80.0);
        assert_eq!(far.y, 92.0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let trigger = Rect::new(640.0, 16.0, 90.0, 28.0);
        let panel = Size::new(240.0, 180.0);

        let first = compute_placement(trigger, panel, VIEWPORT, Align::Center, DEFAULT_GAP);
        let second = compute_placement(trigger, panel, VIEWPORT, Align::Center, DEFAULT_GAP);
        assert_eq!(first, second);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Align::default(), Align::End);
        assert_eq!(DEFAULT_GAP, 5.0);
    }
}
