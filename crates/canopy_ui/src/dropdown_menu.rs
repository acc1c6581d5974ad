//! Dropdown menu components.
//!
//! This module provides:
//! - DropdownMenu container that owns the shared open/closed state
//! - DropdownMenuTrigger that measures its content and toggles the menu
//! - DropdownMenuContent panel with viewport-aware positioning
//! - DropdownMenuItem rows that close the menu before running their handler
//! - Click-outside-to-close behavior via an occluding backdrop
//!
//! Positioning is two-pass: a freshly opened panel is laid out fully
//! transparent, its size is captured after layout, and the next frame renders
//! it clamped against the trigger and the viewport.

use std::mem;

use gpui::{
    anchored, deferred, div, point, prelude::*, px, AnyElement, App, Bounds, ClickEvent, Div,
    Element, ElementId, GlobalElementId, IntoElement, LayoutId, MouseButton, ParentElement,
    Pixels, RenderOnce, Style, Window,
};
use smallvec::SmallVec;

use canopy_core::menu::MenuHandle;
use canopy_core::placement::{Align, Rect, Size, DEFAULT_GAP};

use crate::CanopyTheme;

/// Type alias for item click handler callbacks.
pub type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Caller-supplied styling layered over a component's themed defaults.
pub type StyleOverride = Box<dyn FnOnce(Div) -> Div + 'static>;

fn rect_from_bounds(bounds: Bounds<Pixels>) -> Rect {
    Rect::new(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

fn size_from_pixels(size: gpui::Size<Pixels>) -> Size {
    Size::new(f32::from(size.width), f32::from(size.height))
}

// ============================================================================
// DropdownMenu
// ============================================================================

/// Container that establishes the shared menu state and renders its trigger
/// and, while open, its content panel.
pub struct DropdownMenu {
    id: ElementId,
    trigger_children: SmallVec<[AnyElement; 2]>,
    content: Option<DropdownMenuContent>,
}

impl DropdownMenu {
    /// Create a new dropdown menu with the given ID.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self { id: id.into(), trigger_children: SmallVec::new(), content: None }
    }

    /// Append an element to the trigger.
    ///
    /// May be called repeatedly; geometry is measured against the last
    /// appended element.
    pub fn trigger(mut self, child: impl IntoElement) -> Self {
        self.trigger_children.push(child.into_any_element());
        self
    }

    /// Set the content panel.
    pub fn content(mut self, content: DropdownMenuContent) -> Self {
        self.content = Some(content);
        self
    }
}

#[derive(Clone, Default)]
struct DropdownMenuElementState {
    handle: MenuHandle,
}

pub struct DropdownMenuFrameState {
    trigger_element: Option<AnyElement>,
    panel_element: Option<AnyElement>,
}

impl Element for DropdownMenu {
    type RequestLayoutState = DropdownMenuFrameState;
    type PrepaintState = ();

    fn id(&self) -> Option<ElementId> {
        Some(self.id.clone())
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        window.with_element_state(
            global_id.unwrap(),
            |element_state: Option<DropdownMenuElementState>, window| {
                let element_state = element_state.unwrap_or_default();
                let handle = element_state.handle.clone();

                let mut trigger_element = DropdownMenuTrigger::new(
                    handle.clone(),
                    mem::take(&mut self.trigger_children),
                )
                .into_any_element();
                let trigger_layout_id = trigger_element.request_layout(window, cx);

                // The panel only exists in the tree while the menu is open.
                let mut panel_element = None;
                let mut panel_layout_id = None;
                if handle.is_open() {
                    if let Some(content) = self.content.take() {
                        let mut element =
                            deferred(content.with_handle(handle)).with_priority(1).into_any();
                        panel_layout_id = Some(element.request_layout(window, cx));
                        panel_element = Some(element);
                    }
                }

                let layout_id = window.request_layout(
                    Style::default(),
                    std::iter::once(trigger_layout_id).chain(panel_layout_id),
                    cx,
                );

                (
                    (
                        layout_id,
                        DropdownMenuFrameState {
                            trigger_element: Some(trigger_element),
                            panel_element,
                        },
                    ),
                    element_state,
                )
            },
        )
    }

    fn prepaint(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) {
        if let Some(trigger) = request_layout.trigger_element.as_mut() {
            trigger.prepaint(window, cx);
        }

        if let Some(panel) = request_layout.panel_element.as_mut() {
            panel.prepaint(window, cx);
        }
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        request_layout: &mut Self::RequestLayoutState,
        _prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        if let Some(mut trigger) = request_layout.trigger_element.take() {
            trigger.paint(window, cx);
        }

        if let Some(mut panel) = request_layout.panel_element.take() {
            panel.paint(window, cx);
        }
    }
}

impl IntoElement for DropdownMenu {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

// ============================================================================
// DropdownMenuTrigger
// ============================================================================

/// Trigger wrapper: lays out the caller's content, records the last child's
/// geometry in the shared state, and toggles the menu on activation.
#[derive(IntoElement)]
pub struct DropdownMenuTrigger {
    handle: MenuHandle,
    children: SmallVec<[AnyElement; 2]>,
}

impl DropdownMenuTrigger {
    pub(crate) fn new(handle: MenuHandle, children: SmallVec<[AnyElement; 2]>) -> Self {
        Self { handle, children }
    }
}

impl RenderOnce for DropdownMenuTrigger {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let handle = self.handle;
        let capture_handle = handle.clone();

        // The wrapper is a neutral anchor; geometry is measured against the
        // last child, the caller's visible trigger content. No children means
        // nothing to measure; the next layout pass retries.
        div()
            .on_children_prepainted(move |bounds, _window, _cx| {
                if let Some(child_bounds) = bounds.last().copied() {
                    capture_handle.set_trigger_bounds(rect_from_bounds(child_bounds));
                }
            })
            .id("dropdown-trigger")
            .on_click(move |_event, _window, cx| {
                handle.toggle();
                tracing::debug!(open = handle.is_open(), "dropdown trigger activated");
                cx.refresh_windows();
            })
            .children(self.children)
    }
}

// ============================================================================
// DropdownMenuContent
// ============================================================================

enum ContentEntry {
    Item(DropdownMenuItem),
    Element(AnyElement),
}

/// The positioned panel rendered below the trigger while the menu is open.
///
/// Renders an occluding full-window backdrop underneath itself: any
/// activation outside the panel's subtree lands on the backdrop and closes
/// the menu.
#[derive(IntoElement)]
pub struct DropdownMenuContent {
    align: Align,
    gap: Pixels,
    entries: Vec<ContentEntry>,
    style_override: Option<StyleOverride>,
    handle: Option<MenuHandle>,
}

impl DropdownMenuContent {
    /// Create an empty content panel with default alignment and gap.
    pub fn new() -> Self {
        Self {
            align: Align::default(),
            gap: px(DEFAULT_GAP),
            entries: Vec::new(),
            style_override: None,
            handle: None,
        }
    }

    /// Set the horizontal alignment relative to the trigger.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the gap between the trigger's bottom edge and the panel.
    pub fn gap(mut self, gap: Pixels) -> Self {
        self.gap = gap;
        self
    }

    /// Append a menu item.
    pub fn item(mut self, item: DropdownMenuItem) -> Self {
        self.entries.push(ContentEntry::Item(item));
        self
    }

    /// Append an arbitrary element.
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.entries.push(ContentEntry::Element(child.into_any_element()));
        self
    }

    /// Layer caller styling over the panel's themed defaults.
    pub fn with_style(mut self, style: impl FnOnce(Div) -> Div + 'static) -> Self {
        self.style_override = Some(Box::new(style));
        self
    }

    pub(crate) fn with_handle(mut self, handle: MenuHandle) -> Self {
        self.handle = Some(handle);
        self
    }
}

impl Default for DropdownMenuContent {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for DropdownMenuContent {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let handle = self.handle.take().unwrap_or_default();
        let theme = cx.global::<CanopyTheme>().clone();
        let viewport = window.viewport_size();
        let gap = f32::from(self.gap);

        // Clamp against the last measured panel size. A freshly opened panel
        // has no measurement yet: it is laid out transparent at the fallback
        // origin, measured below, and positioned on the next frame.
        let measured = handle.panel_size();
        let origin = measured
            .and_then(|panel_size| {
                handle
                    .recompute_placement(
                        panel_size,
                        size_from_pixels(viewport),
                        self.align,
                        gap,
                    )
                    .map(|placement| placement.panel_origin(self.align, panel_size.width))
            })
            .unwrap_or((0.0, gap));

        let mut base = div()
            .flex()
            .flex_col()
            .items_start()
            .py(px(4.0))
            .min_w(px(120.0))
            .max_w(viewport.width)
            .bg(theme.colors.elevated_surface)
            .border_1()
            .border_color(theme.colors.border)
            .rounded(px(6.0))
            .shadow_lg()
            .text_color(theme.colors.text);
        if let Some(style_override) = self.style_override.take() {
            base = style_override(base);
        }

        let panel = base
            .id("dropdown-panel")
            .occlude()
            .absolute()
            .left(px(origin.0))
            .top(px(origin.1))
            .when(measured.is_none(), |el| el.opacity(0.0))
            // Activations inside the panel's subtree must not reach the
            // backdrop.
            .on_mouse_down(MouseButton::Left, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_mouse_down(MouseButton::Right, |_, _, cx| {
                cx.stop_propagation();
            })
            .children(self.entries.drain(..).map(|entry| match entry {
                ContentEntry::Item(item) => item.with_handle(handle.clone()).into_any_element(),
                ContentEntry::Element(element) => element,
            }));

        let close_on_mouse_down = |handle: &MenuHandle| {
            let handle = handle.clone();
            move |_: &gpui::MouseDownEvent, _: &mut Window, cx: &mut App| {
                handle.close();
                cx.refresh_windows();
            }
        };

        let measure_handle = handle.clone();
        let backdrop = div()
            .on_children_prepainted(move |bounds, _window, cx| {
                if let Some(panel_bounds) = bounds.first().copied() {
                    if measure_handle.set_panel_size(size_from_pixels(panel_bounds.size)) {
                        cx.refresh_windows();
                    }
                }
            })
            .id("dropdown-backdrop")
            .occlude()
            .w(viewport.width)
            .h(viewport.height)
            .on_mouse_down(MouseButton::Left, close_on_mouse_down(&handle))
            .on_mouse_down(MouseButton::Right, close_on_mouse_down(&handle))
            .child(panel);

        // Anchor the backdrop to the window origin so panel coordinates are
        // window coordinates.
        deferred(anchored().position(point(px(0.0), px(0.0))).child(backdrop)).with_priority(1)
    }
}

// ============================================================================
// DropdownMenuItem
// ============================================================================

/// A single actionable menu row.
///
/// Activation always closes the menu first, then forwards the event to the
/// caller's handler, so handler logic reading the menu state sees it closed.
#[derive(IntoElement)]
pub struct DropdownMenuItem {
    id: ElementId,
    children: SmallVec<[AnyElement; 2]>,
    disabled: bool,
    style_override: Option<StyleOverride>,
    on_click: Option<ClickHandler>,
    handle: Option<MenuHandle>,
}

impl DropdownMenuItem {
    /// Create a new menu item with the given ID.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            children: SmallVec::new(),
            disabled: false,
            style_override: None,
            on_click: None,
            handle: None,
        }
    }

    /// Append content to the row.
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the activation handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Layer caller styling over the row's themed defaults.
    pub fn with_style(mut self, style: impl FnOnce(Div) -> Div + 'static) -> Self {
        self.style_override = Some(Box::new(style));
        self
    }

    pub(crate) fn with_handle(mut self, handle: MenuHandle) -> Self {
        self.handle = Some(handle);
        self
    }
}

impl RenderOnce for DropdownMenuItem {
    fn render(mut self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.global::<CanopyTheme>().clone();
        let handle = self.handle.take().unwrap_or_default();

        let text_color = if self.disabled { theme.colors.text_muted } else { theme.colors.text };

        let mut base = div()
            .h(px(28.0))
            .w_full()
            .px(px(8.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .rounded(px(4.0))
            .text_sm()
            .text_color(text_color);
        if let Some(style_override) = self.style_override.take() {
            base = style_override(base);
        }

        let on_click = self.on_click.take();
        base.id(self.id.clone())
            .when(!self.disabled, |el| {
                el.cursor_pointer()
                    .hover(|style| style.bg(theme.colors.element_hover))
                    .on_click(move |event, window, cx| {
                        // Close first; the handler observes the closed state.
                        handle.close_then(|| {
                            if let Some(on_click) = &on_click {
                                on_click(event, window, cx);
                            }
                        });
                        cx.refresh_windows();
                    })
            })
            .children(self.children)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_defaults() {
        let content = DropdownMenuContent::new();
        assert_eq!(content.align, Align::End);
        assert_eq!(content.gap, px(DEFAULT_GAP));
        assert!(content.handle.is_none());
        assert!(content.entries.is_empty());
    }

    #[test]
    fn test_item_builder_flags() {
        let item = DropdownMenuItem::new("rename");
        assert!(!item.disabled);
        assert!(item.on_click.is_none());

        let disabled = DropdownMenuItem::new("delete").disabled(true);
        assert!(disabled.disabled);
    }

    #[test]
    fn test_detached_item_state_defaults_closed() {
        // An item rendered without a surrounding menu gets an inert handle.
        let handle = MenuHandle::default();
        assert!(!handle.is_open());
    }
}
