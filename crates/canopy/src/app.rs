//! Gallery root component demonstrating the dropdown menu widgets.

use canopy_core::placement::Align;
use canopy_ui::{CanopyTheme, DropdownMenu, DropdownMenuContent, DropdownMenuItem};
use gpui::{
    div, prelude::*, px, Context, CursorStyle, IntoElement, Render, SharedString, Window,
};

/// Root component: a toolbar of dropdown menus over a status line.
pub struct Gallery {
    last_action: Option<SharedString>,
}

impl Gallery {
    /// Create a new gallery.
    pub fn new() -> Self {
        Self { last_action: None }
    }

    fn action_item(
        &self,
        id: &'static str,
        label: &'static str,
        cx: &Context<Self>,
    ) -> DropdownMenuItem {
        DropdownMenuItem::new(id).child(label).on_click(cx.listener(
            move |this, _event, _window, cx| {
                this.last_action = Some(label.into());
                cx.notify();
            },
        ))
    }

    fn menu(
        &self,
        id: &'static str,
        label: &'static str,
        align: Align,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.global::<CanopyTheme>().clone();

        DropdownMenu::new(id)
            .trigger(
                div()
                    .px(px(12.0))
                    .py(px(6.0))
                    .rounded(px(4.0))
                    .bg(theme.colors.surface)
                    .border_1()
                    .border_color(theme.colors.border)
                    .cursor(CursorStyle::PointingHand)
                    .hover(|style| style.bg(theme.colors.element_hover))
                    .child(label),
            )
            .content(
                DropdownMenuContent::new()
                    .align(align)
                    .gap(px(6.0))
                    .item(self.action_item("rename", "Rename…", cx))
                    .item(self.action_item("duplicate", "Duplicate", cx))
                    .item(DropdownMenuItem::new("delete").child("Delete").disabled(true)),
            )
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<CanopyTheme>().clone();
        let colors = &theme.colors;

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(colors.background)
            .text_color(colors.text)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .p(px(12.0))
                    .border_b_1()
                    .border_color(colors.border)
                    .child(self.menu("menu-start", "Align start", Align::Start, cx))
                    .child(self.menu("menu-center", "Align center", Align::Center, cx))
                    .child(self.menu("menu-end", "Align end", Align::End, cx)),
            )
            .child(
                div().flex().flex_1().items_center().justify_center().text_color(colors.text_muted).child(
                    match &self.last_action {
                        Some(action) => format!("Last action: {action}"),
                        None => "Activate a menu item".to_string(),
                    },
                ),
            )
    }
}
