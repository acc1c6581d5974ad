//! Dropdown-menu widgets and theming for GPUI applications.

pub mod dropdown_menu;
pub mod theme;

pub use canopy_core::{Align, MenuHandle};
pub use dropdown_menu::{
    ClickHandler, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger,
    StyleOverride,
};
pub use theme::{CanopyTheme, ThemeColors};
