//! Core types and utilities for the Canopy dropdown-menu widgets.
//!
//! This crate holds everything that does not need a window:
//!
//! - **placement**: viewport-relative positioning math for popup panels
//! - **menu**: the shared open/closed state machine behind a menu instance
//! - **error**: error handling for configuration and window setup
//! - **logging**: structured logging setup
//! - **config**: environment-driven application configuration

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod placement;

pub use config::{AppConfig, ThemeVariant};
pub use error::CanopyError;
pub use menu::{MenuHandle, MenuState};
pub use placement::{compute_placement, Align, Placement, Rect, Size, DEFAULT_GAP};
