//! Canopy - dropdown menu gallery built with GPUI.

mod app;

use app::Gallery;
use canopy_core::config::AppConfig;
use canopy_core::logging::{init_logging, log_dir, LogConfig};
use canopy_ui::CanopyTheme;
use gpui::{
    px, size, App, AppContext, Application, Bounds, Size, WindowBounds, WindowOptions,
};

fn main() {
    // Bad configuration must not keep the gallery from starting.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}. Falling back to defaults.");
            AppConfig::default()
        }
    };

    let mut log_config = LogConfig::new(log_dir());
    if let Some(filter) = config.log_filter.clone() {
        log_config = log_config.with_filter(filter);
    }
    let _logging_guard = init_logging(log_config);

    tracing::info!(theme = ?config.theme, "Starting Canopy gallery");

    Application::new().run(move |cx: &mut App| {
        cx.set_global(CanopyTheme::from_variant(config.theme));

        // 1000x700 centered on the primary display
        let window_size = size(px(1000.0), px(700.0));
        let bounds = Bounds::centered(None, window_size, cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(Size { width: px(400.0), height: px(300.0) }),
            focus: true,
            show: true,
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            // Handle window close manually to avoid the Windows close-sequence
            // race between WM_ACTIVATE messages and window destruction.
            window.on_window_should_close(cx, |window, cx| {
                window.remove_window();
                cx.quit();
                false
            });

            cx.new(|_cx| Gallery::new())
        })
        .expect("Failed to open window");

        cx.activate(true);
    });
}
