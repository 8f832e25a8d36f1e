//! Compiled-in application configuration.
//!
//! The program reads no files or environment variables for its settings;
//! everything tunable is collected here so the rest of the code never
//! hardcodes window geometry or titles.

/// Strongly typed application configuration, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Native window title.
    pub window_title: String,

    /// Initial inner window size in points.
    pub inner_size: [f32; 2],

    /// Smallest inner window size in points.
    pub min_inner_size: [f32; 2],

    /// Width of the home screen menu buttons.
    pub menu_button_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "🌍 AirAware Alert".to_string(),
            inner_size: [800.0, 600.0],
            min_inner_size: [480.0, 400.0],
            menu_button_width: 260.0,
        }
    }
}

impl AppConfig {
    /// Log the active configuration once at startup.
    pub fn log_config(&self) {
        log::info!("Window title: {}", self.window_title);
        log::info!(
            "Window size: {}x{} (min {}x{})",
            self.inner_size[0],
            self.inner_size[1],
            self.min_inner_size[0],
            self.min_inner_size[1]
        );
    }
}
