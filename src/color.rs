use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::AqiLevel;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// AQI level backgrounds
// ---------------------------------------------------------------------------

/// Pastel background for the health-tip panel.
pub fn level_background(level: AqiLevel) -> Color32 {
    match level {
        AqiLevel::Good => Color32::from_rgb(0xd4, 0xed, 0xda),
        AqiLevel::Moderate => Color32::from_rgb(0xff, 0xf3, 0xcd),
        AqiLevel::UnhealthyForSensitive => Color32::from_rgb(0xff, 0xee, 0xba),
        AqiLevel::Unhealthy => Color32::from_rgb(0xf8, 0xd7, 0xda),
        AqiLevel::VeryUnhealthy => Color32::from_rgb(0xf5, 0xc6, 0xcb),
        AqiLevel::Hazardous => Color32::from_rgb(0xe2, 0xe3, 0xe5),
    }
}
