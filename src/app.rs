use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, screens};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirAwareApp {
    pub state: AppState,
    pub config: AppConfig,
}

impl AirAwareApp {
    pub fn new(state: AppState, config: AppConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for AirAwareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: active screen ----
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| screens::show(ui, &mut self.state, &self.config))
            .inner;

        // ---- Modal notice on top ----
        panels::notice_modal(ctx, &mut self.state);

        if let Some(action) = action {
            self.state.dispatch(action);
        }
        if self.state.nav.has_exited() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
