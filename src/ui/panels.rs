use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, NoticeKind};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: current screen, dataset size, greeting.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.screen().title()).strong());
        ui.separator();
        ui.label(format!("{} days loaded", state.dataset.len()));

        let name = state.user_name.trim();
        if !name.is_empty() {
            ui.separator();
            ui.label(format!("Hello, {name}!"));
        }
    });
}

// ---------------------------------------------------------------------------
// Notice modal
// ---------------------------------------------------------------------------

/// Show the open notice, if any, as a modal dialog.
pub fn notice_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = &state.notice else {
        return;
    };

    let mut ok_clicked = false;
    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui: &mut Ui| {
        ui.set_width(320.0);

        let title = RichText::new(&notice.title).heading();
        let title = match notice.kind {
            NoticeKind::Error => title.color(Color32::RED),
            NoticeKind::Info => title,
        };
        ui.label(title);
        ui.separator();
        ui.label(&notice.body);
        ui.add_space(8.0);

        ui.vertical_centered(|ui: &mut Ui| {
            if ui.button("OK").clicked() {
                ok_clicked = true;
            }
        });
    });

    if ok_clicked || response.should_close() {
        state.dismiss_notice();
    }
}
