// src/ui/history.rs
use eframe::egui;
use crate::state::SessionHistory;

pub fn show_recent_entries(ui: &mut egui::Ui, history: &SessionHistory) {
    if history.is_empty() {
        return;
    }

    ui.add_space(16.0);
    ui.heading("🕓 Recent Entries");
    ui.add_space(4.0);

    for entry in history.list_recent() {
        ui.push_id(entry.id(), |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(0xf9, 0xf9, 0xf9))
                .rounding(10.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(entry.timestamp());
                        ui.label("—");
                        ui.label(entry.label().icon());
                        ui.weak(format!("{:+.3}", entry.score()));
                    });
                    ui.label(egui::RichText::new(entry.text()).italics());
                });
        });
        ui.add_space(6.0);
    }
}
