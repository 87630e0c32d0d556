// src/ui/header.rs
use std::f64::consts::TAU;
use std::time::Duration;

use eframe::egui;

// One full bob of the brain icon every 3 seconds
const FLOAT_PERIOD: f64 = 3.0;
const FLOAT_AMPLITUDE: f32 = 5.0;

pub fn show_header(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    let offset = (time * TAU / FLOAT_PERIOD).sin() as f32 * FLOAT_AMPLITUDE;

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 70.0),
        egui::Sense::hover()
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, offset),
        egui::Align2::CENTER_CENTER,
        "🧠",
        egui::FontId::proportional(50.0),
        ui.visuals().text_color(),
    );
    ui.ctx().request_repaint_after(Duration::from_millis(33));

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Sentiment Analyzer AI").size(32.0).strong());
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("Analyze how someone ");
            ui.strong("feels");
            ui.label(" about anything — instantly!");
        });
    });
    ui.add_space(16.0);
}
