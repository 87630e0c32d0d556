// src/ui/rating.rs
use eframe::egui;
use crate::state::Session;

pub fn show_rating(ui: &mut egui::Ui, session: &mut Session) {
    ui.add_space(16.0);
    ui.heading("⭐ Rate this App");
    ui.add(egui::Slider::new(&mut session.rating, 1..=5).text("How do you like the app?"));
    ui.label(format!("Thanks for rating us {} ⭐", session.rating));
}
