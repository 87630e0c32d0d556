// src/ui/input.rs
use eframe::egui;
use crate::state::Session;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Analyze,
    Clear,
}

fn action_button(label: &str, fill: egui::Color32) -> impl egui::Widget {
    egui::Button::new(egui::RichText::new(label).size(16.0).color(egui::Color32::WHITE))
        .fill(fill)
        .rounding(12.0)
        .min_size(egui::vec2(140.0, 36.0))
}

pub fn show_input(ui: &mut egui::Ui, session: &mut Session) -> Option<InputAction> {
    let mut action = None;

    ui.label("💬 Enter your thoughts here:");
    let response = ui.add_sized(
        [ui.available_width(), 150.0],
        egui::TextEdit::multiline(&mut session.text)
            .hint_text("Type something like 'I love this app!'")
    );
    if response.changed() {
        session.text_edited();
    }
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        if columns[0].add(action_button("🔍 Analyze", egui::Color32::from_rgb(0x6c, 0x5c, 0xe7))).clicked() {
            action = Some(InputAction::Analyze);
        }
        if columns[1].add(action_button("🧹 Clear Text", egui::Color32::from_rgb(0xd6, 0x30, 0x31))).clicked() {
            action = Some(InputAction::Clear);
        }
    });
    ui.add_space(12.0);

    action
}
