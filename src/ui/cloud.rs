// src/ui/cloud.rs
use std::f32::consts::FRAC_PI_2;

use eframe::egui;
use eframe::egui::epaint::TextShape;

use crate::analysis::cloud::TextMeasure;
use crate::analysis::WordCloud;

/// Measures words with the fonts the cloud is painted with.
///
/// Only usable once egui has run a frame, which is always true by the time a user can press
/// Analyze.
pub struct GalleyMeasure {
    ctx: egui::Context,
}

impl GalleyMeasure {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for GalleyMeasure {
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32) {
        let size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), egui::FontId::proportional(font_size), egui::Color32::BLACK)
                .size()
        });
        (size.x, size.y)
    }
}

/// Font size that keeps a galley of length `along` inside a slot of length `room`.
fn fitted_font_size(font_size: f32, along: f32, room: f32) -> f32 {
    if along > room && along > 0.0 {
        font_size * room / along
    } else {
        font_size
    }
}

pub fn show_word_cloud(ui: &mut egui::Ui, cloud: &WordCloud) {
    if cloud.is_empty() {
        ui.weak("Nothing to draw: the text only has stopwords, numbers or one-letter words.");
        return;
    }

    // Shrink to the panel, never enlarge
    let scale = (ui.available_width() / cloud.width as f32).min(1.0);
    let size = egui::vec2(cloud.width as f32, cloud.height as f32) * scale;
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

    for word in &cloud.words {
        let [r, g, b] = word.color;
        let color = egui::Color32::from_rgb(r, g, b);
        let slot = egui::Rect::from_min_size(
            origin + egui::vec2(word.x, word.y) * scale,
            egui::vec2(word.width, word.height) * scale,
        );

        let font_size = word.font_size * scale;
        let mut galley = painter.layout_no_wrap(word.text.clone(), egui::FontId::proportional(font_size), color);
        let room = if word.vertical { slot.height() } else { slot.width() };
        let fitted = fitted_font_size(font_size, galley.size().x, room);
        if fitted < font_size {
            galley = painter.layout_no_wrap(word.text.clone(), egui::FontId::proportional(fitted), color);
        }

        if word.vertical {
            // Rotated a quarter turn counter-clockwise around its top-left corner,
            // so the anchor sits at the bottom-left of the slot
            let text_size = galley.size();
            let anchor = egui::pos2(
                slot.left() + (slot.width() - text_size.y) / 2.0,
                slot.bottom() - (slot.height() - text_size.x) / 2.0,
            );
            let mut shape = TextShape::new(anchor, galley);
            shape.angle = -FRAC_PI_2;
            painter.add(shape);
        } else {
            let pos = slot.center() - galley.size() / 2.0;
            painter.galley(pos, galley);
        }
    }
}
