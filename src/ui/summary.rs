// src/ui/summary.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, HLine, LineStyle, Plot};

use crate::analysis::{Label, PolarityBar};
use crate::state::Outcome;
use crate::ui::cloud::show_word_cloud;

fn color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

// Colors of the success / info / error banners
fn banner_colors(label: Label) -> (egui::Color32, egui::Color32) {
    match label {
        Label::Positive => (egui::Color32::from_rgb(0xd4, 0xed, 0xda), egui::Color32::from_rgb(0x15, 0x57, 0x24)),
        Label::Neutral => (egui::Color32::from_rgb(0xd1, 0xec, 0xf1), egui::Color32::from_rgb(0x0c, 0x54, 0x60)),
        Label::Negative => (egui::Color32::from_rgb(0xf8, 0xd7, 0xda), egui::Color32::from_rgb(0x72, 0x1c, 0x24)),
    }
}

fn show_banner(ui: &mut egui::Ui, text: &str, fill: egui::Color32, ink: egui::Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).color(ink));
        });
}

fn show_polarity_bar(ui: &mut egui::Ui, bar: &PolarityBar) {
    let fill = color(bar.tone.rgb());

    ui.label("Polarity Score");
    Plot::new("polarity_bar")
        .height(240.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_axes([false, true])
        .include_x(-1.0)
        .include_x(1.0)
        .include_y(bar.range.0)
        .include_y(bar.range.1)
        .show(ui, |plot_ui| {
            let bars = vec![
                Bar::new(0.0, bar.value)
                    .name("Sentiment")
                    .width(0.6)
                    .fill(fill)
            ];
            plot_ui.bar_chart(BarChart::new(bars).color(fill));
            plot_ui.hline(
                HLine::new(0.0)
                    .color(egui::Color32::BLACK)
                    .width(0.5)
                    .style(LineStyle::dashed_loose())
            );
        });
    ui.label(format!("Polarity: {:+.3}", bar.value));
}

pub fn show_outcome(ui: &mut egui::Ui, outcome: Option<&Outcome>) {
    match outcome {
        Some(Outcome::Analyzed { result, summary }) => {
            let (fill, ink) = banner_colors(result.label());
            show_banner(ui, result.label().message(), fill, ink);

            ui.add_space(12.0);
            ui.heading("📊 Sentiment Score");
            show_polarity_bar(ui, &summary.bar);

            ui.add_space(12.0);
            ui.heading("🧠 See the Mind (Word Cloud)");
            show_word_cloud(ui, &summary.cloud);
        }
        Some(Outcome::Warning(message)) => {
            show_banner(
                ui,
                message,
                egui::Color32::from_rgb(0xff, 0xf3, 0xcd),
                egui::Color32::from_rgb(0x85, 0x64, 0x04),
            );
        }
        None => {}
    }
}
