// src/app.rs
use std::sync::Arc;

use eframe::egui;

use crate::analysis::SessionAnalyzer;
use crate::config::AppSettings;
use crate::state::Session;
use crate::ui::cloud::GalleyMeasure;
use crate::ui::input::InputAction;

pub struct SentimentApp {
    session: Session,
    analyzer: SessionAnalyzer,
}

impl SentimentApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &AppSettings) -> Self {
        let measure = Arc::new(GalleyMeasure::new(cc.egui_ctx.clone()));
        Self {
            session: Session::new(settings.rating.default),
            analyzer: SessionAnalyzer::from_settings(settings, measure),
        }
    }

    fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Analyze => self.analyzer.submit(&mut self.session),
            InputAction::Clear => self.session.clear(),
        }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    crate::ui::header::show_header(ui);

                    if let Some(action) = crate::ui::input::show_input(ui, &mut self.session) {
                        self.handle(action);
                    }

                    crate::ui::summary::show_outcome(ui, self.session.outcome.as_ref());
                    crate::ui::rating::show_rating(ui, &mut self.session);
                    crate::ui::history::show_recent_entries(ui, &self.session.history);
                });
        });
    }
}
