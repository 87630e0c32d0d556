// src/analysis/analyzer.rs
use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

use super::chart::PolarityBar;
use super::cloud::{CloudGenerator, FrequencyCloud, TextMeasure, WordCloud};
use super::lexicon::LexiconClassifier;
use super::sentiment::{AnalysisResult, SentimentClassifier};
use crate::config::AppSettings;
use crate::state::{HistoryEntry, Outcome, Session};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("⚠️ Please type something to analyze.")]
    EmptyInput,
}

/// Everything drawn under a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub bar: PolarityBar,
    pub cloud: WordCloud,
}

/// Scores input text, records it in the session history and builds the visual summary.
///
/// The classifier and cloud generator are injected so the session logic can run against
/// stubs.
pub struct SessionAnalyzer {
    classifier: Box<dyn SentimentClassifier>,
    cloud: Box<dyn CloudGenerator>,
    cloud_size: (u32, u32),
}

impl SessionAnalyzer {
    pub fn new(classifier: Box<dyn SentimentClassifier>, cloud: Box<dyn CloudGenerator>) -> Self {
        Self {
            classifier,
            cloud,
            cloud_size: (600, 300),
        }
    }

    pub fn from_settings(settings: &AppSettings, measure: Arc<dyn TextMeasure>) -> Self {
        let classifier = LexiconClassifier::new().with_extra_words(&settings.lexicon.extra_words);
        let cloud = FrequencyCloud::new(settings.cloud.clone()).with_measure(measure);

        Self::new(Box::new(classifier), Box::new(cloud))
            .with_cloud_size(settings.cloud.width, settings.cloud.height)
    }

    pub fn with_cloud_size(mut self, width: u32, height: u32) -> Self {
        self.cloud_size = (width, height);
        self
    }

    pub fn analyze(&self, session: &mut Session, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        self.analyze_at(session, text, Local::now())
    }

    pub fn analyze_at(
        &self,
        session: &mut Session,
        text: &str,
        at: DateTime<Local>,
    ) -> Result<AnalysisResult, AnalyzeError> {
        if text.trim().is_empty() {
            warn!("rejected empty input");
            return Err(AnalyzeError::EmptyInput);
        }

        let result = AnalysisResult::new(self.classifier.polarity(text));
        session.text = text.to_string();
        session.history.push(HistoryEntry::new(text, &result, at));

        info!(
            label = ?result.label(),
            polarity = result.polarity(),
            history_len = session.history.len(),
            "analyzed input"
        );
        Ok(result)
    }

    pub fn render_summary(&self, text: &str, polarity: f64) -> Summary {
        let (width, height) = self.cloud_size;
        Summary {
            bar: PolarityBar::new(polarity),
            cloud: self.cloud.generate(text, width, height),
        }
    }

    /// Analyze the session's current text and store what should be displayed.
    pub fn submit(&self, session: &mut Session) {
        let text = session.text.clone();
        session.outcome = match self.analyze(session, &text) {
            Ok(result) => {
                let summary = self.render_summary(&text, result.polarity());
                Some(Outcome::Analyzed { result, summary })
            }
            Err(e) => Some(Outcome::Warning(e.to_string())),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::chart::BarTone;
    use crate::analysis::cloud::GlyphEstimate;
    use crate::analysis::sentiment::Label;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fixed(f64);

    impl SentimentClassifier for Fixed {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[derive(Clone, Default)]
    struct CountingCloud(Rc<Cell<usize>>);

    impl CloudGenerator for CountingCloud {
        fn generate(&self, _text: &str, width: u32, height: u32) -> WordCloud {
            self.0.set(self.0.get() + 1);
            WordCloud { width, height, words: Vec::new() }
        }
    }

    fn fixed(polarity: f64) -> SessionAnalyzer {
        SessionAnalyzer::new(Box::new(Fixed(polarity)), Box::new(CountingCloud::default()))
    }

    fn lexicon() -> SessionAnalyzer {
        SessionAnalyzer::new(Box::new(LexiconClassifier::new()), Box::new(FrequencyCloud::default()))
    }

    #[test]
    fn test_label_matches_sign_of_classifier_output() {
        for (polarity, label) in [(0.3, Label::Positive), (0.0, Label::Neutral), (-0.3, Label::Negative)] {
            let mut session = Session::default();
            let result = fixed(polarity).analyze(&mut session, "anything").unwrap();
            assert_eq!(result.label(), label);
            assert_eq!(result.polarity(), polarity);
        }
    }

    #[test]
    fn test_empty_input_is_rejected_without_side_effects() {
        let counter = CountingCloud::default();
        let analyzer = SessionAnalyzer::new(Box::new(Fixed(0.5)), Box::new(counter.clone()));
        let mut session = Session::default();

        assert_eq!(analyzer.analyze(&mut session, ""), Err(AnalyzeError::EmptyInput));
        assert_eq!(analyzer.analyze(&mut session, "   \n\t"), Err(AnalyzeError::EmptyInput));
        assert!(session.history.is_empty());

        session.text = "  ".to_string();
        analyzer.submit(&mut session);
        assert!(session.history.is_empty());
        assert_eq!(counter.0.get(), 0);
        assert_eq!(
            session.outcome,
            Some(Outcome::Warning("⚠️ Please type something to analyze.".to_string()))
        );
    }

    #[test]
    fn test_history_grows_by_one_per_analysis() {
        let analyzer = fixed(0.1234567);
        let mut session = Session::default();

        for n in 1..=7 {
            analyzer.analyze(&mut session, &format!("entry {}", n)).unwrap();
            assert_eq!(session.history.len(), n);
        }

        let recent = session.history.list_recent();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].text(), "entry 7");
        assert_eq!(recent[4].text(), "entry 3");
        assert_eq!(recent[0].score(), 0.123);
    }

    #[test]
    fn test_entry_records_timestamp() {
        let mut session = Session::default();
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        fixed(-0.5).analyze_at(&mut session, "meh", at).unwrap();

        let entry = session.history.list_recent()[0];
        assert_eq!(entry.timestamp(), "2024-03-09 14:05:07");
        assert_eq!(entry.label(), Label::Negative);
        assert_eq!(session.text, "meh");
    }

    #[test]
    fn test_submit_builds_summary() {
        let counter = CountingCloud::default();
        let analyzer = SessionAnalyzer::new(Box::new(Fixed(-0.2)), Box::new(counter.clone()))
            .with_cloud_size(320, 160);
        let mut session = Session::default();
        session.text = "grim news".to_string();

        analyzer.submit(&mut session);

        assert_eq!(counter.0.get(), 1);
        match &session.outcome {
            Some(Outcome::Analyzed { result, summary }) => {
                assert_eq!(result.label(), Label::Negative);
                assert_eq!(summary.bar.tone, BarTone::Negative);
                assert_eq!((summary.cloud.width, summary.cloud.height), (320, 160));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_clear_keeps_history() {
        let analyzer = fixed(0.4);
        let mut session = Session::default();
        session.text = "sunny".to_string();
        analyzer.submit(&mut session);
        analyzer.analyze(&mut session, "again").unwrap();

        session.clear();

        assert!(session.text.is_empty());
        assert!(session.outcome.is_none());
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn test_example_sentences() {
        let analyzer = lexicon();
        let mut session = Session::default();

        let love = analyzer.analyze(&mut session, "I love this app!").unwrap();
        assert!(love.polarity() > 0.0);
        assert_eq!(love.label(), Label::Positive);
        assert_eq!(session.history.len(), 1);

        let table = analyzer.analyze(&mut session, "This is a table.").unwrap();
        assert_eq!(table.polarity(), 0.0);
        assert_eq!(table.label(), Label::Neutral);

        let line = analyzer.analyze(&mut session, "I hate waiting in line.").unwrap();
        assert!(line.polarity() < 0.0);
        assert_eq!(line.label(), Label::Negative);

        assert_eq!(session.history.len(), 3);
    }

    #[test]
    fn test_from_settings_uses_configured_cloud_and_measure() {
        let mut settings = AppSettings::default();
        settings.cloud.width = 320;
        settings.cloud.height = 160;
        let analyzer = SessionAnalyzer::from_settings(&settings, Arc::new(GlyphEstimate));

        let summary = analyzer.render_summary("Cozy cozy cafe", 0.4);

        assert_eq!((summary.cloud.width, summary.cloud.height), (320, 160));
        let top = &summary.cloud.words[0];
        assert_eq!(top.text, "Cozy");
        let (along, _) = GlyphEstimate.measure(&top.text, top.font_size);
        assert_eq!(top.width.max(top.height), along);
    }

    #[test]
    fn test_summary_from_real_generators() {
        let summary = lexicon().render_summary("Great coffee, great people, great mornings.", 0.8);

        assert_eq!(summary.bar.tone, BarTone::Positive);
        assert_eq!(summary.cloud.words[0].text, "great");
    }
}
