// src/analysis/sentiment.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    /// Sign rule: exact zero is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Label::Positive
        } else if polarity < 0.0 {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Label::Positive => "🟢",
            Label::Neutral => "🟡",
            Label::Negative => "🔴",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Label::Positive => "😊 Sentiment: wooww..You entered a Positive Sentence",
            Label::Neutral => "😐 Sentiment: Hoo Its a Neutral Sentence",
            Label::Negative => "😢 Sentiment: OMG Its a Negative Sentence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    polarity: f64,
    label: Label,
}

impl AnalysisResult {
    pub fn new(polarity: f64) -> Self {
        // NaN/inf from a classifier counts as no signal
        let polarity = if polarity.is_finite() {
            polarity.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        Self {
            polarity,
            label: Label::from_polarity(polarity),
        }
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

/// Scores text into a polarity in [-1, 1].
pub trait SentimentClassifier {
    fn polarity(&self, text: &str) -> f64;
}

/// Round to 3 decimals, the precision history entries are stored at.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
