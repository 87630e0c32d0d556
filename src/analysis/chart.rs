// src/analysis/chart.rs
pub const POLARITY_RANGE: (f64, f64) = (-1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Positive,
    Negative,
    Zero,
}

impl BarTone {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            BarTone::Positive => [0, 128, 0],   // green
            BarTone::Negative => [255, 0, 0],   // red
            BarTone::Zero => [128, 128, 128],   // gray
        }
    }
}

/// Single-bar chart of a polarity score on a fixed [-1, 1] axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityBar {
    pub value: f64,
    pub range: (f64, f64),
    pub tone: BarTone,
}

impl PolarityBar {
    pub fn new(polarity: f64) -> Self {
        let tone = if polarity > 0.0 {
            BarTone::Positive
        } else if polarity < 0.0 {
            BarTone::Negative
        } else {
            BarTone::Zero
        };

        Self {
            value: polarity.clamp(POLARITY_RANGE.0, POLARITY_RANGE.1),
            range: POLARITY_RANGE,
            tone,
        }
    }
}
