// src/analysis/cloud.rs
use std::collections::{HashMap, HashSet};
use std::f32::consts::TAU;
use std::sync::{Arc, LazyLock};

use rand::prelude::*;
use regex::Regex;
use serde::{Serialize, Deserialize};
use tracing::debug;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").unwrap());

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "can't", "cannot", "com", "could",
        "couldn't", "did", "didn't", "do", "does", "doesn't", "doing", "don't", "down",
        "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had",
        "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll",
        "he's", "hence", "her", "here", "here's", "hers", "herself", "him", "himself", "his",
        "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've", "if", "in",
        "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
        "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
        "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
        "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd",
        "she'll", "she's", "should", "shouldn't", "since", "so", "some", "such", "than",
        "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
        "there's", "therefore", "these", "they", "they'd", "they'll", "they're", "they've",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
        "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what",
        "what's", "when", "when's", "where", "where's", "which", "while", "who", "who's",
        "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
        "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

// Glyph metrics used when no real font is available, in em
pub const CHAR_WIDTH: f32 = 0.6;
pub const LINE_HEIGHT: f32 = 1.2;

// Occupancy grid resolution in pixels
const CELL: f32 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudSettings {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: f32,
    pub relative_scaling: f32,
    pub prefer_horizontal: f32,
    pub margin: f32,
    pub seed: u64,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            max_words: 200,
            min_font_size: 4.0,
            relative_scaling: 0.5,
            prefer_horizontal: 0.9,
            margin: 2.0,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub frequency: f64,
    pub font_size: f32,
    pub x: f32,              // top-left of the word box
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vertical: bool,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Turns raw text into a laid-out word cloud for a canvas of the given size.
pub trait CloudGenerator {
    fn generate(&self, text: &str, width: u32, height: u32) -> WordCloud;
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

/// Relative word frequencies, most frequent first, normalized so the top word is 1.0.
///
/// Words are grouped case-insensitively and shown with their most common spelling.
/// Plurals fold into a singular form that also appears in the text.
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<(String, f64)> {
    // lowercase key -> spellings with counts, in first-seen order
    let mut spellings: HashMap<String, Vec<(String, usize)>> = HashMap::new();

    for m in WORD_REGEX.find_iter(text) {
        let mut word = m.as_str();
        if is_stopword(word) {
            continue;
        }
        if let Some(stripped) = word.strip_suffix("'s").or_else(|| word.strip_suffix("'S")) {
            word = stripped;
        }
        if word.is_empty() || word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        let forms = spellings.entry(word.to_lowercase()).or_default();
        match forms.iter_mut().find(|(form, _)| form == word) {
            Some((_, count)) => *count += 1,
            None => forms.push((word.to_string(), 1)),
        }
    }

    let keys: Vec<String> = spellings.keys().cloned().collect();
    for key in keys {
        let Some(singular) = key.strip_suffix('s') else { continue };
        if key.ends_with("ss") || !spellings.contains_key(singular) {
            continue;
        }
        if let Some(plural) = spellings.remove(&key) {
            let extra: usize = plural.iter().map(|(_, count)| count).sum();
            if let Some(first) = spellings.get_mut(singular).and_then(|forms| forms.first_mut()) {
                first.1 += extra;
            }
        }
    }

    let mut counted: Vec<(String, String, usize)> = spellings.into_iter()
        .map(|(key, forms)| {
            let total = forms.iter().map(|(_, count)| count).sum();
            let mut display: Option<&(String, usize)> = None;
            for form in &forms {
                if display.map_or(true, |best| form.1 > best.1) {
                    display = Some(form);
                }
            }
            let display = display.map(|(form, _)| form.clone()).unwrap_or_else(|| key.clone());
            (key, display, total)
        })
        .collect();

    counted.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    counted.truncate(max_words);

    let max = match counted.first() {
        Some((_, _, count)) => *count as f64,
        None => return Vec::new(),
    };

    counted.into_iter()
        .map(|(_, display, count)| (display, count as f64 / max))
        .collect()
}

/// Pixel extent of one line of text, as `(along, across)` its baseline.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32);
}

/// Fixed per-character estimate, for layouts computed without a font.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphEstimate;

impl TextMeasure for GlyphEstimate {
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32) {
        (text.chars().count() as f32 * font_size * CHAR_WIDTH, font_size * LINE_HEIGHT)
    }
}

fn oriented((along, across): (f32, f32), vertical: bool) -> (f32, f32) {
    if vertical {
        (across, along)
    } else {
        (along, across)
    }
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

/// Occupied cells of the canvas plus a summed-area table for O(1) box queries.
struct Occupancy {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    integral: Vec<u32>,
}

impl Occupancy {
    fn new(width: u32, height: u32) -> Self {
        let cols = (width as f32 / CELL).floor() as usize;
        let rows = (height as f32 / CELL).floor() as usize;
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
            integral: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    fn rebuild(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.cells[r * self.cols + c] as u32;
                self.integral[(r + 1) * stride + c + 1] = self.integral[r * stride + c + 1] + row_sum;
            }
        }
    }

    fn is_free(&self, col: usize, row: usize, span_cols: usize, span_rows: usize) -> bool {
        let stride = self.cols + 1;
        let (c1, r1) = (col + span_cols, row + span_rows);
        let sum = self.integral[r1 * stride + c1] + self.integral[row * stride + col]
            - self.integral[row * stride + c1] - self.integral[r1 * stride + col];
        sum == 0
    }

    fn mark(&mut self, col: usize, row: usize, span_cols: usize, span_rows: usize) {
        for r in row..row + span_rows {
            for c in col..col + span_cols {
                self.cells[r * self.cols + c] = true;
            }
        }
        self.rebuild();
    }

    /// Walk an elliptical Archimedean spiral out from the center and return the first free
    /// top-left cell for a box of the given cell span.
    fn find_spot(&self, span_cols: usize, span_rows: usize) -> Option<(usize, usize)> {
        if span_cols == 0 || span_rows == 0 || span_cols > self.cols || span_rows > self.rows {
            return None;
        }

        let center = (self.cols as f32 / 2.0, self.rows as f32 / 2.0);
        let aspect = self.cols as f32 / self.rows as f32;
        let max_radius = (center.0 / aspect).hypot(center.1) + 1.0;

        let mut theta = 0.0_f32;
        loop {
            let radius = theta / TAU;
            if radius > max_radius {
                return None;
            }

            let px = center.0 + radius * theta.cos() * aspect - span_cols as f32 / 2.0;
            let py = center.1 + radius * theta.sin() - span_rows as f32 / 2.0;
            let (col, row) = (px.round(), py.round());

            if col >= 0.0 && row >= 0.0 {
                let (col, row) = (col as usize, row as usize);
                if col + span_cols <= self.cols
                    && row + span_rows <= self.rows
                    && self.is_free(col, row, span_cols, span_rows)
                {
                    return Some((col, row));
                }
            }

            theta += 1.0 / radius.max(1.0);
        }
    }
}

/// Frequency-weighted cloud laid out on a spiral, largest words first.
///
/// Word boxes come from the injected [`TextMeasure`], so the layout only holds for text drawn
/// with the same font the measure uses.
#[derive(Clone)]
pub struct FrequencyCloud {
    settings: CloudSettings,
    measure: Arc<dyn TextMeasure>,
}

impl Default for FrequencyCloud {
    fn default() -> Self {
        Self::new(CloudSettings::default())
    }
}

impl FrequencyCloud {
    pub fn new(settings: CloudSettings) -> Self {
        Self {
            settings,
            measure: Arc::new(GlyphEstimate),
        }
    }

    pub fn with_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self
    }

    fn box_size(&self, word: &str, font_size: f32, vertical: bool) -> (f32, f32) {
        oriented(self.measure.measure(word, font_size), vertical)
    }

    fn initial_font_size(&self, word: &str, width: f32, height: f32) -> f32 {
        // Extents grow linearly with the font size
        const REFERENCE: f32 = 100.0;
        let margin = self.settings.margin;
        let (along, across) = self.measure.measure(word, REFERENCE);
        let fit_width = (width - 2.0 * margin) * REFERENCE / along.max(1.0);
        let fit_height = (height - 2.0 * margin) * REFERENCE / across.max(1.0) * 0.6;
        fit_width.min(fit_height).floor()
    }
}

impl CloudGenerator for FrequencyCloud {
    fn generate(&self, text: &str, width: u32, height: u32) -> WordCloud {
        let settings = &self.settings;
        let mut cloud = WordCloud { width, height, words: Vec::new() };

        let frequencies = word_frequencies(text, settings.max_words);
        let Some((first_word, _)) = frequencies.first() else {
            return cloud;
        };

        let mut rng = StdRng::seed_from_u64(settings.seed);
        let mut grid = Occupancy::new(width, height);
        let margin = settings.margin;
        let mut font_size = self.initial_font_size(first_word, width as f32, height as f32);
        let mut last_frequency = 1.0;

        for (index, (word, frequency)) in frequencies.iter().enumerate() {
            if index > 0 {
                let scaling = settings.relative_scaling as f64;
                let factor = scaling * (frequency / last_frequency) + (1.0 - scaling);
                font_size = (factor * font_size as f64).round() as f32;
            }

            let mut vertical = rng.gen::<f32>() > settings.prefer_horizontal;
            let mut flipped = false;
            let spot = loop {
                if font_size < settings.min_font_size {
                    break None;
                }

                let (box_width, box_height) = self.box_size(word, font_size, vertical);
                let span_cols = ((box_width + 2.0 * margin) / CELL).ceil() as usize;
                let span_rows = ((box_height + 2.0 * margin) / CELL).ceil() as usize;

                if let Some((col, row)) = grid.find_spot(span_cols, span_rows) {
                    grid.mark(col, row, span_cols, span_rows);
                    break Some((col as f32 * CELL + margin, row as f32 * CELL + margin, box_width, box_height));
                }

                if settings.prefer_horizontal < 1.0 && !flipped {
                    vertical = !vertical;
                    flipped = true;
                    continue;
                }

                font_size -= 1.0;
                flipped = false;
                vertical = rng.gen::<f32>() > settings.prefer_horizontal;
            };

            // Nothing smaller fits either, so the rest is dropped
            let Some((x, y, box_width, box_height)) = spot else {
                break;
            };

            cloud.words.push(PlacedWord {
                text: word.clone(),
                frequency: *frequency,
                font_size,
                x,
                y,
                width: box_width,
                height: box_height,
                vertical,
                color: hsl_to_rgb(rng.gen_range(0.0..360.0), 0.8, 0.5),
            });
            last_frequency = *frequency;
        }

        debug!(
            placed = cloud.words.len(),
            dropped = frequencies.len() - cloud.words.len(),
            "word cloud laid out"
        );
        cloud
    }
}
