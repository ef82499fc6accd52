//! Text measurement for layout.
//!
//! The engine only needs the natural size of styled text under a size
//! constraint. Hosts with a real shaping stack implement [`TextMeasurer`];
//! [`EstimatingMeasurer`] is a character-width approximation good enough for
//! headless layout and tests.

use alertkit_core::{AttributedText, FontWeight, Size};

/// Measures styled text.
pub trait TextMeasurer {
    /// Natural size of `text` when wrapped to `constraint.width` and clipped
    /// to `constraint.height`. Either component may be infinite; a zero width
    /// is a real bound.
    fn measure(&self, text: &AttributedText, constraint: Size) -> Size;
}

impl<F> TextMeasurer for F
where
    F: Fn(&AttributedText, Size) -> Size,
{
    fn measure(&self, text: &AttributedText, constraint: Size) -> Size {
        self(text, constraint)
    }
}

/// Approximate measurement from average glyph widths.
#[derive(Debug, Clone, Copy)]
pub struct EstimatingMeasurer {
    /// Line height as a multiplier of the largest font size
    pub line_height: f64,
    /// Average glyph width as a fraction of the font size (regular weight)
    pub char_width_ratio: f64,
}

impl Default for EstimatingMeasurer {
    fn default() -> Self {
        Self {
            line_height: 1.2,
            char_width_ratio: 0.55,
        }
    }
}

impl EstimatingMeasurer {
    fn char_width(&self, size: f64, weight: FontWeight) -> f64 {
        let boldness = match weight {
            FontWeight::Regular => 1.0,
            FontWeight::Medium => 1.03,
            FontWeight::Semibold => 1.06,
            FontWeight::Bold => 1.1,
        };
        size * self.char_width_ratio * boldness
    }
}

/// Greedy word-wrapping line builder.
struct LineBuilder {
    max_width: f64,
    lines: Vec<f64>,
    current: f64,
    line_started: bool,
    pending_space: f64,
    word: f64,
    in_word: bool,
}

impl LineBuilder {
    fn new(max_width: f64) -> Self {
        Self {
            max_width,
            lines: Vec::new(),
            current: 0.0,
            line_started: false,
            pending_space: 0.0,
            word: 0.0,
            in_word: false,
        }
    }

    fn push_char(&mut self, width: f64) {
        self.word += width;
        self.in_word = true;
    }

    fn finish_word(&mut self) {
        if !self.in_word {
            return;
        }
        if !self.line_started {
            self.current = self.word;
            self.line_started = true;
        } else if self.current + self.pending_space + self.word <= self.max_width {
            self.current += self.pending_space + self.word;
        } else {
            self.lines.push(self.current);
            self.current = self.word;
        }
        self.word = 0.0;
        self.in_word = false;
        self.pending_space = 0.0;
    }

    fn space(&mut self, width: f64) {
        self.finish_word();
        if self.line_started {
            self.pending_space += width;
        }
    }

    fn break_line(&mut self) {
        self.finish_word();
        self.lines.push(self.current);
        self.current = 0.0;
        self.line_started = false;
        self.pending_space = 0.0;
    }

    fn finish(mut self) -> Vec<f64> {
        self.finish_word();
        if self.line_started {
            self.lines.push(self.current);
        }
        self.lines
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure(&self, text: &AttributedText, constraint: Size) -> Size {
        let Some(font_size) = text.max_font_size() else {
            return Size::ZERO;
        };
        let line_height = font_size * self.line_height;
        let max_width = if constraint.width.is_finite() {
            constraint.width.max(0.0)
        } else {
            f64::INFINITY
        };

        let mut builder = LineBuilder::new(max_width);
        for run in text.runs() {
            let char_width = self.char_width(run.attributes.font.size, run.attributes.font.weight);
            for c in run.text.chars() {
                match c {
                    '\n' => builder.break_line(),
                    c if c.is_whitespace() => builder.space(char_width),
                    _ => builder.push_char(char_width),
                }
            }
        }
        let lines = builder.finish();

        let mut line_count = lines.len();
        if constraint.height.is_finite() {
            let fitting = (constraint.height / line_height).floor().max(1.0) as usize;
            line_count = line_count.min(fitting);
        }

        let widest = lines.iter().copied().fold(0.0_f64, f64::max);
        Size::new(widest.min(max_width), line_count as f64 * line_height)
    }
}
