//! Attributed text: styled runs plus paragraph alignment.

use smallvec::SmallVec;

use crate::types::{Color, Font, TextAlignment};

/// Attributes applied to a run of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttributes {
    pub font: Font,
    pub color: Color,
    /// Link target, if the run is an active link.
    pub link: Option<String>,
}

impl TextAttributes {
    pub fn new(font: Font, color: Color) -> Self {
        Self { font, color, link: None }
    }
}

/// A contiguous run of text sharing the same attributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    pub text: String,
    pub attributes: TextAttributes,
}

/// Styled text ready for measurement and drawing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributedText {
    runs: SmallVec<[TextRun; 4]>,
    pub alignment: TextAlignment,
}

impl AttributedText {
    /// Styled text with a single run.
    pub fn plain(text: impl Into<String>, font: Font, color: Color, alignment: TextAlignment) -> Self {
        let mut result = Self { runs: SmallVec::new(), alignment };
        result.push(text, TextAttributes::new(font, color));
        result
    }

    pub fn empty(alignment: TextAlignment) -> Self {
        Self { runs: SmallVec::new(), alignment }
    }

    /// Append a run, merging it into the previous one when attributes match.
    pub fn push(&mut self, text: impl Into<String>, attributes: TextAttributes) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.attributes == attributes {
                last.text.push_str(&text);
                return;
            }
        }
        self.runs.push(TextRun { text, attributes });
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// The unstyled string.
    pub fn string(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Largest font size among the runs, if any.
    pub fn max_font_size(&self) -> Option<f64> {
        self.runs
            .iter()
            .map(|run| run.attributes.font.size)
            .fold(None, |acc, size| Some(acc.map_or(size, |a: f64| a.max(size))))
    }
}
