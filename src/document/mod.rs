mod length;

pub use length::{EMU_PER_CM, EMU_PER_PT, Length};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocStyleError, Result};

/// A fully loaded rich-text document, as exposed by the document-object model.
///
/// Parsing the container format is the converter's job; the engine only requires
/// a successfully constructed value. Paragraphs and sections keep document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Page sections. May be empty for fragments that never defined page geometry.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    /// Load a document from its JSON interchange form.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse as a
    /// document model.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DocStyleError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DocStyleError::DocumentParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Page geometry of one document section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub top_margin: Length,
    pub bottom_margin: Length,
    pub left_margin: Length,
    pub right_margin: Length,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,

    #[serde(default)]
    pub format: ParagraphFormat,

    /// Named style reference, usable as a font fallback only when its kind is
    /// [`StyleKind::Paragraph`].
    #[serde(default)]
    pub style: Option<Style>,
}

impl Paragraph {
    /// Full paragraph text, the concatenation of all run texts in order.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// The paragraph style, if one is attached and declared as a paragraph style.
    #[must_use]
    pub fn paragraph_style(&self) -> Option<&Style> {
        self.style
            .as_ref()
            .filter(|s| s.kind == StyleKind::Paragraph)
    }
}

/// Paragraph-level layout attributes. Absent values mean "inherited elsewhere",
/// which the checkers treat as a first-class condition, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphFormat {
    #[serde(default)]
    pub first_line_indent: Option<Length>,

    #[serde(default)]
    pub line_spacing_rule: Option<LineSpacingRule>,

    /// Numeric multiplier, present only for multiple-based rules.
    #[serde(default)]
    pub line_spacing: Option<f64>,
}

/// One contiguous run of identically formatted text inside a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub font: FontProperties,
}

/// Explicit font attributes of a run or style. `None` means "not set here",
/// i.e. inherited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontProperties {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub size: Option<Length>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub kind: StyleKind,

    #[serde(default)]
    pub font: FontProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    Paragraph,
    Character,
    Table,
    Numbering,
}

/// Line-spacing rule of a paragraph, mirroring the rule vocabulary of
/// word-processing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSpacingRule {
    Single,
    OnePointFive,
    Double,
    AtLeast,
    Exactly,
    Multiple,
}

impl LineSpacingRule {
    /// Human-readable name used in issue messages. Total over the enum, so no
    /// raw-value fallback is needed.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::OnePointFive => "1.5 lines",
            Self::Double => "double",
            Self::AtLeast => "at least",
            Self::Exactly => "exactly",
            Self::Multiple => "multiple",
        }
    }

    /// The numeric multiplier a `multiple` rule must carry to count as this
    /// rule. Height-based rules have no multiplier equivalent.
    #[must_use]
    pub const fn equivalent_multiplier(self) -> Option<f64> {
        match self {
            Self::Single => Some(1.0),
            Self::OnePointFive => Some(1.5),
            Self::Double => Some(2.0),
            Self::AtLeast | Self::Exactly | Self::Multiple => None,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
