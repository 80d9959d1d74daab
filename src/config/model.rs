use serde::{Deserialize, Serialize};

use crate::document::LineSpacingRule;

/// Immutable target formatting values and tolerances a document is checked
/// against. Loaded once at startup and passed by reference into every checker;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    #[serde(default)]
    pub font: FontRules,

    #[serde(default)]
    pub paragraph: ParagraphRules,

    #[serde(default)]
    pub margins: MarginRules,

    #[serde(default)]
    pub tolerance: Tolerances,
}

/// Required font family and size for all body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontRules {
    #[serde(default = "default_font_name")]
    pub name: String,

    #[serde(default = "default_font_size")]
    pub size_pt: f64,
}

impl Default for FontRules {
    fn default() -> Self {
        Self {
            name: default_font_name(),
            size_pt: default_font_size(),
        }
    }
}

/// Required paragraph layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParagraphRules {
    /// Required first-line indent in centimeters. Zero means no indent is
    /// required and unset indents are not flagged.
    #[serde(default = "default_first_line_indent")]
    pub first_line_indent_cm: f64,

    #[serde(default = "default_line_spacing_rule")]
    pub line_spacing_rule: LineSpacingRule,

    /// Target multiplier, only consulted when `line_spacing_rule` is `multiple`.
    #[serde(default)]
    pub line_spacing: Option<f64>,
}

impl Default for ParagraphRules {
    fn default() -> Self {
        Self {
            first_line_indent_cm: default_first_line_indent(),
            line_spacing_rule: default_line_spacing_rule(),
            line_spacing: None,
        }
    }
}

impl ParagraphRules {
    /// The multiplier a `multiple`-rule paragraph must carry to satisfy the
    /// target: the named rule's equivalent, or the configured value for a
    /// `multiple` target.
    #[must_use]
    pub fn target_multiplier(&self) -> Option<f64> {
        self.line_spacing_rule
            .equivalent_multiplier()
            .or(self.line_spacing)
    }
}

/// Required page margins in centimeters, checked on the first section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarginRules {
    #[serde(default = "default_margin_top")]
    pub top_cm: f64,

    #[serde(default = "default_margin_bottom")]
    pub bottom_cm: f64,

    #[serde(default = "default_margin_left")]
    pub left_cm: f64,

    #[serde(default = "default_margin_right")]
    pub right_cm: f64,
}

impl Default for MarginRules {
    fn default() -> Self {
        Self {
            top_cm: default_margin_top(),
            bottom_cm: default_margin_bottom(),
            left_cm: default_margin_left(),
            right_cm: default_margin_right(),
        }
    }
}

/// Numeric slack allowed before a measured value counts as a deviation.
/// Comparisons are strict: a value exactly at the tolerance boundary complies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tolerances {
    #[serde(default = "default_tolerance_cm")]
    pub cm: f64,

    #[serde(default = "default_tolerance_pt")]
    pub pt: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            cm: default_tolerance_cm(),
            pt: default_tolerance_pt(),
        }
    }
}

fn default_font_name() -> String {
    "Times New Roman".to_string()
}

const fn default_font_size() -> f64 {
    14.0
}

const fn default_first_line_indent() -> f64 {
    1.25
}

const fn default_line_spacing_rule() -> LineSpacingRule {
    LineSpacingRule::OnePointFive
}

const fn default_margin_top() -> f64 {
    2.0
}

const fn default_margin_bottom() -> f64 {
    2.0
}

const fn default_margin_left() -> f64 {
    3.0
}

const fn default_margin_right() -> f64 {
    1.5
}

const fn default_tolerance_cm() -> f64 {
    0.05
}

const fn default_tolerance_pt() -> f64 {
    0.1
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
