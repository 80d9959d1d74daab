use serde::Serialize;

/// Maximum characters of paragraph text kept in a preview.
pub const PREVIEW_LEN: usize = 35;

/// The font name and size actually in effect for a run after fallback
/// resolution. `None` means neither the run nor its paragraph style set the
/// attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveFont {
    pub name: Option<String>,
    pub size_pt: Option<f64>,
}

impl EffectiveFont {
    /// Whether two effective fonts count as the same formatting: names compare
    /// equal as strings (unset only equals unset), sizes are both unset or both
    /// set and within `tolerance_pt` of each other.
    #[must_use]
    pub fn equivalent(&self, other: &Self, tolerance_pt: f64) -> bool {
        let size_matches = match (self.size_pt, other.size_pt) {
            (None, None) => true,
            (Some(a), Some(b)) => (a - b).abs() <= tolerance_pt,
            _ => false,
        };
        self.name == other.name && size_matches
    }
}

/// A maximal run of consecutive paragraph text sharing one effective font.
///
/// Spans partition the paragraph losslessly: concatenating their `text` in
/// order reproduces the paragraph's full text. `fragment_index` is assigned
/// only to flagged spans, 1-based and paragraph-local.
#[derive(Debug, Clone, Serialize)]
pub struct LogicalSpan {
    pub text: String,
    pub font: EffectiveFont,
    pub issues: Vec<String>,
    pub fragment_index: Option<u32>,
}

impl LogicalSpan {
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// All findings for one non-compliant paragraph.
#[derive(Debug, Clone, Serialize)]
pub struct ParagraphReport {
    /// 1-based position among all paragraphs of the document.
    pub index: usize,

    /// First [`PREVIEW_LEN`] characters of the trimmed text, newlines replaced
    /// by spaces, with an ellipsis when truncated.
    pub preview: String,

    pub paragraph_issues: Vec<String>,

    pub spans: Vec<LogicalSpan>,
}

impl ParagraphReport {
    #[must_use]
    pub fn flagged_span_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_flagged()).count()
    }
}

/// Result of one compliance analysis pass. Constructed fresh per invocation,
/// never reused.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentReport {
    /// Document-level issues from the margin check.
    pub margin_issues: Vec<String>,

    /// Paragraphs with at least one issue, in document order.
    pub paragraphs: Vec<ParagraphReport>,

    /// Total paragraphs visited, compliant ones included.
    pub paragraphs_scanned: usize,
}

impl DocumentReport {
    /// Whether the document is fully compliant.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.margin_issues.is_empty() && self.paragraphs.is_empty()
    }

    /// Total number of individual issue strings in the report.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        let paragraph_issues: usize = self
            .paragraphs
            .iter()
            .map(|p| {
                p.paragraph_issues.len()
                    + p.spans.iter().map(|s| s.issues.len()).sum::<usize>()
            })
            .sum();
        self.margin_issues.len() + paragraph_issues
    }
}

/// Build the preview string for a paragraph: first [`PREVIEW_LEN`] characters,
/// trimmed, newlines flattened, ellipsis when the text was longer.
#[must_use]
pub fn paragraph_preview(text: &str) -> String {
    let mut preview: String = text
        .chars()
        .take(PREVIEW_LEN)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    preview = preview.trim().to_string();
    if text.chars().count() > PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
