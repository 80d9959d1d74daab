mod merger;
mod resolver;

pub use merger::merge_runs;
pub use resolver::resolve_font;

use crate::checker::{MarginChecker, ParagraphChecker, SpanChecker};
use crate::config::RuleSet;
use crate::document::{Document, Paragraph};
use crate::report::{DocumentReport, ParagraphReport, paragraph_preview};

/// The formatting compliance engine: walks a loaded document and assembles a
/// [`DocumentReport`] of every deviation from the rule set.
///
/// Holds no mutable state; `analyze` is a pure pass over its input, so one
/// `Analyzer` may serve any number of documents, concurrently included.
pub struct Analyzer {
    rules: RuleSet,
}

impl Analyzer {
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run the full compliance analysis. The caller must supply a successfully
    /// constructed document; load failures are its responsibility.
    #[must_use]
    pub fn analyze(&self, document: &Document) -> DocumentReport {
        let margin_issues = MarginChecker::new(&self.rules).check(document);

        let mut paragraphs = Vec::new();
        for (idx, paragraph) in document.paragraphs.iter().enumerate() {
            if let Some(report) = self.analyze_paragraph(idx + 1, paragraph) {
                paragraphs.push(report);
            }
        }

        DocumentReport {
            margin_issues,
            paragraphs,
            paragraphs_scanned: document.paragraphs.len(),
        }
    }

    /// Check one paragraph, returning a report only when something is flagged.
    /// Paragraphs whose trimmed text is empty are skipped outright.
    fn analyze_paragraph(&self, index: usize, paragraph: &Paragraph) -> Option<ParagraphReport> {
        let text = paragraph.text();
        if text.trim().is_empty() {
            return None;
        }

        let paragraph_issues = ParagraphChecker::new(&self.rules).check(paragraph);

        let span_checker = SpanChecker::new(&self.rules);
        let mut spans = merge_runs(
            &paragraph.runs,
            paragraph.paragraph_style(),
            self.rules.tolerance.pt,
        );
        let mut fragment_counter: u32 = 0;
        for span in &mut spans {
            span.issues = span_checker.check(&span.text, &span.font);
            if !span.issues.is_empty() {
                fragment_counter += 1;
                span.fragment_index = Some(fragment_counter);
            }
        }

        let any_span_flagged = spans.iter().any(crate::report::LogicalSpan::is_flagged);
        if paragraph_issues.is_empty() && !any_span_flagged {
            return None;
        }

        Some(ParagraphReport {
            index,
            preview: paragraph_preview(text.trim()),
            paragraph_issues,
            spans,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
