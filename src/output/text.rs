use std::fmt::Write as _;
use std::io::Write as IoWrite;

use crate::error::Result;
use crate::report::{LogicalSpan, ParagraphReport};

use super::{AnalyzedDocument, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const RESET: &str = "\x1b[0m";
}

/// Characters of a flagged fragment shown in its details line.
const FRAGMENT_PREVIEW_LEN: usize = 20;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_document(&self, doc: &AnalyzedDocument, output: &mut Vec<u8>) {
        let report = &doc.report;
        if report.is_clean() {
            let status = self.colorize("COMPLIANT", ansi::GREEN);
            writeln!(output, "✓ {status}: {}", doc.path.display()).ok();
            if self.verbose >= 1 {
                writeln!(
                    output,
                    "   Paragraphs scanned: {}",
                    report.paragraphs_scanned
                )
                .ok();
            }
            return;
        }

        let status = self.colorize("NONCOMPLIANT", ansi::RED);
        writeln!(
            output,
            "✗ {status}: {} ({} paragraphs scanned, {} issues)",
            doc.path.display(),
            report.paragraphs_scanned,
            report.issue_count()
        )
        .ok();

        if !report.margin_issues.is_empty() {
            let header = self.colorize("Document margins:", ansi::MAGENTA);
            writeln!(output, "   {header}").ok();
            for issue in &report.margin_issues {
                writeln!(output, "     - {issue}").ok();
            }
        }

        for paragraph in &report.paragraphs {
            self.format_paragraph(paragraph, output);
        }
    }

    fn format_paragraph(&self, paragraph: &ParagraphReport, output: &mut Vec<u8>) {
        writeln!(
            output,
            "   Paragraph #{} (\"{}\"):",
            paragraph.index, paragraph.preview
        )
        .ok();

        for issue in &paragraph.paragraph_issues {
            let label = self.colorize("paragraph", ansi::BLUE);
            writeln!(output, "     {label}: {issue}").ok();
        }

        for span in &paragraph.spans {
            let Some(fragment) = span.fragment_index else {
                continue;
            };
            let label = self.colorize(&format!("fragment [{fragment}]"), ansi::RED);
            writeln!(
                output,
                "     {label} \"{}\": {}",
                fragment_preview(&span.text),
                span.issues.join("; ")
            )
            .ok();
        }

        if paragraph.flagged_span_count() > 0 {
            writeln!(output, "     text: {}", self.highlight_line(&paragraph.spans)).ok();
        }
    }

    /// Reconstruct the paragraph text with `(n)` markers in front of flagged
    /// fragments, mirroring the inline highlighting of the report view.
    fn highlight_line(&self, spans: &[LogicalSpan]) -> String {
        let mut line = String::new();
        for span in spans {
            match span.fragment_index {
                Some(n) => {
                    let marked = self.colorize(&format!("«{}»", span.text), ansi::RED);
                    let _ = write!(line, "({n}){marked}");
                }
                None => line.push_str(&span.text),
            }
        }
        line.replace('\n', " ")
    }

    fn format_summary(
        &self,
        total: usize,
        compliant: usize,
        noncompliant: usize,
        issues: usize,
    ) -> String {
        let compliant_str = self.colorize(&compliant.to_string(), ansi::GREEN);
        let noncompliant_str = self.colorize(&noncompliant.to_string(), ansi::RED);
        format!(
            "Summary: {total} documents checked, {compliant_str} compliant, \
             {noncompliant_str} noncompliant, {issues} issues"
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[AnalyzedDocument]) -> Result<String> {
        let mut output = Vec::new();

        for doc in results {
            self.format_document(doc, &mut output);
        }

        let compliant = results.iter().filter(|d| d.report.is_clean()).count();
        let issues: usize = results.iter().map(|d| d.report.issue_count()).sum();
        let summary = self.format_summary(
            results.len(),
            compliant,
            results.len() - compliant,
            issues,
        );
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

fn fragment_preview(text: &str) -> String {
    let trimmed = text.trim();
    let mut preview: String = trimmed.chars().take(FRAGMENT_PREVIEW_LEN).collect();
    if trimmed.chars().count() > FRAGMENT_PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
