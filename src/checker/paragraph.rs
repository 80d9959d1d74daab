use crate::config::RuleSet;
use crate::document::{LineSpacingRule, Paragraph};

/// Multiplier slack when equating a `multiple` rule with a named spacing rule.
const MULTIPLIER_TOLERANCE: f64 = 0.01;

/// Checks paragraph-level layout: first-line indent and line spacing, in that
/// order. Nothing else at paragraph level is inspected.
pub struct ParagraphChecker<'r> {
    rules: &'r RuleSet,
}

impl<'r> ParagraphChecker<'r> {
    #[must_use]
    pub const fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn check(&self, paragraph: &Paragraph) -> Vec<String> {
        let mut issues = Vec::new();
        self.check_first_line_indent(paragraph, &mut issues);
        self.check_line_spacing(paragraph, &mut issues);
        issues
    }

    fn check_first_line_indent(&self, paragraph: &Paragraph, issues: &mut Vec<String>) {
        let target_cm = self.rules.paragraph.first_line_indent_cm;
        match paragraph.format.first_line_indent {
            None => {
                if target_cm != 0.0 {
                    issues.push(format!("first-line indent not set (need {target_cm:.2} cm)"));
                }
            }
            Some(indent) => {
                let actual_cm = indent.cm();
                if (actual_cm - target_cm).abs() > self.rules.tolerance.cm {
                    issues.push(format!(
                        "first-line indent {actual_cm:.2} cm (need {target_cm:.2} cm)"
                    ));
                }
            }
        }
    }

    fn check_line_spacing(&self, paragraph: &Paragraph, issues: &mut Vec<String>) {
        if self.line_spacing_satisfied(paragraph) {
            return;
        }

        let target = self.rules.paragraph.line_spacing_rule.display_name();
        let current = paragraph
            .format
            .line_spacing_rule
            .map_or("not set", LineSpacingRule::display_name);
        let issue = match paragraph.format.line_spacing {
            Some(value) => format!(
                "wrong line spacing (current rule: \"{current}\", value: {value}, need: \"{target}\")"
            ),
            None => format!("wrong line spacing (current rule: \"{current}\", need: \"{target}\")"),
        };
        issues.push(issue);
    }

    /// A paragraph satisfies the target when its rule matches literally, or
    /// when it uses a `multiple` rule whose multiplier is equivalent to the
    /// target (e.g. multiple 1.5 counts as one-and-a-half, multiple 2.0 as
    /// double).
    fn line_spacing_satisfied(&self, paragraph: &Paragraph) -> bool {
        let target_rule = self.rules.paragraph.line_spacing_rule;
        let Some(rule) = paragraph.format.line_spacing_rule else {
            return false;
        };
        if rule == LineSpacingRule::Multiple {
            // A multiple rule is judged by its multiplier whenever both sides
            // have one; a bare rule match only counts when neither does.
            if let (Some(actual), Some(target)) = (
                paragraph.format.line_spacing,
                self.rules.paragraph.target_multiplier(),
            ) {
                return (actual - target).abs() < MULTIPLIER_TOLERANCE;
            }
        }
        rule == target_rule
    }
}

#[cfg(test)]
#[path = "paragraph_tests.rs"]
mod tests;
