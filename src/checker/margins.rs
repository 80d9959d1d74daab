use crate::config::RuleSet;
use crate::document::Document;

/// Checks the page margins of a document's first section against the target
/// margins. All four sides are checked independently.
pub struct MarginChecker<'r> {
    rules: &'r RuleSet,
}

impl<'r> MarginChecker<'r> {
    #[must_use]
    pub const fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn check(&self, document: &Document) -> Vec<String> {
        let Some(section) = document.sections.first() else {
            return vec!["cannot verify margins: document has no sections".to_string()];
        };

        let margins = &self.rules.margins;
        let sides = [
            ("top", section.top_margin, margins.top_cm),
            ("bottom", section.bottom_margin, margins.bottom_cm),
            ("left", section.left_margin, margins.left_cm),
            ("right", section.right_margin, margins.right_cm),
        ];

        let mut issues = Vec::new();
        for (side, actual, target_cm) in sides {
            let actual_cm = actual.cm();
            if (actual_cm - target_cm).abs() > self.rules.tolerance.cm {
                issues.push(format!(
                    "{side} margin {actual_cm:.2} cm (need {target_cm:.2} cm)"
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
#[path = "margins_tests.rs"]
mod tests;
