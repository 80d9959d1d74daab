use crate::config::RuleSet;
use crate::report::EffectiveFont;

/// Checks a logical span's effective font against the target font rules.
///
/// Produces at most two issues per span, font name before size. A span whose
/// text is pure whitespace is never flagged.
pub struct SpanChecker<'r> {
    rules: &'r RuleSet,
}

impl<'r> SpanChecker<'r> {
    #[must_use]
    pub const fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn check(&self, text: &str, font: &EffectiveFont) -> Vec<String> {
        let mut issues = Vec::new();
        if text.trim().is_empty() {
            return issues;
        }

        let target = &self.rules.font;
        match &font.name {
            None => issues.push(format!("wrong font (must be '{}')", target.name)),
            Some(name) if *name != target.name => {
                issues.push(format!("font \"{name}\" (must be \"{}\")", target.name));
            }
            Some(_) => {}
        }

        match font.size_pt {
            None => issues.push(format!("wrong size (must be {:.1} pt)", target.size_pt)),
            Some(size) if (size - target.size_pt).abs() > self.rules.tolerance.pt => {
                issues.push(format!(
                    "size {size:.1} pt (must be {:.1} pt)",
                    target.size_pt
                ));
            }
            Some(_) => {}
        }

        issues
    }
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
