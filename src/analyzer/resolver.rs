use crate::document::{Run, Style};
use crate::report::EffectiveFont;

/// Resolve the font actually in effect for a run: the run's explicit value
/// wins, the paragraph style's value is the fallback, and each attribute
/// resolves independently (a run may inherit size but not name, or vice
/// versa). Absence stays absent; nothing is defaulted.
#[must_use]
pub fn resolve_font(run: &Run, paragraph_style: Option<&Style>) -> EffectiveFont {
    let style_font = paragraph_style.map(|s| &s.font);

    let name = run
        .font
        .name
        .clone()
        .or_else(|| style_font.and_then(|f| f.name.clone()));

    let size_pt = run
        .font
        .size
        .or_else(|| style_font.and_then(|f| f.size))
        .map(crate::document::Length::pt);

    EffectiveFont { name, size_pt }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
