use crate::document::{Run, Style};
use crate::report::{EffectiveFont, LogicalSpan};

use super::resolver::resolve_font;

/// Merge a paragraph's ordered runs into logical spans: maximal stretches of
/// consecutive text whose effective font name and size are equivalent.
///
/// Whitespace-only runs never force a split; their text folds into the current
/// accumulator regardless of their own formatting, so span membership is
/// decided by the non-whitespace runs around them. The returned spans partition
/// the paragraph text losslessly. A paragraph with zero non-whitespace runs
/// yields no spans.
///
/// Issue lists and fragment indices are left empty here; the report assembler
/// fills them in.
#[must_use]
pub fn merge_runs(
    runs: &[Run],
    paragraph_style: Option<&Style>,
    tolerance_pt: f64,
) -> Vec<LogicalSpan> {
    let mut spans = Vec::new();
    let mut acc_text = String::new();
    // Set by the first non-whitespace run of the current accumulator.
    let mut acc_font: Option<EffectiveFont> = None;

    for run in runs {
        if run.text.trim().is_empty() {
            acc_text.push_str(&run.text);
            continue;
        }

        let font = resolve_font(run, paragraph_style);
        match &acc_font {
            Some(current) if !current.equivalent(&font, tolerance_pt) => {
                push_span(&mut spans, &mut acc_text, acc_font.take());
                acc_font = Some(font);
            }
            Some(_) => {}
            None => acc_font = Some(font),
        }
        acc_text.push_str(&run.text);
    }

    push_span(&mut spans, &mut acc_text, acc_font);
    spans
}

fn push_span(spans: &mut Vec<LogicalSpan>, text: &mut String, font: Option<EffectiveFont>) {
    let Some(font) = font else {
        // No non-whitespace run contributed; nothing to check.
        text.clear();
        return;
    };
    if text.trim().is_empty() {
        text.clear();
        return;
    }
    spans.push(LogicalSpan {
        text: std::mem::take(text),
        font,
        issues: Vec::new(),
        fragment_index: None,
    });
}

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;
