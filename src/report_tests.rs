use super::*;

fn font(name: Option<&str>, size_pt: Option<f64>) -> EffectiveFont {
    EffectiveFont {
        name: name.map(String::from),
        size_pt,
    }
}

#[test]
fn equivalent_when_both_unset() {
    assert!(font(None, None).equivalent(&font(None, None), 0.1));
}

#[test]
fn unset_name_only_equals_unset() {
    assert!(!font(None, Some(14.0)).equivalent(&font(Some("Arial"), Some(14.0)), 0.1));
}

#[test]
fn equivalent_sizes_within_tolerance() {
    let a = font(Some("Arial"), Some(14.0));
    let b = font(Some("Arial"), Some(14.1));
    assert!(a.equivalent(&b, 0.1));
}

#[test]
fn sizes_beyond_tolerance_differ() {
    let a = font(Some("Arial"), Some(14.0));
    let b = font(Some("Arial"), Some(14.2));
    assert!(!a.equivalent(&b, 0.1));
}

#[test]
fn one_set_one_unset_size_differ() {
    let a = font(Some("Arial"), Some(14.0));
    let b = font(Some("Arial"), None);
    assert!(!a.equivalent(&b, 0.1));
}

#[test]
fn names_compare_case_sensitively() {
    let a = font(Some("arial"), None);
    let b = font(Some("Arial"), None);
    assert!(!a.equivalent(&b, 0.1));
}

#[test]
fn preview_keeps_short_text() {
    assert_eq!(paragraph_preview("Hello world"), "Hello world");
}

#[test]
fn preview_truncates_with_ellipsis() {
    let text = "a".repeat(40);
    let preview = paragraph_preview(&text);
    assert_eq!(preview, format!("{}...", "a".repeat(35)));
}

#[test]
fn preview_flattens_newlines() {
    assert_eq!(paragraph_preview("Hello\nworld"), "Hello world");
}

#[test]
fn preview_trims_whitespace() {
    assert_eq!(paragraph_preview("Hi  "), "Hi");
}

#[test]
fn report_is_clean_without_issues() {
    let report = DocumentReport {
        paragraphs_scanned: 3,
        ..DocumentReport::default()
    };
    assert!(report.is_clean());
    assert_eq!(report.issue_count(), 0);
}

#[test]
fn issue_count_sums_all_levels() {
    let report = DocumentReport {
        margin_issues: vec!["top margin 2.50 cm (need 2.00 cm)".to_string()],
        paragraphs: vec![ParagraphReport {
            index: 1,
            preview: "Hello".to_string(),
            paragraph_issues: vec!["first-line indent not set (need 1.25 cm)".to_string()],
            spans: vec![LogicalSpan {
                text: "Hello".to_string(),
                font: font(Some("Arial"), Some(14.0)),
                issues: vec!["font \"Arial\" (must be \"Times New Roman\")".to_string()],
                fragment_index: Some(1),
            }],
        }],
        paragraphs_scanned: 1,
    };
    assert!(!report.is_clean());
    assert_eq!(report.issue_count(), 3);
    assert_eq!(report.paragraphs[0].flagged_span_count(), 1);
}
