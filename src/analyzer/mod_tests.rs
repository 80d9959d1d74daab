use super::*;
use crate::document::{
    FontProperties, Length, LineSpacingRule, ParagraphFormat, Run, Section,
};

fn run(text: &str, name: Option<&str>, size_pt: Option<f64>) -> Run {
    Run {
        text: text.to_string(),
        font: FontProperties {
            name: name.map(String::from),
            size: size_pt.map(Length::from_pt),
        },
    }
}

fn compliant_format() -> ParagraphFormat {
    ParagraphFormat {
        first_line_indent: Some(Length::from_cm(1.25)),
        line_spacing_rule: Some(LineSpacingRule::OnePointFive),
        line_spacing: None,
    }
}

fn paragraph(runs: Vec<Run>) -> Paragraph {
    Paragraph {
        runs,
        format: compliant_format(),
        style: None,
    }
}

fn compliant_section() -> Section {
    Section {
        top_margin: Length::from_cm(2.0),
        bottom_margin: Length::from_cm(2.0),
        left_margin: Length::from_cm(3.0),
        right_margin: Length::from_cm(1.5),
    }
}

fn document(paragraphs: Vec<Paragraph>) -> Document {
    Document {
        paragraphs,
        sections: vec![compliant_section()],
    }
}

fn analyzer() -> Analyzer {
    Analyzer::new(crate::config::RuleSet::default())
}

#[test]
fn fully_compliant_document_yields_empty_report() {
    // One paragraph, one run, everything on target.
    let doc = document(vec![paragraph(vec![run(
        "Hello world",
        Some("Times New Roman"),
        Some(14.0),
    )])]);

    let report = analyzer().analyze(&doc);
    assert!(report.is_clean());
    assert!(report.margin_issues.is_empty());
    assert!(report.paragraphs.is_empty());
    assert_eq!(report.paragraphs_scanned, 1);
}

#[test]
fn mixed_font_paragraph_flags_only_the_deviating_span() {
    let doc = document(vec![paragraph(vec![
        run("Hello ", Some("Arial"), Some(14.0)),
        run("world", Some("Times New Roman"), Some(14.0)),
    ])]);

    let report = analyzer().analyze(&doc);
    assert_eq!(report.paragraphs.len(), 1);

    let entry = &report.paragraphs[0];
    assert_eq!(entry.spans.len(), 2);
    assert_eq!(entry.spans[0].fragment_index, Some(1));
    assert!(entry.spans[0].issues[0].contains("Arial"));
    assert!(entry.spans[1].issues.is_empty());
    assert!(entry.spans[1].fragment_index.is_none());
    assert_eq!(entry.flagged_span_count(), 1);
}

#[test]
fn margin_deviation_is_document_level_only() {
    let mut doc = document(vec![paragraph(vec![run(
        "Hello",
        Some("Times New Roman"),
        Some(14.0),
    )])]);
    doc.sections[0].top_margin = Length::from_cm(2.5);

    let report = analyzer().analyze(&doc);
    assert_eq!(
        report.margin_issues,
        vec!["top margin 2.50 cm (need 2.00 cm)"]
    );
    assert!(report.paragraphs.is_empty());
}

#[test]
fn zero_sections_degrade_to_single_margin_issue() {
    let mut doc = document(vec![]);
    doc.sections.clear();

    let report = analyzer().analyze(&doc);
    assert_eq!(
        report.margin_issues,
        vec!["cannot verify margins: document has no sections"]
    );
}

#[test]
fn whitespace_only_paragraph_is_skipped_entirely() {
    // Even a hopeless font and a missing indent go unreported.
    let mut para = paragraph(vec![run("   \t", Some("Comic Sans MS"), Some(8.0))]);
    para.format = ParagraphFormat::default();

    let report = analyzer().analyze(&document(vec![para]));
    assert!(report.paragraphs.is_empty());
    assert_eq!(report.paragraphs_scanned, 1);
}

#[test]
fn paragraph_indices_are_one_based_document_positions() {
    let doc = document(vec![
        paragraph(vec![run("first", Some("Times New Roman"), Some(14.0))]),
        paragraph(vec![run("second", Some("Arial"), Some(14.0))]),
        paragraph(vec![run("third", Some("Arial"), Some(14.0))]),
    ]);

    let report = analyzer().analyze(&doc);
    let indices: Vec<_> = report.paragraphs.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![2, 3]);
    assert_eq!(report.paragraphs_scanned, 3);
}

#[test]
fn fragment_numbering_is_monotonic_per_paragraph() {
    let flagged = |text: &str| run(text, Some("Arial"), Some(10.0));
    let clean = |text: &str| run(text, Some("Times New Roman"), Some(14.0));
    let doc = document(vec![
        paragraph(vec![
            flagged("one "),
            clean("two "),
            flagged("three "),
            clean("four "),
            flagged("five"),
        ]),
        paragraph(vec![flagged("six "), clean("seven "), flagged("eight")]),
    ]);

    let report = analyzer().analyze(&doc);
    let numbering = |entry: &crate::report::ParagraphReport| -> Vec<u32> {
        entry
            .spans
            .iter()
            .filter_map(|s| s.fragment_index)
            .collect()
    };
    assert_eq!(numbering(&report.paragraphs[0]), vec![1, 2, 3]);
    // The counter resets for each paragraph.
    assert_eq!(numbering(&report.paragraphs[1]), vec![1, 2]);
}

#[test]
fn span_partition_in_report_is_lossless() {
    let para = paragraph(vec![
        run("Hello ", Some("Arial"), Some(14.0)),
        run("  ", None, None),
        run("world", Some("Georgia"), Some(12.0)),
    ]);
    let full_text = para.text();

    let report = analyzer().analyze(&document(vec![para]));
    let rebuilt: String = report.paragraphs[0]
        .spans
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(rebuilt, full_text);
}

#[test]
fn paragraph_issues_alone_produce_an_entry() {
    let mut para = paragraph(vec![run("Hello", Some("Times New Roman"), Some(14.0))]);
    para.format.first_line_indent = None;

    let report = analyzer().analyze(&document(vec![para]));
    assert_eq!(report.paragraphs.len(), 1);
    assert_eq!(
        report.paragraphs[0].paragraph_issues,
        vec!["first-line indent not set (need 1.25 cm)"]
    );
    assert_eq!(report.paragraphs[0].flagged_span_count(), 0);
}

#[test]
fn style_fallback_feeds_span_checks() {
    let style = crate::document::Style {
        kind: crate::document::StyleKind::Paragraph,
        font: FontProperties {
            name: Some("Times New Roman".to_string()),
            size: Some(Length::from_pt(14.0)),
        },
    };
    let mut para = paragraph(vec![run("Hello", None, None)]);
    para.style = Some(style);

    let report = analyzer().analyze(&document(vec![para]));
    assert!(report.is_clean());
}

#[test]
fn preview_is_truncated_with_ellipsis() {
    let long_text = "This paragraph rambles on far past the preview cutoff point";
    let doc = document(vec![paragraph(vec![run(long_text, Some("Arial"), Some(14.0))])]);

    let report = analyzer().analyze(&doc);
    let preview = &report.paragraphs[0].preview;
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() <= 38 + 3);
}

#[test]
fn analyze_is_deterministic_across_runs() {
    let doc = document(vec![
        paragraph(vec![
            run("Hello ", Some("Arial"), Some(14.0)),
            run("world", None, Some(12.0)),
        ]),
        paragraph(vec![run("again", None, None)]),
    ]);

    let analyzer = analyzer();
    let first = serde_json::to_string(&analyzer.analyze(&doc)).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(&doc)).unwrap();
    assert_eq!(first, second);
}
