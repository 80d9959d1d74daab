#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use docstyle_guard::document::{
    Document, FontProperties, Length, LineSpacingRule, Paragraph, ParagraphFormat, Run, Section,
};

/// Creates an `assert_cmd` Command for the docstyle-guard binary.
#[macro_export]
macro_rules! docstyle_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("docstyle-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Serializes a document into the temp directory as interchange JSON.
    pub fn create_document(&self, relative_path: &str, document: &Document) {
        let json = serde_json::to_string_pretty(document).expect("Failed to serialize document");
        self.create_file(relative_path, &json);
    }

    /// Creates a rule file in the temp directory.
    pub fn create_rules(&self, relative_path: &str, content: &str) {
        self.create_file(relative_path, content);
    }
}

/// A single run with an explicit font.
pub fn run(text: &str, font_name: &str, size_pt: f64) -> Run {
    Run {
        text: text.to_string(),
        font: FontProperties {
            name: Some(font_name.to_string()),
            size: Some(Length::from_pt(size_pt)),
        },
    }
}

/// A paragraph that satisfies the default house style's layout rules.
pub fn house_paragraph(runs: Vec<Run>) -> Paragraph {
    Paragraph {
        runs,
        format: ParagraphFormat {
            first_line_indent: Some(Length::from_cm(1.25)),
            line_spacing_rule: Some(LineSpacingRule::OnePointFive),
            line_spacing: None,
        },
        style: None,
    }
}

/// A section with the default house style's margins.
pub fn house_section() -> Section {
    Section {
        top_margin: Length::from_cm(2.0),
        bottom_margin: Length::from_cm(2.0),
        left_margin: Length::from_cm(3.0),
        right_margin: Length::from_cm(1.5),
    }
}

/// A document that is fully compliant with the default house style.
pub fn compliant_document() -> Document {
    Document {
        paragraphs: vec![house_paragraph(vec![run(
            "Fully compliant paragraph.",
            "Times New Roman",
            14.0,
        )])],
        sections: vec![house_section()],
    }
}

/// A document whose only paragraph uses the wrong font.
pub fn wrong_font_document() -> Document {
    Document {
        paragraphs: vec![house_paragraph(vec![run(
            "Set in the wrong face.",
            "Arial",
            14.0,
        )])],
        sections: vec![house_section()],
    }
}
