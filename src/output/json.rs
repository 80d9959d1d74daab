use serde::Serialize;

use crate::error::Result;
use crate::report::DocumentReport;

use super::{AnalyzedDocument, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    documents: Vec<DocumentResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_documents: usize,
    compliant: usize,
    noncompliant: usize,
    total_issues: usize,
}

#[derive(Serialize)]
struct DocumentResult<'a> {
    path: String,
    compliant: bool,
    report: &'a DocumentReport,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[AnalyzedDocument]) -> Result<String> {
        let compliant = results.iter().filter(|d| d.report.is_clean()).count();

        let output = JsonOutput {
            summary: Summary {
                total_documents: results.len(),
                compliant,
                noncompliant: results.len() - compliant,
                total_issues: results.iter().map(|d| d.report.issue_count()).sum(),
            },
            documents: results
                .iter()
                .map(|d| DocumentResult {
                    path: d.path.display().to_string(),
                    compliant: d.report.is_clean(),
                    report: &d.report,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
