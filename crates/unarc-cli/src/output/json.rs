//! JSON output formatter for machine-readable results.

use super::formatter::ActionInfo;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::SupportInfo;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use unarc_core::ExtractionReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ExtractionOutput {
    destination: String,
    files_extracted: usize,
    directories_created: usize,
    files_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
    source_deleted: bool,
    warnings: Vec<String>,
}

impl From<&ExtractionReport> for ExtractionOutput {
    fn from(report: &ExtractionReport) -> Self {
        Self {
            destination: report.destination.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            source_deleted: report.source_deleted,
            warnings: report.warnings.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        let output = JsonOutput::success("extract", ExtractionOutput::from(report));
        Self::output(&output)
    }

    fn format_support_check(&self, results: &[SupportInfo]) -> Result<()> {
        let output = JsonOutput::success("check", results);
        Self::output(&output)
    }

    fn format_actions(&self, path: &str, actions: &[ActionInfo]) -> Result<()> {
        #[derive(Serialize)]
        struct ActionsOutput<'a> {
            path: &'a str,
            actions: &'a [ActionInfo],
        }

        let output = JsonOutput::success("actions", ActionsOutput { path, actions });
        Self::output(&output)
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, message: &str) {
        #[derive(Serialize)]
        struct SuccessData {
            message: String,
        }

        let output = JsonOutput::success(
            "unknown",
            SuccessData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
