//! Check command implementation.

use crate::cli::CheckArgs;
use crate::output::OutputFormatter;
use crate::output::SupportInfo;
use anyhow::Result;
use unarc_core::ArchiveType;
use unarc_core::detect_format;

/// Classifies every path; returns `false` if any is unsupported.
pub fn execute(args: &CheckArgs, formatter: &dyn OutputFormatter) -> Result<bool> {
    let results: Vec<SupportInfo> = args
        .paths
        .iter()
        .map(|path| {
            let format = detect_format(path).ok().map(ArchiveType::name);
            SupportInfo {
                path: path.display().to_string(),
                supported: format.is_some(),
                format,
            }
        })
        .collect();

    formatter.format_support_check(&results)?;

    Ok(results.iter().all(|r| r.supported))
}
