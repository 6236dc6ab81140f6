//! Human-readable output formatter with colors and styling.

use super::formatter::ActionInfo;
use super::formatter::OutputFormatter;
use super::formatter::SupportInfo;
use anyhow::Result;
use console::Term;
use console::style;
use unarc_core::ExtractionReport;

/// Formats a byte count with a binary unit (B, KB, MB, GB).
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.line(&format!("{} {}", style("✓").green().bold(), report.summary()));
        } else {
            self.line(&report.summary());
        }

        self.line(&format!(
            "  Directories:   {}",
            Self::format_number(report.directories_created)
        ));
        if report.files_skipped > 0 {
            self.line(&format!(
                "  Skipped:       {}",
                Self::format_number(report.files_skipped)
            ));
        }
        self.line(&format!(
            "  Total size:    {}",
            format_size(report.bytes_written)
        ));
        if report.source_deleted {
            self.line("  Source archive deleted");
        }

        if self.verbose {
            self.line(&format!("  Duration:      {:?}", report.duration));
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        Ok(())
    }

    fn format_support_check(&self, results: &[SupportInfo]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for info in results {
            match info.format {
                Some(format) if self.use_colors => self.line(&format!(
                    "{} {} ({format})",
                    style("✓").green().bold(),
                    info.path
                )),
                Some(format) => self.line(&format!("supported: {} ({format})", info.path)),
                None if self.use_colors => {
                    self.line(&format!("{} {}", style("✗").red().bold(), info.path));
                }
                None => self.line(&format!("unsupported: {}", info.path)),
            }
        }

        Ok(())
    }

    fn format_actions(&self, path: &str, actions: &[ActionInfo]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if actions.is_empty() {
            self.line(&format!("No commands available for {path}"));
            return Ok(());
        }

        let width = actions.iter().map(|a| a.name.len()).max().unwrap_or(0);
        for action in actions {
            let name = format!("{:width$}", action.name);
            if self.use_colors {
                self.line(&format!("{}  {}", style(name).cyan(), action.description));
            } else {
                self.line(&format!("{name}  {}", action.description));
            }
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
