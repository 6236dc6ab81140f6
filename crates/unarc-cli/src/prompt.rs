//! Interactive terminal questions: overwrite conflicts and source deletion.

use console::Term;
use console::style;
use indicatif::ProgressBar;
use std::path::Path;
use tracing::warn;
use unarc_core::ConfirmDelete;
use unarc_core::OverwriteDecision;
use unarc_core::OverwritePolicy;

/// Asks questions on stderr and reads answers from the terminal.
///
/// While a question is pending the progress bar, if any, is suspended so
/// the prompt line is not overdrawn.
pub struct TermPrompt {
    term: Term,
    bar: Option<ProgressBar>,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            bar: None,
        }
    }

    /// Suspends `bar` around each question.
    pub fn with_progress_bar(mut self, bar: ProgressBar) -> Self {
        self.bar = Some(bar);
        self
    }

    /// Whether questions can be asked at all.
    pub fn is_interactive() -> bool {
        Term::stderr().is_term()
    }

    fn ask(&self, question: &str) -> std::io::Result<String> {
        let ask = || {
            self.term.write_str(question)?;
            self.term.flush()?;
            self.term.read_line()
        };
        match &self.bar {
            Some(bar) => bar.suspend(ask),
            None => ask(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl OverwritePolicy for TermPrompt {
    fn decide(&mut self, path: &Path) -> OverwriteDecision {
        let question = format!(
            "{} already exists. Overwrite? [y]es / [n]o / [a]ll: ",
            style(path.display()).bold()
        );
        loop {
            match self.ask(&question) {
                Ok(answer) => {
                    if let Some(decision) = parse_overwrite_answer(&answer) {
                        return decision;
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "prompt failed, keeping existing file");
                    return OverwriteDecision::Skip;
                }
            }
        }
    }
}

impl ConfirmDelete for TermPrompt {
    fn confirm_delete(&mut self, archive: &Path) -> bool {
        let question = format!(
            "Would you like to delete {} after extraction? [y/N]: ",
            style(archive.display()).bold()
        );
        match self.ask(&question) {
            Ok(answer) => parse_yes_no(&answer),
            Err(e) => {
                warn!(archive = %archive.display(), error = %e, "prompt failed, keeping archive");
                false
            }
        }
    }
}

/// Maps an answer to an overwrite decision; `None` means ask again.
///
/// An empty answer keeps the existing file.
fn parse_overwrite_answer(answer: &str) -> Option<OverwriteDecision> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(OverwriteDecision::OverwriteOne),
        "" | "n" | "no" => Some(OverwriteDecision::Skip),
        "a" | "all" => Some(OverwriteDecision::OverwriteAll),
        _ => None,
    }
}

fn parse_yes_no(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
