//! Named commands a host shell can offer for a selected file.
//!
//! A host (CLI, editor plugin, file manager) asks the registry which
//! commands apply to a path, shows them, and executes the chosen one with
//! a [`CommandContext`] carrying its interactive capabilities.

use std::path::Path;

use tracing::debug;

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ExtractionRequest;
use crate::ProgressCallback;
use crate::Result;
use crate::api::extract_with_progress;
use crate::formats::detect::is_supported_archive;
use crate::policy::OverwritePolicy;

/// Yes/no question asked before extracting: delete the archive afterwards?
pub trait ConfirmDelete {
    /// Returns `true` to delete `archive` once extraction succeeds.
    fn confirm_delete(&mut self, archive: &Path) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm_delete(&mut self, archive: &Path) -> bool {
        self(archive)
    }
}

/// Capabilities a host lends to a command for one execution.
pub struct CommandContext<'a> {
    /// Resolves overwrite conflicts.
    pub policy: &'a mut dyn OverwritePolicy,
    /// Answers the delete-after-extraction question.
    pub confirm_delete: &'a mut dyn ConfirmDelete,
    /// Receives progress and the completion notification.
    pub progress: &'a mut dyn ProgressCallback,
    /// Limits for the run.
    pub config: ExtractionConfig,
}

impl<'a> CommandContext<'a> {
    /// Creates a context with default limits.
    pub fn new(
        policy: &'a mut dyn OverwritePolicy,
        confirm_delete: &'a mut dyn ConfirmDelete,
        progress: &'a mut dyn ProgressCallback,
    ) -> Self {
        Self {
            policy,
            confirm_delete,
            progress,
            config: ExtractionConfig::default(),
        }
    }

    /// Replaces the extraction limits.
    #[must_use]
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }
}

/// A command offered for a selected path.
pub trait ArchiveCommand {
    /// Stable identifier used for lookup.
    fn name(&self) -> &'static str;

    /// Human-readable label.
    fn description(&self) -> &'static str;

    /// Whether the command should be offered for `path`.
    fn is_applicable(&self, path: &Path) -> bool;

    /// Runs the command on `path`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` when the command does not apply to
    /// `path`, otherwise whatever the command's operation returns.
    fn execute(&self, path: &Path, ctx: &mut CommandContext<'_>) -> Result<ExtractionReport>;
}

/// What to do with the source archive after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteSource {
    /// Leave the archive in place.
    Keep,
    /// Remove the archive.
    Delete,
    /// Ask through [`ConfirmDelete`] before extracting.
    Ask,
}

/// Extracts the selected archive into its sibling folder.
#[derive(Debug, Clone, Copy)]
pub struct ExtractCommand {
    delete_source: DeleteSource,
}

impl ExtractCommand {
    /// Creates an extract command with the given deletion behaviour.
    #[must_use]
    pub const fn new(delete_source: DeleteSource) -> Self {
        Self { delete_source }
    }

    /// The command's deletion behaviour.
    #[must_use]
    pub const fn delete_source(&self) -> DeleteSource {
        self.delete_source
    }
}

impl ArchiveCommand for ExtractCommand {
    fn name(&self) -> &'static str {
        match self.delete_source {
            DeleteSource::Ask => "extract",
            DeleteSource::Delete => "extract-delete",
            DeleteSource::Keep => "extract-keep",
        }
    }

    fn description(&self) -> &'static str {
        match self.delete_source {
            DeleteSource::Ask => "Extract into a sibling folder, asking whether to delete the archive",
            DeleteSource::Delete => "Extract into a sibling folder and delete the archive",
            DeleteSource::Keep => "Extract into a sibling folder and keep the archive",
        }
    }

    fn is_applicable(&self, path: &Path) -> bool {
        is_supported_archive(path)
    }

    fn execute(&self, path: &Path, ctx: &mut CommandContext<'_>) -> Result<ExtractionReport> {
        if !self.is_applicable(path) {
            return Err(ExtractionError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let delete = match self.delete_source {
            DeleteSource::Keep => false,
            DeleteSource::Delete => true,
            DeleteSource::Ask => ctx.confirm_delete.confirm_delete(path),
        };
        debug!(command = self.name(), archive = %path.display(), delete, "executing command");

        let request = ExtractionRequest::new(path)?
            .delete_source(delete)
            .config(ctx.config.clone());
        extract_with_progress(&request, &mut *ctx.policy, &mut *ctx.progress)
    }
}

/// Ordered set of commands, looked up by name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn ArchiveCommand>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `extract`, `extract-delete` and `extract-keep`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ExtractCommand::new(DeleteSource::Ask)));
        registry.register(Box::new(ExtractCommand::new(DeleteSource::Delete)));
        registry.register(Box::new(ExtractCommand::new(DeleteSource::Keep)));
        registry
    }

    /// Adds `command`, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn ArchiveCommand>) {
        self.commands.retain(|c| c.name() != command.name());
        self.commands.push(command);
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ArchiveCommand> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| &**c)
    }

    /// Commands that apply to `path`, in registration order.
    #[must_use]
    pub fn applicable(&self, path: &Path) -> Vec<&dyn ArchiveCommand> {
        self.commands
            .iter()
            .filter(|c| c.is_applicable(path))
            .map(|c| &**c)
            .collect()
    }

    /// Names of every registered command.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }
}
