//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::cli::OverwriteMode;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use crate::prompt::TermPrompt;
use anyhow::Result;
use anyhow::anyhow;
use indicatif::ProgressBar;
use tracing::info;
use unarc_core::AlwaysOverwrite;
use unarc_core::ArchiveCommand;
use unarc_core::CommandContext;
use unarc_core::CommandRegistry;
use unarc_core::DeleteSource;
use unarc_core::ExtractCommand;
use unarc_core::ExtractionConfig;
use unarc_core::NeverOverwrite;
use unarc_core::NoopProgress;
use unarc_core::OverwritePolicy;
use unarc_core::ProgressCallback;

pub fn execute(
    args: &ExtractArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let interactive = TermPrompt::is_interactive();
    let delete_source = delete_source_mode(args, interactive);

    let (mut progress, bar): (Box<dyn ProgressCallback>, Option<ProgressBar>) = if show_progress {
        let progress = CliProgress::new("Extracting");
        let bar = progress.bar();
        (Box::new(progress), Some(bar))
    } else {
        (Box::new(NoopProgress), None)
    };

    let mut policy = overwrite_policy(args.overwrite, interactive, bar);
    let mut confirm = TermPrompt::new();

    let registry = CommandRegistry::with_defaults();
    let name = ExtractCommand::new(delete_source).name();
    let command = registry
        .get(name)
        .ok_or_else(|| anyhow!("command '{name}' is not registered"))?;

    let mut ctx = CommandContext::new(policy.as_mut(), &mut confirm, progress.as_mut())
        .with_config(build_config(args));
    let report = add_archive_context(command.execute(&args.archive, &mut ctx), &args.archive)?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}

fn build_config(args: &ExtractArgs) -> ExtractionConfig {
    let defaults = ExtractionConfig::default();
    ExtractionConfig {
        max_file_size: args.max_file_size.unwrap_or(defaults.max_file_size),
        max_total_size: args.max_total_size.unwrap_or(defaults.max_total_size),
        max_file_count: args.max_files.unwrap_or(defaults.max_file_count),
        max_path_depth: args
            .max_depth
            .map_or(defaults.max_path_depth, usize::from),
    }
}

/// Explicit flags win; otherwise ask when a terminal is attached.
fn delete_source_mode(args: &ExtractArgs, interactive: bool) -> DeleteSource {
    if args.delete_source {
        DeleteSource::Delete
    } else if args.keep_source || !interactive {
        DeleteSource::Keep
    } else {
        DeleteSource::Ask
    }
}

fn overwrite_policy(
    mode: OverwriteMode,
    interactive: bool,
    bar: Option<ProgressBar>,
) -> Box<dyn OverwritePolicy> {
    match mode {
        OverwriteMode::Ask if interactive => {
            let prompt = TermPrompt::new();
            Box::new(match bar {
                Some(bar) => prompt.with_progress_bar(bar),
                None => prompt,
            })
        }
        OverwriteMode::Ask => {
            info!("no terminal attached, existing files will be kept");
            Box::new(NeverOverwrite)
        }
        OverwriteMode::Skip => Box::new(NeverOverwrite),
        OverwriteMode::All => Box::new(AlwaysOverwrite),
    }
}
