//! Actions command implementation.

use crate::cli::ActionsArgs;
use crate::output::ActionInfo;
use crate::output::OutputFormatter;
use anyhow::Result;
use unarc_core::CommandRegistry;

pub fn execute(args: &ActionsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let registry = CommandRegistry::with_defaults();
    let actions: Vec<ActionInfo> = registry
        .applicable(&args.path)
        .into_iter()
        .map(|command| ActionInfo {
            name: command.name(),
            description: command.description(),
        })
        .collect();

    formatter.format_actions(&args.path.display().to_string(), &actions)
}
