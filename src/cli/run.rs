/// Dispatch to the command handler selected by the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., no Starlight project, unreadable config)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init, locales::locales, prepare::prepare, status::status,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Prepare(cmd)) => prepare(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
