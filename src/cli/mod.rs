//! CLI module for Pixora.
//!
//! - Argument parsing
//! - Version and help display
//!
//! The dispatcher runs early in main() to handle informational flags
//! before the TUI is initialized:
//!
//! ```ignore
//! use pixora::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(());
//! };
//! // Continue to the TUI with `options`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgError, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, version_line, VERSION};

/// Run an informational command.
///
/// Returns the run options when the TUI should start, `None` when the
/// command was fully handled here.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_options() {
        let options = RunOptions {
            log_filter: Some("debug".to_string()),
            ..Default::default()
        };
        assert_eq!(
            run_cli_command(CliCommand::Run(options.clone())),
            Some(options)
        );
    }

    #[test]
    fn test_help_is_handled() {
        assert!(run_cli_command(CliCommand::Help).is_none());
    }
}
