//! Command-line argument parsing.
//!
//! Determines which CLI command to execute and collects the overrides
//! applied on top of the configuration file.

use thiserror::Error;

use crate::config::ExplorerConfig;

/// Overrides passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub api_url: Option<String>,
    pub asset_url: Option<String>,
    pub log_filter: Option<String>,
}

impl RunOptions {
    /// Apply the flags on top of `config`.
    pub fn apply(&self, config: ExplorerConfig) -> ExplorerConfig {
        let mut config = config;
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.clone());
        }
        if let Some(url) = &self.asset_url {
            config = config.with_asset_base_url(url.clone());
        }
        if let Some(filter) = &self.log_filter {
            config = config.with_log_filter(filter.clone());
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: pixora [OPTIONS]

Options:
  --api-url <URL>     Image API base URL (env: PIXORA_API_URL)
  --asset-url <URL>   Base URL for relative image paths (env: PIXORA_ASSET_URL)
  --log <FILTER>      Log filter, e.g. debug or pixora=trace (env: PIXORA_LOG)
  -V, --version       Print version
  -h, --help          Print help";

/// Parse command-line arguments, skipping the program name.
///
/// # Examples
///
/// ```
/// use pixora::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pixora".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, ArgError> {
            inline
                .clone()
                .or_else(|| args.next())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ArgError::MissingValue(name.to_string()))
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api-url" => options.api_url = Some(value("--api-url")?),
            "--asset-url" => options.asset_url = Some(value("--asset-url")?),
            "--log" => options.log_filter = Some(value("--log")?),
            _ => return Err(ArgError::Unknown(arg)),
        }
    }
    Ok(CliCommand::Run(options))
}
