use crate::{
    error::CliError,
    output::{Diagnostic, render},
};
use clap::Parser;
use commands::Commands;
use connectors::{kind::ConnectorKind, messages::registry::ErrorMessageRegistry};
use std::{error::Error, fmt, str::FromStr};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "stratum-diag",
    version = "0.0.1",
    about = "Connector error diagnostics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Free-form cause text passed on the command line.
#[derive(Debug)]
struct CauseText(String);

impl fmt::Display for CauseText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for CauseText {}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = ErrorMessageRegistry::new();

    match cli.command {
        Commands::Explain {
            kind,
            state,
            cause,
            json,
        } => {
            let kind = parse_kind(&kind)?;
            debug!("Explaining state code '{}' for '{}'", state, kind);
            let message = registry.resolve(kind, &state, &CauseText(cause));
            let diagnostic = Diagnostic {
                connector: kind,
                state_code: Some(state).filter(|code| !code.is_empty()),
                message,
            };
            println!("{}", render(&diagnostic, json)?);
        }
    }

    Ok(())
}

fn parse_kind(name: &str) -> Result<ConnectorKind, CliError> {
    ConnectorKind::from_str(name).map_err(|_| CliError::InvalidConnectionFormat(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::messages::INCORRECT_HOST_OR_PORT;

    #[test]
    fn test_parse_kind_rejects_unknown_format() {
        assert_eq!(parse_kind("MySQL").unwrap(), ConnectorKind::MySql);
        let err = parse_kind("ftp").unwrap_err();
        assert!(matches!(err, CliError::InvalidConnectionFormat(name) if name == "ftp"));
    }

    #[test]
    fn test_cause_text_feeds_default_message() {
        let registry = ErrorMessageRegistry::new();
        let cause = CauseText("Unknown database 'shop'".to_string());
        assert_eq!(
            registry.resolve(ConnectorKind::MySql, "42000", &cause),
            "State code: 42000; Message: Unknown database 'shop'"
        );
        assert_eq!(
            registry.resolve(ConnectorKind::MySql, "08S01", &cause),
            INCORRECT_HOST_OR_PORT
        );
    }
}
