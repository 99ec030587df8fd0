use crate::error::CliError;
use connectors::kind::ConnectorKind;
use serde::Serialize;

/// Resolved message for a connector failure.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    pub connector: ConnectorKind,
    pub state_code: Option<String>,
    pub message: String,
}

pub fn render(diagnostic: &Diagnostic, as_json: bool) -> Result<String, CliError> {
    if as_json {
        Ok(serde_json::to_string_pretty(diagnostic)?)
    } else {
        Ok(diagnostic.message.clone())
    }
}
