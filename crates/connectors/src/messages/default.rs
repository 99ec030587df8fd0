use crate::{kind::ConnectorKind, messages::ErrorMessage};
use std::error::Error;

/// Resolver for connectors without a vendor table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorMessage;

impl ErrorMessage for DefaultErrorMessage {
    fn error_message(&self, state_code: &str, cause: &dyn Error) -> String {
        self.default_error_message(state_code, cause)
    }

    fn connector_kind(&self) -> ConnectorKind {
        ConnectorKind::Default
    }
}
