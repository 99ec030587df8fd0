use crate::{
    kind::ConnectorKind,
    messages::{ErrorMessage, INCORRECT_HOST_OR_PORT, INCORRECT_USERNAME_OR_PASSWORD},
};
use lazy_static::lazy_static;
use std::{collections::HashMap, error::Error};

lazy_static! {
    static ref MSSQL_MESSAGES: HashMap<&'static str, &'static str> = HashMap::from([
        ("S0001", INCORRECT_USERNAME_OR_PASSWORD),
        ("08S01", INCORRECT_HOST_OR_PORT),
    ]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MsSqlErrorMessage;

impl ErrorMessage for MsSqlErrorMessage {
    fn error_message(&self, state_code: &str, cause: &dyn Error) -> String {
        match MSSQL_MESSAGES.get(state_code) {
            Some(message) => (*message).to_string(),
            None => self.default_error_message(state_code, cause),
        }
    }

    fn connector_kind(&self) -> ConnectorKind {
        ConnectorKind::MsSql
    }
}
