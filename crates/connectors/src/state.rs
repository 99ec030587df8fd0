use crate::error::ConnectorError;
use mysql_async::Error as MySqlError;
use std::error::Error;
use tokio_postgres::{Error as PgError, error::SqlState};

/// SQLSTATE the MySQL driver reports for a broken communication link.
pub const MYSQL_COMMUNICATION_LINK_FAILURE: &str = "08S01";

impl ConnectorError {
    /// Vendor state code carried by this error, if any.
    pub fn state_code(&self) -> Option<String> {
        match self {
            ConnectorError::MySql(err) => mysql_state_code(err),
            ConnectorError::Postgres(err) => postgres_state_code(err),
            ConnectorError::UnknownConnectorKind(_) => None,
        }
    }
}

pub fn mysql_state_code(err: &MySqlError) -> Option<String> {
    match err {
        MySqlError::Server(server_err) => Some(server_err.state.clone()),
        MySqlError::Io(_) => Some(MYSQL_COMMUNICATION_LINK_FAILURE.to_string()),
        _ => None,
    }
}

pub fn postgres_state_code(err: &PgError) -> Option<String> {
    if let Some(code) = err.code() {
        return Some(code.code().to_string());
    }

    // Refused or unreachable sockets never reach the server, so no SQLSTATE is attached.
    let io_failure = err
        .source()
        .is_some_and(|source| source.downcast_ref::<std::io::Error>().is_some());
    if io_failure {
        return Some(
            SqlState::SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION
                .code()
                .to_string(),
        );
    }

    None
}
