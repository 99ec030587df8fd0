use thiserror::Error;

/// Driver failures a connector surfaces, plus connector selection errors.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// MySQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// PostgreSQL driver error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Unknown connector kind: {0}")]
    UnknownConnectorKind(String),
}
