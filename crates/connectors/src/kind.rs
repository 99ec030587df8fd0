use crate::error::ConnectorError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Database vendor a connector (and its error messages) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    MySql,
    Postgres,
    MsSql,
    Default,
}

impl ConnectorKind {
    pub const ALL: [ConnectorKind; 4] = [
        ConnectorKind::MySql,
        ConnectorKind::Postgres,
        ConnectorKind::MsSql,
        ConnectorKind::Default,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConnectorKind::MySql => "mysql",
            ConnectorKind::Postgres => "postgres",
            ConnectorKind::MsSql => "mssql",
            ConnectorKind::Default => "default",
        }
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConnectorKind {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(ConnectorKind::MySql),
            "pg" | "postgres" | "postgresql" => Ok(ConnectorKind::Postgres),
            "mssql" | "sqlserver" => Ok(ConnectorKind::MsSql),
            "default" => Ok(ConnectorKind::Default),
            other => Err(ConnectorError::UnknownConnectorKind(other.to_string())),
        }
    }
}
