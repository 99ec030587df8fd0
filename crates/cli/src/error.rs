use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid connection format provided: {0}")]
    InvalidConnectionFormat(String),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
