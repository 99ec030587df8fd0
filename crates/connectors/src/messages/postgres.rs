use crate::{
    kind::ConnectorKind,
    messages::{
        ErrorMessage, INCORRECT_DATABASE_NAME, INCORRECT_HOST_OR_PORT,
        INCORRECT_USERNAME_OR_PASSWORD,
    },
};
use lazy_static::lazy_static;
use std::{collections::HashMap, error::Error};

lazy_static! {
    static ref POSTGRES_MESSAGES: HashMap<&'static str, &'static str> = HashMap::from([
        // invalid_password
        ("28P01", INCORRECT_USERNAME_OR_PASSWORD),
        // invalid_authorization_specification
        ("28000", INCORRECT_USERNAME_OR_PASSWORD),
        // sqlclient_unable_to_establish_sqlconnection
        ("08001", INCORRECT_HOST_OR_PORT),
        // invalid_catalog_name
        ("3D000", INCORRECT_DATABASE_NAME),
    ]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresErrorMessage;

impl ErrorMessage for PostgresErrorMessage {
    fn error_message(&self, state_code: &str, cause: &dyn Error) -> String {
        match POSTGRES_MESSAGES.get(state_code) {
            Some(message) => (*message).to_string(),
            None => self.default_error_message(state_code, cause),
        }
    }

    fn connector_kind(&self) -> ConnectorKind {
        ConnectorKind::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{default_error_message, test_utils::TestCause};

    #[test]
    fn test_known_codes() {
        let resolver = PostgresErrorMessage;
        let cause = TestCause("password authentication failed for user \"app\"");
        assert_eq!(
            resolver.error_message("28P01", &cause),
            INCORRECT_USERNAME_OR_PASSWORD
        );
        assert_eq!(
            resolver.error_message("28000", &cause),
            INCORRECT_USERNAME_OR_PASSWORD
        );
        assert_eq!(resolver.error_message("08001", &cause), INCORRECT_HOST_OR_PORT);
        assert_eq!(resolver.error_message("3D000", &cause), INCORRECT_DATABASE_NAME);
    }

    #[test]
    fn test_mysql_only_code_falls_through() {
        let resolver = PostgresErrorMessage;
        let cause = TestCause("server closed the connection unexpectedly");
        assert_eq!(
            resolver.error_message("08S01", &cause),
            default_error_message("08S01", &cause)
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let resolver = PostgresErrorMessage;
        let cause = TestCause("password authentication failed");
        assert_eq!(
            resolver.error_message("28p01", &cause),
            "State code: 28p01; Message: password authentication failed"
        );
        assert_eq!(resolver.connector_kind(), ConnectorKind::Postgres);
    }
}
