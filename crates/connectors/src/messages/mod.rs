//! Human readable messages for vendor state codes.
//!
//! Every vendor ships its own [`ErrorMessage`] with a fixed code table. Codes
//! missing from a table resolve through [`default_error_message`].

use crate::kind::ConnectorKind;
use std::error::Error;

pub mod default;
pub mod mssql;
pub mod mysql;
pub mod postgres;
pub mod registry;

pub const INCORRECT_USERNAME_OR_PASSWORD: &str = "Incorrect username or password.";
pub const INCORRECT_HOST_OR_PORT: &str = "Incorrect host or port.";
pub const INCORRECT_DATABASE_NAME: &str = "Incorrect database name.";

pub trait ErrorMessage: Send + Sync {
    /// Message for `state_code`, or the default message when the code is not known
    /// to this vendor.
    fn error_message(&self, state_code: &str, cause: &dyn Error) -> String;

    /// Vendor this resolver serves.
    fn connector_kind(&self) -> ConnectorKind;

    fn default_error_message(&self, state_code: &str, cause: &dyn Error) -> String {
        default_error_message(state_code, cause)
    }
}

/// Generic message used when a vendor has no entry for `state_code`.
pub fn default_error_message(state_code: &str, cause: &dyn Error) -> String {
    if state_code.is_empty() {
        cause.to_string()
    } else {
        format!("State code: {state_code}; Message: {cause}")
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::{error::Error, fmt};

    #[derive(Debug)]
    pub struct TestCause(pub &'static str);

    impl fmt::Display for TestCause {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Error for TestCause {}
}

#[cfg(test)]
mod tests {
    use super::{test_utils::TestCause, *};

    #[test]
    fn test_default_message_with_state_code() {
        let cause = TestCause("connection reset by peer");
        assert_eq!(
            default_error_message("HY000", &cause),
            "State code: HY000; Message: connection reset by peer"
        );
    }

    #[test]
    fn test_default_message_without_state_code() {
        let cause = TestCause("connection reset by peer");
        assert_eq!(default_error_message("", &cause), "connection reset by peer");
    }
}
