use crate::{
    error::ConnectorError,
    kind::ConnectorKind,
    messages::{
        ErrorMessage, default::DefaultErrorMessage, mssql::MsSqlErrorMessage,
        mysql::MySqlErrorMessage, postgres::PostgresErrorMessage,
    },
};
use std::{collections::HashMap, error::Error, sync::Arc};
use tracing::debug;

/// Picks the [`ErrorMessage`] resolver for a connector kind.
///
/// Kinds without a registered resolver use [`DefaultErrorMessage`].
#[derive(Clone)]
pub struct ErrorMessageRegistry {
    resolvers: HashMap<ConnectorKind, Arc<dyn ErrorMessage>>,
    fallback: Arc<dyn ErrorMessage>,
}

impl ErrorMessageRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(MySqlErrorMessage);
        registry.register(PostgresErrorMessage);
        registry.register(MsSqlErrorMessage);
        registry.register(DefaultErrorMessage);
        registry
    }

    /// Registry with nothing but the fallback resolver.
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
            fallback: Arc::new(DefaultErrorMessage),
        }
    }

    /// Registers `resolver` under its own connector kind, replacing any previous one.
    pub fn register<M: ErrorMessage + 'static>(&mut self, resolver: M) {
        let kind = resolver.connector_kind();
        if self.resolvers.insert(kind, Arc::new(resolver)).is_some() {
            debug!("Replaced error message resolver for '{}'", kind);
        }
    }

    pub fn get(&self, kind: ConnectorKind) -> &dyn ErrorMessage {
        self.resolvers
            .get(&kind)
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn resolve(&self, kind: ConnectorKind, state_code: &str, cause: &dyn Error) -> String {
        self.get(kind).error_message(state_code, cause)
    }

    /// User facing message for a connector failure.
    pub fn describe(&self, kind: ConnectorKind, err: &ConnectorError) -> String {
        let state_code = err.state_code().unwrap_or_default();
        debug!(
            "Resolving error message for '{}' with state code '{}'",
            kind, state_code
        );
        self.resolve(kind, &state_code, err)
    }
}

impl Default for ErrorMessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
