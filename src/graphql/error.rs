use crate::error::RelayError;
use async_graphql::{Error, ErrorExtensions};

impl ErrorExtensions for RelayError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Turns a [`RelayError`] into a field error carrying `extensions.code`.
pub(crate) fn field_error(err: RelayError) -> Error {
    if !err.is_client_error() {
        tracing::error!(error = %err, "Field resolution failed");
    }
    err.extend()
}
