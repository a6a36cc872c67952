//! Unified error type.

use thiserror::Error;

use crate::config::ServerKind;

/// The error type returned by canned's fallible operations.
///
/// Every variant is fatal to the dispatch call that raised it: nothing is
/// retried, nothing is swallowed, and the server handle is guaranteed
/// untouched when one of these comes back. The caller's own request
/// pipeline decides what reaches the client — this crate never answers
/// through the very mechanism it failed to resolve.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither configuration source could be read and parsed.
    #[error("unable to resolve server configuration: no configuration source found")]
    ConfigurationNotFound,

    /// A configuration source was located, but no server type was in it.
    #[error("unable to resolve server configuration: server type not defined")]
    ServerTypeNotDefined,

    /// The configured server type is not one of the five supported ones.
    /// Carries the offending value verbatim.
    #[error("server type \"{0}\" is not supported")]
    UnsupportedServerType(String),

    /// The configured server type and the supplied handle variant disagree.
    #[error("configuration says \"{expected}\" but a {found} handle was supplied")]
    HandleMismatch {
        expected: ServerKind,
        found: ServerKind,
    },

    /// The response entity could not be encoded as JSON.
    #[error("unable to encode response body")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_server_type_keeps_the_value_verbatim() {
        let err = Error::UnsupportedServerType("carrier-pigeon".to_owned());
        assert!(err.to_string().contains("carrier-pigeon"));
    }

    #[test]
    fn handle_mismatch_names_both_sides() {
        let err = Error::HandleMismatch {
            expected: ServerKind::Express,
            found: ServerKind::Koa,
        };
        let msg = err.to_string();
        assert!(msg.contains("express"));
        assert!(msg.contains("koa"));
    }
}
