use redis::{ErrorKind, RedisError};
use thiserror::Error;

/// Every failure the script aborts on.
///
/// A key that does not exist is not an error: reads return `None` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// The TCP connection could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: RedisError,
    },

    /// The server or the transport failed while running `request`.
    #[error("`{request}` failed: {source}")]
    Command {
        request: String,
        #[source]
        source: RedisError,
    },

    /// The reply arrived but could not be converted to the requested type.
    #[error("`{request}` returned a value of the wrong type: {source}")]
    Coercion {
        request: String,
        #[source]
        source: RedisError,
    },

    /// The command succeeded with a reply other than the one expected.
    #[error("`{request}` replied {reply:?}")]
    UnexpectedReply { request: String, reply: String },

    /// A key the script wrote earlier reads back as absent.
    #[error("`{key}` is missing")]
    Missing { key: String },
}

impl Error {
    /// Sort a `RedisError` raised by `request` into a command or coercion failure.
    pub(crate) fn from_redis(request: impl Into<String>, source: RedisError) -> Error {
        let request = request.into();
        if source.kind() == ErrorKind::TypeError {
            Error::Coercion { request, source }
        } else {
            Error::Command { request, source }
        }
    }
}
