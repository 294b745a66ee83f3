//! Error types for pipeline steps, handlers and stores.

use std::error::Error;
use std::fmt;

/// Error type for resource store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    /// An entity expected to be present is gone.
    Missing { collection: &'static str, id: String },
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Missing { collection, id } => {
                write!(f, "{} has no entity with id {}", collection, id)
            }
            StoreError::IndexOutOfRange {
                collection,
                index,
                len,
            } => write!(
                f,
                "index {} out of range for {} (len {})",
                index, collection, len
            ),
        }
    }
}

impl Error for StoreError {}

/// Error produced by the first failing pipeline step, or by a handler.
///
/// `NotFound` and `Invalid` carry the exact user-facing message; their
/// `Display` output is that message with no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The referenced entity id is absent from the store.
    NotFound(String),
    /// A validation step rejected the request.
    Invalid(String),
    /// The body passed validation but does not decode into the typed model.
    DecodeFailed(String),
    /// No pipeline is registered under this operation name.
    UnknownOperation(String),
    /// A step or handler read context that no earlier step attached.
    MissingContext(&'static str),
    Store(StoreError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::NotFound(msg) => f.write_str(msg),
            HandlerError::Invalid(msg) => f.write_str(msg),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::UnknownOperation(name) => write!(f, "unknown operation: {}", name),
            HandlerError::MissingContext(key) => {
                write!(f, "pipeline context is missing {}", key)
            }
            HandlerError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::NotFound(_) => 404,
            HandlerError::Invalid(_) => 400,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::UnknownOperation(_) => 404,
            HandlerError::MissingContext(_) => 500,
            HandlerError::Store(_) => 500,
        }
    }
}
