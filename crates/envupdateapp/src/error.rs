use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvUpdateError {
    #[error("Invalid buffer capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    #[error("Could not allocate a buffer of {0} characters")]
    Allocation(usize),

    #[error("Invalid delimiter {0:?}: expected exactly one character")]
    InvalidDelimiter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Scope is not available: {0}")]
    ScopeUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, EnvUpdateError>;

/// Why an edit reported failure.
///
/// Failures never abort an edit or cross the store boundary as errors; they are
/// folded into the `success` flag of an `EditResult`. The kind is kept only so a
/// UI can explain what went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFailure {
    #[error("unrecognized action")]
    UnknownAction,

    #[error("a value did not fit its buffer")]
    CapacityExceeded,

    #[error("no readable value for this name and scope")]
    ValueNotFound,

    #[error("storage scope is not available")]
    StoreUnavailable,

    #[error("the edited list could not be written back")]
    WriteFailed,
}
