use thiserror::Error;

pub type AdapterResult<T> = Result<T, AdapterError>;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invalid format pattern: `{pattern}`")]
    InvalidFormatPattern { pattern: String },

    #[error("time point {millis}ms is outside the representable calendar range")]
    OutOfRange { millis: i64 },

    #[error("unknown time unit: `{0}`")]
    UnknownUnit(String),

    #[error("unknown display context: `{0}`")]
    UnknownDisplayContext(String),

    #[error("date adapter id must not be empty")]
    InvalidAdapterId,

    #[error("date adapter with id `{id}` is already registered")]
    DuplicateAdapter { id: String },

    #[error("no date adapter registered with id `{id}`")]
    UnknownAdapter { id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
