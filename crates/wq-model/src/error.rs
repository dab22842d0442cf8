use thiserror::Error;

#[derive(Debug, Error)]
pub enum WqError {
    /// A non-blank reading for the named parameter could not be parsed as a
    /// number. The whole analysis is abandoned; no partial report is produced.
    #[error("invalid numeric input for {parameter}: {value:?} is not a number")]
    InvalidNumericInput { parameter: String, value: String },
}

pub type Result<T> = std::result::Result<T, WqError>;
