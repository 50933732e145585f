use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("non-numeric value for {element}: {value:?}")]
    InvalidNumeric { element: String, value: String },
}

pub type TrackerResult<T> = Result<T, TrackerError>;
