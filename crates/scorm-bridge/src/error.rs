use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
