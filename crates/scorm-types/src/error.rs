use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("unknown SCORM version: {0}")]
    UnknownVersion(String),
}
