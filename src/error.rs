use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("Unknown projection: {0}")]
    UnknownProjection(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
