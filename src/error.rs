use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncojiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("Not a variation selector: {0:?}")]
    NotAVariationSelector(char),

    #[error("No payload source to encode")]
    MissingPayload,
}

pub type Result<T> = std::result::Result<T, EncojiError>;
