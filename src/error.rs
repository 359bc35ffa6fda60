use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Link name is required!")]
    MissingName,
    #[error("Link url is required!")]
    MissingUrl,
}

/// Everything that can go wrong in a command. The display text is what the
/// user sees as a notice, so I/O and parse messages are kept verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkKeeperError {
    #[error("{0}")]
    FileRead(String),
    #[error("{0}")]
    FileWrite(String),
    #[error("{0}")]
    Parse(String),
    #[error("Data format error! It must be a json object.")]
    Format,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Settings(String),
    #[error("{0}")]
    Prompt(String),
}
