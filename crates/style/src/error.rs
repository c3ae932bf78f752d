use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid style configuration: {0}")]
    Config(String),
    #[error("Style '{0}' is not registered")]
    NotFound(String),
}
