use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },
    #[error("unknown record kind '{0}'")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
