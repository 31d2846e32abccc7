use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid locality tier: {0}")]
    InvalidLocality(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
