use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostInfoError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),
}

pub type Result<T> = std::result::Result<T, HostInfoError>;
