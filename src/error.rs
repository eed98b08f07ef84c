use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModalError {
    #[error("Unknown swipe direction: {0}")]
    InvalidDirection(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Failed to create event loop wakeup: {0}")]
    Wakeup(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModalError>;
