// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },

    #[error("Queue not found: {0}")]
    QueueNotFound(String),

    #[error("Topic subscriber configuration is invalid for \"{type_name}\"")]
    InvalidSubscription { type_name: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
