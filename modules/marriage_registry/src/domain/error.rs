use thiserror::Error;

use crate::contract::model::UserId;
use crate::domain::validator::ValidationErrors;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed for {} field(s)", errors.len())]
    Validation { errors: ValidationErrors },

    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("User with login '{login}' not found")]
    UserNotFound { login: String },

    #[error("Application {id} not found")]
    ApplicationNotFound { id: UserId },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn user_not_found(login: impl Into<String>) -> Self {
        Self::UserNotFound {
            login: login.into(),
        }
    }

    pub fn application_not_found(id: UserId) -> Self {
        Self::ApplicationNotFound { id }
    }

    /// Wraps a repository failure; `{:#}` keeps the whole anyhow context chain.
    pub fn storage(err: &anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{err:#}"),
        }
    }

    /// Soft failures are reported to the caller as a regular negative answer.
    pub fn is_soft(&self) -> bool {
        !matches!(self, Self::Storage { .. })
    }
}
