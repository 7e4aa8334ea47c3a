use std::collections::BTreeMap;

use thiserror::Error;

use crate::contract::model::UserId;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarriageRegistryError {
    #[error("Validation error: {} field(s) rejected", errors.len())]
    Validation { errors: BTreeMap<String, String> },

    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("User with login '{login}' not found")]
    UserNotFound { login: String },

    #[error("Application {id} not found")]
    ApplicationNotFound { id: UserId },

    #[error("Internal error")]
    Internal,
}

impl MarriageRegistryError {
    pub fn validation(errors: BTreeMap<String, String>) -> Self {
        Self::Validation { errors }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for MarriageRegistryError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            Validation { errors } => Self::validation(errors.into_inner()),
            InvalidCredentials => Self::InvalidCredentials,
            UserNotFound { login } => Self::UserNotFound { login },
            ApplicationNotFound { id } => Self::ApplicationNotFound { id },
            Storage { .. } => Self::internal(),
        }
    }
}
