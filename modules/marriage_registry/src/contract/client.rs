use async_trait::async_trait;

use crate::contract::{
    error::MarriageRegistryError,
    model::{
        Application, ApplicationPatch, ApplicationSubmission, Registration, User, UserId,
        UserSummary,
    },
};

/// Public API trait for the marriage_registry module that other modules can use
#[async_trait]
pub trait MarriageRegistryApi: Send + Sync {
    /// Register a new user together with their first application
    async fn register(&self, registration: Registration) -> Result<User, MarriageRegistryError>;

    /// Check credentials and count the visit
    async fn login(&self, login: &str, password: &str)
        -> Result<UserSummary, MarriageRegistryError>;

    /// Submit (or resubmit) the application of an existing user
    async fn add_application(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<(), MarriageRegistryError>;

    /// Partially update the application owned by `application_id`
    async fn edit_application(
        &self,
        application_id: UserId,
        patch: ApplicationPatch,
    ) -> Result<(), MarriageRegistryError>;

    /// Fetch the application owned by `application_id`
    async fn get_application(
        &self,
        application_id: UserId,
    ) -> Result<Application, MarriageRegistryError>;
}
