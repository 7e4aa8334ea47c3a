use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::MarriageRegistryApi,
    error::MarriageRegistryError,
    model::{
        Application, ApplicationPatch, ApplicationSubmission, Registration, User, UserId,
        UserSummary,
    },
};
use crate::domain::service::Service;

/// Local implementation of the MarriageRegistryApi trait that delegates to the domain service
pub struct MarriageRegistryLocalClient {
    service: Arc<Service>,
}

impl MarriageRegistryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MarriageRegistryApi for MarriageRegistryLocalClient {
    async fn register(&self, registration: Registration) -> Result<User, MarriageRegistryError> {
        self.service.register(registration).await.map_err(Into::into)
    }

    async fn login(
        &self,
        login: &str,
        password: &str,
    ) -> Result<UserSummary, MarriageRegistryError> {
        self.service.login(login, password).await.map_err(Into::into)
    }

    async fn add_application(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<(), MarriageRegistryError> {
        self.service
            .add_application(submission)
            .await
            .map_err(Into::into)
    }

    async fn edit_application(
        &self,
        application_id: UserId,
        patch: ApplicationPatch,
    ) -> Result<(), MarriageRegistryError> {
        self.service
            .edit_application(application_id, patch)
            .await
            .map_err(Into::into)
    }

    async fn get_application(
        &self,
        application_id: UserId,
    ) -> Result<Application, MarriageRegistryError> {
        self.service
            .get_application(application_id)
            .await
            .map_err(Into::into)
    }
}
