use async_trait::async_trait;

use crate::contract::model::{Application, ApplicationPatch, NewUser, User, UserId, UserPatch};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;
    /// Load a user by exact login.
    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>>;
    /// Persist a new user under a freshly assigned id and return it.
    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User>;
    /// Shallow-merge `patch` into the user's top-level attributes.
    ///
    /// Returns `None` (and writes nothing) when the user does not exist.
    async fn update(&self, id: UserId, patch: UserPatch) -> anyhow::Result<Option<User>>;
    /// Attach `application` to the user, replacing a previous one.
    /// Returns false if the user does not exist.
    async fn add_application(
        &self,
        user_id: UserId,
        application: Application,
    ) -> anyhow::Result<bool>;
    /// Shallow-merge `patch` into the application owned by `application_id`.
    /// Returns false if there is no such user or the user has no application.
    async fn edit_application(
        &self,
        application_id: UserId,
        patch: ApplicationPatch,
    ) -> anyhow::Result<bool>;
}
