//! `UsersRepository` implemented over any whole-file `UserStore`.
//!
//! Every mutation is a load, modify, save cycle. The write gate keeps two
//! concurrent requests from interleaving those cycles and losing an update.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::contract::model::{Application, ApplicationPatch, NewUser, User, UserId, UserPatch};
use crate::domain::repo::UsersRepository;
use crate::infra::storage::entity::UserRecord;
use crate::infra::storage::mapper::{
    application_to_record, apply_application_patch, apply_user_patch, record_to_contract,
};
use crate::infra::storage::store::UserStore;

pub struct StoreUsersRepository<S: UserStore> {
    store: S,
    write_gate: Mutex<()>,
}

impl<S: UserStore> StoreUsersRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run `f` over the loaded records and persist them when it reports a change.
    async fn modify<T>(
        &self,
        f: impl FnOnce(&mut Vec<UserRecord>) -> (bool, T) + Send,
    ) -> anyhow::Result<T>
    where
        T: Send,
    {
        let _guard = self.write_gate.lock().await;
        let mut records = self.store.load().await?;
        let (changed, out) = f(&mut records);
        if changed {
            self.store.save(&records).await?;
        }
        Ok(out)
    }
}

fn next_id(records: &[UserRecord]) -> UserId {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl<S: UserStore> UsersRepository for StoreUsersRepository<S> {
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let records = self.store.load().await?;
        Ok(records.iter().find(|r| r.id == id).map(record_to_contract))
    }

    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
        let records = self.store.load().await?;
        Ok(records
            .iter()
            .find(|r| r.login == login)
            .map(record_to_contract))
    }

    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User> {
        let user = self
            .modify(|records| {
                let record = UserRecord {
                    id: next_id(records),
                    login: new_user.login,
                    password: new_user.password,
                    visits: 0,
                    application: new_user.application.map(application_to_record),
                    extra: Default::default(),
                };
                let user = record_to_contract(&record);
                records.push(record);
                (true, user)
            })
            .await?;
        debug!(user_id = user.id, "Inserted user record");
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> anyhow::Result<Option<User>> {
        self.modify(|records| match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                apply_user_patch(record, patch);
                (true, Some(record_to_contract(record)))
            }
            None => (false, None),
        })
        .await
    }

    async fn add_application(&self, id: UserId, application: Application) -> anyhow::Result<bool> {
        self.modify(|records| match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.application = Some(application_to_record(application));
                (true, true)
            }
            None => (false, false),
        })
        .await
    }

    async fn edit_application(&self, id: UserId, patch: ApplicationPatch) -> anyhow::Result<bool> {
        self.modify(|records| {
            match records
                .iter_mut()
                .find(|r| r.id == id)
                .and_then(|r| r.application.as_mut())
            {
                Some(application) => {
                    apply_application_patch(application, patch);
                    (true, true)
                }
                None => (false, false),
            }
        })
        .await
    }
}
