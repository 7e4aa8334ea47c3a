#![allow(dead_code)]

use std::sync::Arc;

use marriage_registry::contract::model::Registration;
use marriage_registry::domain::service::{Service, ServiceConfig};
use marriage_registry::infra::auth::PlaintextCredentials;
use marriage_registry::infra::storage::{InMemoryStore, StoreUsersRepository};

pub type MemoryRepo = StoreUsersRepository<InMemoryStore>;

/// Service over a fresh in-memory store; the repository is returned for inspection.
pub fn memory_service() -> (Arc<Service>, Arc<MemoryRepo>) {
    let repo = Arc::new(StoreUsersRepository::new(InMemoryStore::new()));
    let service = Service::new(
        repo.clone(),
        Arc::new(PlaintextCredentials),
        ServiceConfig::default(),
    );
    (Arc::new(service), repo)
}

pub fn registration(login: &str, password: &str) -> Registration {
    Registration {
        husband_name: "Ivan Petrov".to_string(),
        wife_name: "Anna Petrova".to_string(),
        contact_number: "+7 (900) 123-45-67".to_string(),
        login: login.to_string(),
        password: password.to_string(),
        marriage_place: "Moscow".to_string(),
    }
}
