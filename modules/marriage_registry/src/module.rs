use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::api::rest::{doc::ApiDoc, routes};
use crate::config::MarriageRegistryConfig;
use crate::contract::client::MarriageRegistryApi;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::MarriageRegistryLocalClient;
use crate::infra::auth::PlaintextCredentials;
use crate::infra::storage::{InMemoryStore, JsonFileStore, StoreUsersRepository};

/// Wired marriage registry: domain service over the configured user store
#[derive(Clone)]
pub struct MarriageRegistry {
    service: Arc<Service>,
}

impl MarriageRegistry {
    /// Build the module from its config section.
    ///
    /// With `mock` set the store lives in memory and nothing touches the disk.
    pub fn init(cfg: &MarriageRegistryConfig, home_dir: &Path, mock: bool) -> anyhow::Result<Self> {
        info!("Initializing marriage_registry module");

        let repo: Arc<dyn UsersRepository> = if mock {
            info!("Using in-memory user store");
            Arc::new(StoreUsersRepository::new(InMemoryStore::new()))
        } else {
            let path = cfg.resolve_store_path(home_dir);
            info!("Using JSON user store at {}", path.display());
            Arc::new(StoreUsersRepository::new(
                JsonFileStore::new(path).with_pretty(cfg.pretty),
            ))
        };
        debug!(
            "Validation limits: max_name_length={}, max_place_length={}, min_password_length={}",
            cfg.max_name_length, cfg.max_place_length, cfg.min_password_length
        );

        Ok(Self::from_repository(repo, cfg))
    }

    /// Wire the service over an already built repository.
    pub fn from_repository(repo: Arc<dyn UsersRepository>, cfg: &MarriageRegistryConfig) -> Self {
        let service_config = ServiceConfig {
            limits: cfg.limits(),
        };
        let service = Service::new(repo, Arc::new(PlaintextCredentials), service_config);
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn MarriageRegistryApi> {
        Arc::new(MarriageRegistryLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering marriage_registry REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        <ApiDoc as utoipa::OpenApi>::openapi()
    }
}
