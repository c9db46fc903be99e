use crate::{
    abstract_trait::DynHashing,
    config::{Config, ConnectionPool, Hashing},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::Repositories,
    utils::{SystemMetrics, run_metrics_collector},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Self {
        let hashing = Arc::new(Hashing::new(config.hash_cost)) as DynHashing;

        let state = Self::with_repositories(Repositories::new(pool), hashing).await;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        state
    }

    /// Wires the services over any set of repositories; the system metrics
    /// collector is not started.
    pub async fn with_repositories(repositories: Repositories, hash: DynHashing) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let deps = DependenciesInjectDeps {
            repositories,
            hash,
            registry: registry.clone(),
        };

        let di_container = DependenciesInject::new(deps).await;

        system_metrics.register(&mut *registry.lock().await);

        Self {
            di_container,
            registry,
            system_metrics,
        }
    }
}
