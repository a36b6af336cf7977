use metrics_exporter_prometheus::PrometheusHandle;
use module_buddy::catalog::ModuleCatalog;
use module_buddy::config::CatalogConfig;
use module_buddy::error::AppError;
use module_buddy::recommendations::{RecommendationService, ReservedModules};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from `dir_override` or the configured directory and wire the service.
pub(crate) fn catalog_service(
    config: &CatalogConfig,
    dir_override: Option<PathBuf>,
) -> Result<RecommendationService<ModuleCatalog>, AppError> {
    let dir = dir_override.unwrap_or_else(|| config.dir.clone());
    let catalog = ModuleCatalog::from_dir(dir)?;
    let reserved = ReservedModules::from_override(config.reserved_modules.as_deref());
    Ok(RecommendationService::new(Arc::new(catalog), reserved))
}
