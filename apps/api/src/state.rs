use std::sync::Arc;

use crate::config::Config;
use crate::export::Exporter;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only afterwards.
    pub registry: Arc<TemplateRegistry>,
    /// Holds the same registry as its resolver.
    pub exporter: Arc<Exporter>,
}

impl AppState {
    /// Builds the built-in registry and an exporter with that registry registered.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = Arc::new(TemplateRegistry::with_builtin(
            config.default_template_id.clone(),
        ));
        let exporter = Exporter::new(config.assets.clone());
        exporter.register_template_resolver(registry.clone())?;

        Ok(AppState {
            config,
            registry,
            exporter: Arc::new(exporter),
        })
    }
}
