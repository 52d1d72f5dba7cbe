pub mod config;
pub mod controllers;
pub mod dto;
pub mod routes;
pub mod utils;

use config::ServiceConfig;
use std::sync::Arc;
use utils::generator::{HttpQrGenerator, QrGenerator};

pub struct ServiceState {
    pub config: ServiceConfig,
    pub generator: Arc<dyn QrGenerator>,
}

impl ServiceState {
    /// Builds the state around an HTTP client for the configured endpoint.
    pub fn new(config: ServiceConfig) -> Result<Self, String> {
        let endpoint = config.generator.get_endpoint()?;
        let generator = Arc::new(HttpQrGenerator::new(endpoint));
        Ok(Self::with_generator(config, generator))
    }

    pub fn with_generator(config: ServiceConfig, generator: Arc<dyn QrGenerator>) -> Self {
        Self { config, generator }
    }
}
