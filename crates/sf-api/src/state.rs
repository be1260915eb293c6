use std::fmt;
use std::sync::Arc;

use crate::ApiConfig;
use crate::feed::generator::{FactGenerator, OllamaGenerator};
use crate::feed::service::FactService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    /// The fact generation service.
    pub facts: FactService,
}

impl ApiState {
    /// Build the state for production: an Ollama-backed fact service.
    pub fn new(config: &ApiConfig) -> Self {
        let generator = OllamaGenerator::new(&config.ollama_url, config.ollama_model.clone());
        Self::with_generator(Arc::new(generator))
    }

    /// Build the state around any generator. Tests use this with a mock.
    pub fn with_generator(generator: Arc<dyn FactGenerator>) -> Self {
        Self {
            facts: FactService::new(generator),
        }
    }
}

impl fmt::Debug for ApiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiState").finish_non_exhaustive()
    }
}
