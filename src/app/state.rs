use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::core::deck::{DeckOptions, DeckService};
use crate::core::reading::ReadingGenerator;
use crate::utils::error::Result;
use std::sync::Arc;

/// Everything a request handler needs, built once at startup and shared
/// through axum's `State` extractor.
pub struct AppState {
    pub deck: Arc<DeckService>,
    pub readings: ReadingGenerator<Arc<DeckService>>,
}

impl AppState {
    pub fn new(deck: DeckService) -> Self {
        let deck = Arc::new(deck);
        Self {
            readings: ReadingGenerator::new(Arc::clone(&deck)),
            deck,
        }
    }

    pub fn with_options(options: DeckOptions) -> Result<Self> {
        let catalog = Catalog::standard();
        Ok(Self::new(DeckService::with_options(&catalog, options)?))
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::with_options(config.deck_options())
    }
}

pub type SharedState = Arc<AppState>;
