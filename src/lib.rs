pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::AppConfig;

pub use app::{router, AppState};
pub use crate::core::catalog::Catalog;
pub use crate::core::deck::{CardListing, DeckOptions, DeckService};
pub use crate::core::reading::ReadingGenerator;
pub use domain::model::{Arcana, Card, CardType, Position, Reading, Suit};
pub use utils::error::{Result, TarotError};
