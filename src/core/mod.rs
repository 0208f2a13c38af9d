pub mod catalog;
mod catalog_data;
pub mod deck;
pub mod reading;

pub use crate::domain::model::{Arcana, Card, CardType, Position, Reading, Suit};
pub use crate::domain::ports::{CardDrawer, ConfigProvider};
pub use crate::utils::error::Result;
