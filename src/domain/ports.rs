use crate::domain::model::Card;
use crate::utils::error::Result;

/// Source of freshly shuffled cards for a spread.
pub trait CardDrawer: Send + Sync {
    fn draw(&self, count: usize) -> Result<Vec<Card>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn api_prefix(&self) -> &str;
    fn reversal_probability(&self) -> f64;
    fn seed(&self) -> Option<u64>;
}

impl<T: CardDrawer + ?Sized> CardDrawer for std::sync::Arc<T> {
    fn draw(&self, count: usize) -> Result<Vec<Card>> {
        (**self).draw(count)
    }
}
