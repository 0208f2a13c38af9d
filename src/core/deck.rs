use crate::core::catalog::Catalog;
use crate::domain::model::{Card, Suit};
use crate::domain::ports::CardDrawer;
use crate::utils::error::{Result, TarotError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

pub const DEFAULT_REVERSAL_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct DeckOptions {
    pub reversal_probability: f64,
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            reversal_probability: DEFAULT_REVERSAL_PROBABILITY,
            seed: None,
        }
    }
}

/// Major arcana plus the minor arcana grouped by suit. Every suit has an
/// entry, even if empty.
#[derive(Debug, Clone)]
pub struct CardListing {
    pub major_arcana: Vec<Card>,
    pub minor_arcana: BTreeMap<Suit, Vec<Card>>,
}

impl CardListing {
    pub fn total(&self) -> usize {
        self.major_arcana.len() + self.minor_arcana.values().map(Vec::len).sum::<usize>()
    }
}

struct DeckState {
    cards: Vec<Card>,
    rng: StdRng,
}

impl DeckState {
    fn shuffle(&mut self, reversal_probability: f64) {
        self.cards.shuffle(&mut self.rng);
        for card in self.cards.iter_mut() {
            card.reversed = self.rng.gen_bool(reversal_probability);
        }
    }
}

/// Working copy of the catalog shared by every request.
///
/// Cards and RNG sit behind one mutex so a shuffle and the copy-out of the
/// draw that triggered it happen atomically. Every value handed out is a
/// clone; callers never see the deck's own cards.
pub struct DeckService {
    state: Mutex<DeckState>,
    // catalog position of each id, for listings in catalog order
    positions: HashMap<String, usize>,
    reversal_probability: f64,
}

impl DeckService {
    pub fn new(catalog: &Catalog) -> Self {
        Self::build(catalog, DEFAULT_REVERSAL_PROBABILITY, StdRng::from_entropy())
    }

    pub fn with_options(catalog: &Catalog, options: DeckOptions) -> Result<Self> {
        let p = options.reversal_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(TarotError::invalid_argument(format!(
                "reversal probability must be within [0, 1], got {}",
                p
            )));
        }
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::build(catalog, p, rng))
    }

    fn build(catalog: &Catalog, reversal_probability: f64, rng: StdRng) -> Self {
        let cards = catalog.all().to_vec();
        let positions = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.id.clone(), index))
            .collect();

        tracing::info!(
            "Deck initialised with {} cards ({} major, {} minor)",
            cards.len(),
            catalog.major().count(),
            cards.len() - catalog.major().count()
        );
        for suit in Suit::ALL {
            tracing::debug!(
                "Loaded {} cards for suit {}",
                catalog.minor_by_suit(suit).count(),
                suit
            );
        }

        Self {
            state: Mutex::new(DeckState { cards, rng }),
            positions,
            reversal_probability,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, DeckState>> {
        self.state
            .lock()
            .map_err(|_| TarotError::internal("deck state lock poisoned"))
    }

    pub fn reversal_probability(&self) -> f64 {
        self.reversal_probability
    }

    pub fn size(&self) -> Result<usize> {
        Ok(self.lock()?.cards.len())
    }

    /// Reorders the deck uniformly at random and re-rolls every card's
    /// orientation.
    pub fn shuffle(&self) -> Result<()> {
        self.lock()?.shuffle(self.reversal_probability);
        tracing::debug!("Deck shuffled");
        Ok(())
    }

    /// Shuffles, then returns copies of the top `count` cards.
    pub fn draw(&self, count: usize) -> Result<Vec<Card>> {
        let mut state = self.lock()?;
        let size = state.cards.len();
        if count == 0 || count > size {
            return Err(TarotError::invalid_argument(format!(
                "number of cards to draw must be between 1 and {}, got {}",
                size, count
            )));
        }

        state.shuffle(self.reversal_probability);
        let drawn: Vec<Card> = state.cards[..count].to_vec();
        tracing::debug!("Drew {} card(s)", drawn.len());
        Ok(drawn)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Card> {
        self.lock()?
            .cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or_else(|| TarotError::not_found(id))
    }

    /// Major arcana in catalog order, with their current orientation.
    pub fn list_major(&self) -> Result<Vec<Card>> {
        let mut major: Vec<Card> = self
            .lock()?
            .cards
            .iter()
            .filter(|card| card.is_major())
            .cloned()
            .collect();
        self.sort_catalog_order(&mut major);
        Ok(major)
    }

    pub fn list_all(&self) -> Result<CardListing> {
        let mut cards = self.lock()?.cards.clone();
        self.sort_catalog_order(&mut cards);

        let mut minor_arcana: BTreeMap<Suit, Vec<Card>> =
            Suit::ALL.iter().map(|suit| (*suit, Vec::new())).collect();
        let mut major_arcana = Vec::new();
        for card in cards {
            match card.suit() {
                Some(suit) => minor_arcana.entry(suit).or_default().push(card),
                None => major_arcana.push(card),
            }
        }

        Ok(CardListing {
            major_arcana,
            minor_arcana,
        })
    }

    fn sort_catalog_order(&self, cards: &mut [Card]) {
        cards.sort_by_key(|card| {
            self.positions.get(&card.id).copied().unwrap_or(usize::MAX)
        });
    }
}

impl CardDrawer for DeckService {
    fn draw(&self, count: usize) -> Result<Vec<Card>> {
        DeckService::draw(self, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> DeckService {
        let options = DeckOptions {
            seed: Some(seed),
            ..DeckOptions::default()
        };
        DeckService::with_options(&Catalog::standard(), options).unwrap()
    }

    #[test]
    fn test_size() {
        assert_eq!(seeded(1).size().unwrap(), 78);
    }

    #[test]
    fn test_draw_bounds() {
        let deck = seeded(2);
        assert!(matches!(deck.draw(0), Err(TarotError::InvalidArgument { .. })));
        assert!(matches!(deck.draw(79), Err(TarotError::InvalidArgument { .. })));

        let all = deck.draw(78).unwrap();
        let ids: HashSet<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 78);
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let deck = seeded(3);
        deck.shuffle().unwrap();
        let listing = deck.list_all().unwrap();
        assert_eq!(listing.total(), 78);
        assert_eq!(listing.major_arcana.len(), 22);
        assert_eq!(listing.major_arcana[0].id, "0");
    }

    #[test]
    fn test_list_all_has_every_suit_key() {
        let listing = seeded(4).list_all().unwrap();
        let keys: Vec<Suit> = listing.minor_arcana.keys().copied().collect();
        assert_eq!(keys, Suit::ALL.to_vec());
        assert!(listing.minor_arcana.values().all(|cards| cards.len() == 14));
    }

    #[test]
    fn test_zero_probability_never_reverses() {
        let options = DeckOptions {
            reversal_probability: 0.0,
            seed: Some(5),
        };
        let deck = DeckService::with_options(&Catalog::standard(), options).unwrap();
        for _ in 0..20 {
            assert!(deck.draw(78).unwrap().iter().all(|c| !c.reversed));
        }
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let options = DeckOptions {
            reversal_probability: 1.2,
            seed: None,
        };
        assert!(DeckService::with_options(&Catalog::standard(), options).is_err());
    }

    #[test]
    fn test_same_seed_same_draw() {
        let ids = |deck: DeckService| -> Vec<String> {
            deck.draw(5).unwrap().into_iter().map(|c| c.id).collect()
        };
        assert_eq!(ids(seeded(42)), ids(seeded(42)));
    }
}
