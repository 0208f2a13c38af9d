use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    MajorArcana,
    MinorArcana,
}

/// Arcana membership. Minor cards always carry their suit, major cards never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arcana {
    Major,
    Minor(Suit),
}

impl Arcana {
    pub fn card_type(&self) -> CardType {
        match self {
            Arcana::Major => CardType::MajorArcana,
            Arcana::Minor(_) => CardType::MinorArcana,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Arcana::Major => None,
            Arcana::Minor(suit) => Some(*suit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub english_name: String,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub description: String,
    pub arcana: Arcana,
    pub reversed: bool,
}

impl Card {
    pub fn card_type(&self) -> CardType {
        self.arcana.card_type()
    }

    pub fn suit(&self) -> Option<Suit> {
        self.arcana.suit()
    }

    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// Meaning that applies to the card's current orientation.
    pub fn current_meaning(&self) -> &str {
        if self.reversed {
            &self.reversed_meaning
        } else {
            &self.upright_meaning
        }
    }

    pub fn orientation_label(&self) -> &'static str {
        if self.reversed {
            "Reversed"
        } else {
            "Upright"
        }
    }
}

/// Slot a drawn card occupies in the three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    PastRoot,
    PresentSituation,
    FutureAdvice,
    /// Zero-based index past the third slot. Unreachable while readings draw
    /// exactly three cards.
    Extra(usize),
}

impl Position {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Position::PastRoot,
            1 => Position::PresentSituation,
            2 => Position::FutureAdvice,
            n => Position::Extra(n),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Position::PastRoot => "Past/Root".to_string(),
            Position::PresentSituation => "Present/Situation".to_string(),
            Position::FutureAdvice => "Future/Advice".to_string(),
            Position::Extra(index) => format!("Card {}", index + 1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reading {
    drawn_cards: Vec<Card>,
    spread_type: String,
    narrative: String,
    timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn new(
        drawn_cards: Vec<Card>,
        spread_type: impl Into<String>,
        narrative: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            drawn_cards,
            spread_type: spread_type.into(),
            narrative,
            timestamp,
        }
    }

    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn_cards
    }

    pub fn spread_type(&self) -> &str {
        &self.spread_type
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Cards paired with the spread position they were dealt into.
    pub fn positioned_cards(&self) -> impl Iterator<Item = (Position, &Card)> {
        self.drawn_cards
            .iter()
            .enumerate()
            .map(|(index, card)| (Position::from_index(index), card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(reversed: bool) -> Card {
        Card {
            id: "cups_ace".to_string(),
            name: "Ace of Cups".to_string(),
            english_name: "Ace of Cups".to_string(),
            upright_meaning: "New love".to_string(),
            reversed_meaning: "Blocked emotions".to_string(),
            description: "An overflowing chalice.".to_string(),
            arcana: Arcana::Minor(Suit::Cups),
            reversed,
        }
    }

    #[test]
    fn test_current_meaning_follows_orientation() {
        assert_eq!(sample(false).current_meaning(), "New love");
        assert_eq!(sample(true).current_meaning(), "Blocked emotions");
        assert_eq!(sample(true).orientation_label(), "Reversed");
    }

    #[test]
    fn test_arcana_exposes_type_and_suit() {
        let card = sample(false);
        assert_eq!(card.card_type(), CardType::MinorArcana);
        assert_eq!(card.suit(), Some(Suit::Cups));
        assert_eq!(Arcana::Major.suit(), None);
        assert_eq!(Arcana::Major.card_type(), CardType::MajorArcana);
    }

    #[test]
    fn test_position_labels() {
        let labels: Vec<String> = (0..5).map(|i| Position::from_index(i).label()).collect();
        assert_eq!(
            labels,
            vec![
                "Past/Root",
                "Present/Situation",
                "Future/Advice",
                "Card 4",
                "Card 5"
            ]
        );
    }

    #[test]
    fn test_card_type_serializes_like_the_wire_format() {
        let json = serde_json::to_string(&CardType::MajorArcana).unwrap();
        assert_eq!(json, "\"MAJOR_ARCANA\"");
        assert_eq!(serde_json::to_string(&Suit::Pentacles).unwrap(), "\"pentacles\"");
    }
}
