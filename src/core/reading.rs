use crate::domain::model::{Card, Position, Reading};
use crate::domain::ports::CardDrawer;
use crate::utils::error::Result;
use chrono::Utc;
use std::fmt::Write;

pub const SPREAD_SIZE: usize = 3;
pub const SPREAD_TYPE: &str = "Past-Present-Future";

const HEADER: &str = "[Tarot Reading]";
const CLOSING_REMARK: &str = "📝 **Overall Guidance**: Every card carries an important message. \
Take time to reflect on how they connect and what they suggest for your life.";
const EMPTY_READING: &str = "Unable to interpret: draw some tarot cards first.";

/// Three-card Past-Present-Future spread built on top of a [`CardDrawer`].
pub struct ReadingGenerator<D: CardDrawer> {
    drawer: D,
}

impl<D: CardDrawer> ReadingGenerator<D> {
    pub fn new(drawer: D) -> Self {
        Self { drawer }
    }

    pub fn perform_reading(&self) -> Result<Reading> {
        tracing::info!("Starting {} reading", SPREAD_TYPE);

        let drawn = self.drawer.draw(SPREAD_SIZE)?;
        let narrative = compose_narrative(&drawn);
        let reading = Reading::new(drawn, SPREAD_TYPE, narrative, Utc::now());

        tracing::info!(
            "Reading complete with {} card(s): {}",
            reading.drawn_cards().len(),
            reading
                .drawn_cards()
                .iter()
                .map(|c| c.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(reading)
    }
}

pub fn compose_narrative(cards: &[Card]) -> String {
    if cards.is_empty() {
        return EMPTY_READING.to_string();
    }

    let mut text = String::new();
    text.push_str(HEADER);
    text.push_str("\n\n");

    for (index, card) in cards.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(
            text,
            "🔮 **{}**: {} ({})",
            Position::from_index(index).label(),
            card.name,
            card.orientation_label()
        );
        let _ = writeln!(text, "{}", card.current_meaning());
        let _ = writeln!(text, "{}\n", card.description);
    }

    text.push_str(CLOSING_REMARK);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Arcana, Suit};
    use crate::utils::error::TarotError;

    struct FixedHand(Vec<Card>);

    impl CardDrawer for FixedHand {
        fn draw(&self, count: usize) -> Result<Vec<Card>> {
            if count > self.0.len() {
                return Err(TarotError::invalid_argument("not enough cards"));
            }
            Ok(self.0[..count].to_vec())
        }
    }

    fn card(id: &str, name: &str, reversed: bool) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            english_name: name.to_string(),
            upright_meaning: format!("{} upright", name),
            reversed_meaning: format!("{} reversed", name),
            description: format!("{} description", name),
            arcana: Arcana::Minor(Suit::Swords),
            reversed,
        }
    }

    #[test]
    fn test_narrative_layout() {
        let hand = vec![card("a", "Alpha", false), card("b", "Beta", true)];
        let text = compose_narrative(&hand);

        assert!(text.starts_with("[Tarot Reading]\n\n"));
        assert!(text.contains(
            "🔮 **Past/Root**: Alpha (Upright)\nAlpha upright\nAlpha description\n\n"
        ));
        assert!(text.contains("🔮 **Present/Situation**: Beta (Reversed)\nBeta reversed\n"));
        assert!(!text.contains("Beta upright"));
        assert!(text.ends_with(CLOSING_REMARK));
    }

    #[test]
    fn test_empty_narrative() {
        assert_eq!(compose_narrative(&[]), EMPTY_READING);
    }

    #[test]
    fn test_extra_cards_fall_back_to_numbered_labels() {
        let hand: Vec<Card> = (0..4)
            .map(|i| card(&i.to_string(), &format!("C{}", i), false))
            .collect();
        let text = compose_narrative(&hand);
        assert!(text.contains("**Card 4**: C3"));
    }

    #[test]
    fn test_perform_reading_uses_three_cards() {
        let hand = FixedHand(vec![
            card("a", "Alpha", false),
            card("b", "Beta", true),
            card("c", "Gamma", false),
            card("d", "Delta", false),
        ]);
        let reading = ReadingGenerator::new(hand).perform_reading().unwrap();

        assert_eq!(reading.spread_type(), SPREAD_TYPE);
        let labelled: Vec<(String, &str)> = reading
            .positioned_cards()
            .map(|(pos, c)| (pos.label(), c.id.as_str()))
            .collect();
        assert_eq!(
            labelled,
            vec![
                ("Past/Root".to_string(), "a"),
                ("Present/Situation".to_string(), "b"),
                ("Future/Advice".to_string(), "c"),
            ]
        );
        assert!(!reading.narrative().contains("Delta"));
    }

    #[test]
    fn test_drawer_errors_propagate() {
        let generator = ReadingGenerator::new(FixedHand(vec![card("a", "Alpha", false)]));
        assert!(matches!(
            generator.perform_reading(),
            Err(TarotError::InvalidArgument { .. })
        ));
    }
}
