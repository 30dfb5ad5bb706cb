use tracing::debug;

use crate::{
    card::{Card, CardKind, Color},
    constants::*,
    rng::GameRng,
};

/// A face-down pile. The top of the pile is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// The canonical 108 card deck, unshuffled.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in Color::PLAYABLE {
            // Block Cards
            for _ in 0..BLOCK_CARDS_PER_COLOR {
                cards.push(Card::new_unchecked(color, CardKind::Block));
            }

            // Rotate Cards
            for _ in 0..ROTATE_CARDS_PER_COLOR {
                cards.push(Card::new_unchecked(color, CardKind::Rotate));
            }

            // Add Two Cards
            for _ in 0..ADD_2_CARDS_PER_COLOR {
                cards.push(Card::new_unchecked(color, CardKind::Add2));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                if let Some(kind) = CardKind::from_number(*number) {
                    cards.push(Card::new_unchecked(color, kind));
                }
            }
        }

        for _ in 0..COLOR_SELECT_CARDS_IN_DECK {
            cards.push(Card::new_unchecked(Color::Wild, CardKind::ColorSelect));
        }

        for _ in 0..ADD_4_CARDS_IN_DECK {
            cards.push(Card::new_unchecked(Color::Wild, CardKind::AddFour));
        }

        Self(cards)
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub(crate) fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.0);
    }

    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Flips cards until a plain number card turns up.
    ///
    /// Returns the starter and every card flipped before it. The flipped cards are
    /// out of play for the rest of the round.
    pub(crate) fn draw_starting_card(&mut self) -> Option<(Card, Vec<Card>)> {
        let mut burned = Vec::new();
        loop {
            let card = self.draw()?;
            if card.number().is_some() {
                if !burned.is_empty() {
                    debug!(?burned, starter = %card, "set aside unusable starting cards");
                }
                return Some((card, burned));
            }
            burned.push(card);
        }
    }

    /// Replaces an empty pile with `cards`, shuffled.
    pub(crate) fn refill(&mut self, cards: Vec<Card>, rng: &mut GameRng) {
        debug_assert!(self.0.is_empty());
        self.0 = cards;
        self.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

/// The face-up pile. It always has a top card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardPile {
    below: Vec<Card>,
    top: Card,
}

impl DiscardPile {
    pub(crate) fn new(top: Card) -> Self {
        Self {
            below: Vec::new(),
            top,
        }
    }

    pub fn top(&self) -> &Card {
        &self.top
    }

    pub(crate) fn push(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.below.push(previous);
    }

    /// Takes every card except the top.
    pub(crate) fn take_below(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.below)
    }

    /// Bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.below.iter().chain(std::iter::once(&self.top))
    }

    pub fn cards_count(&self) -> usize {
        self.below.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::standard().cards_count(), TOTAL_CARDS_IN_DECK as usize);
    }

    #[test]
    fn new_deck_has_expected_composition() {
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in Deck::standard().cards() {
            *counts.entry(*card).or_default() += 1;
        }

        for color in Color::PLAYABLE {
            assert_eq!(counts[&Card::new(color, CardKind::Number0).unwrap()], 1);
            assert_eq!(counts[&Card::new(color, CardKind::Number9).unwrap()], 2);
            assert_eq!(counts[&Card::new(color, CardKind::Block).unwrap()], 2);
            assert_eq!(counts[&Card::new(color, CardKind::Rotate).unwrap()], 2);
            assert_eq!(counts[&Card::new(color, CardKind::Add2).unwrap()], 2);
        }
        assert_eq!(counts[&Card::wild(CardKind::ColorSelect).unwrap()], 4);
        assert_eq!(counts[&Card::wild(CardKind::AddFour).unwrap()], 4);
        assert!(Deck::standard().cards().iter().all(|card| Card::new(card.color(), card.kind()).is_ok()));
    }

    #[test]
    fn draw_takes_from_the_end() {
        let first = Card::new(Color::Red, CardKind::Number1).unwrap();
        let second = Card::new(Color::Blue, CardKind::Number2).unwrap();
        let mut deck = Deck::from(vec![first, second]);

        assert_eq!(deck.draw(), Some(second));
        assert_eq!(deck.draw(), Some(first));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn starting_card_skips_action_and_wild_cards() {
        let green_3 = Card::new(Color::Green, CardKind::Number3).unwrap();
        let red_block = Card::new(Color::Red, CardKind::Block).unwrap();
        let add_four = Card::wild(CardKind::AddFour).unwrap();
        let mut deck = Deck::from(vec![green_3, red_block, add_four]);

        let (starter, burned) = deck.draw_starting_card().unwrap();

        assert_eq!(starter, green_3);
        assert_eq!(burned, vec![add_four, red_block]);
        assert!(deck.is_empty());
    }

    #[test]
    fn starting_card_fails_without_number_cards() {
        let mut deck = Deck::from(vec![Card::wild(CardKind::ColorSelect).unwrap()]);
        assert_eq!(deck.draw_starting_card(), None);
    }

    #[test]
    fn discard_pile_keeps_top_when_taking_the_rest() {
        let red_1 = Card::new(Color::Red, CardKind::Number1).unwrap();
        let red_2 = Card::new(Color::Red, CardKind::Number2).unwrap();
        let red_3 = Card::new(Color::Red, CardKind::Number3).unwrap();
        let mut pile = DiscardPile::new(red_1);
        pile.push(red_2);
        pile.push(red_3);

        assert_eq!(pile.cards().copied().collect::<Vec<_>>(), vec![red_1, red_2, red_3]);
        assert_eq!(pile.take_below(), vec![red_1, red_2]);
        assert_eq!(pile.top(), &red_3);
        assert_eq!(pile.cards_count(), 1);
    }

    #[test]
    fn refill_shuffles_in_new_cards() {
        let mut rng = GameRng::new(3);
        let mut deck = Deck::default();
        let cards = Deck::standard().0;

        deck.refill(cards.clone(), &mut rng);

        let mut refilled = deck.cards().to_vec();
        refilled.sort();
        let mut expected = cards;
        expected.sort();
        assert_eq!(refilled, expected);
    }
}
