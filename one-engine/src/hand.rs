use crate::card::Card;

/// The cards held at one seat, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
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

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.0.remove(index)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
