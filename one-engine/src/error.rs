use thiserror::Error;

use crate::card::{CardKind, Color};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("A {kind} card cannot have the color {color}")]
    InvalidCard { color: Color, kind: CardKind },
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("The deck ran out before a plain number card could be flipped")]
    NoStartingCard,
    #[error("Dealing needs {needed} cards but only {available} are left")]
    DeckExhausted { needed: usize, available: usize },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
