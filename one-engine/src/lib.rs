//! Rules core for a shedding card game in the UNO family.
//!
//! A [`game::GameState`] owns one round. Every change goes through
//! [`game::GameState::step`] (or its typed form [`game::GameState::play_turn`]),
//! which either applies the action, rejects it without touching anything, or
//! reports that the round is over.

pub mod card;
pub mod compat;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod rng;
pub mod rules;
pub mod turn;

pub use card::{Card, CardKind, Color};
pub use error::EngineError;
pub use game::GameState;
pub use rng::GameRng;
pub use rules::{ChallengeBasis, RuleSet};
pub use turn::{Direction, PlayAction, Rejection, TurnAction, TurnOutcome};
