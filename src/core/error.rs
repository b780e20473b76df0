use thiserror::Error;

use super::Card;

/// This is the core error type for the solver. It uses
/// `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse card {0:?}")]
    MalformedCard(String),
    #[error("Card {0} is in the hand more than once")]
    DuplicateCard(Card),
    #[error("Expected {expected} cards but found {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("A hand needs at least one card")]
    EmptyPool,
    #[error("Unknown game {0:?}")]
    UnknownGame(String),
    #[error("Invalid game definition: {0}")]
    InvalidGame(String),
}
