//! This is the core module. It holds everything needed to judge a hand
//! of any game: cards, pools, game definitions, hand categories and the
//! solver that picks winners.

/// card.rs has value, suit and card.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, JOKER_TOKEN, LOW_ACE_RANK, Suit, Value, cards_from_str, parse_cards};

/// The error type shared by the whole crate.
mod error;
pub use self::error::PokerError;

/// The validated, ordered cards a hand is made from.
mod pool;
pub use self::pool::{CardPool, PlayedCard};

/// Game definitions and the named variants.
mod game;
pub use self::game::{GameConfig, Wild};

/// Hand categories.
mod rank;
pub use self::rank::Category;

mod kinds;
mod runs;

/// A resolved hand.
mod hand;
pub use self::hand::Hand;

/// Picking the best hand and the winners.
mod solver;
pub use self::solver::{resolve, solve, solve_qualified, winners};

/// We want to be able to iterate over sets of cards.
mod card_iter;
pub use self::card_iter::CardIter;
pub(crate) use self::card_iter::remaining;
