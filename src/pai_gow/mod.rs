//! Pai Gow Poker.
//!
//! Seven cards are set into a five card high hand and a two card low hand.
//! The high hand has to rank at least as well as the low hand, otherwise
//! the hand is fouled. The deck carries one joker, which only completes
//! straights and flushes and otherwise plays as an ace.
//!
//! `solve` sets the cards the way the house does, `set_hands` takes a
//! setting chosen by a player, and `winners` settles a player against
//! the banker.

use std::cmp::Ordering;
use std::sync::LazyLock;

use tracing::{Level, event};

use crate::core::{Card, CardPool, GameConfig, Hand, PokerError, parse_cards, resolve};

mod house_way;

/// Cards dealt to each hand.
pub const HAND_CARDS: usize = 7;
/// Cards in the high hand.
pub const HIGH_CARDS: usize = 5;
/// Cards in the low hand.
pub const LOW_CARDS: usize = 2;

static FULL: LazyLock<GameConfig> = LazyLock::new(GameConfig::pai_gow);
static PAIRS: LazyLock<GameConfig> = LazyLock::new(GameConfig::pai_gow_pairs);
static HIGH: LazyLock<GameConfig> = LazyLock::new(GameConfig::pai_gow_high);
static LOW: LazyLock<GameConfig> = LazyLock::new(GameConfig::pai_gow_low);

/// Seven cards set into a high and a low hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaiGowHand {
    hi: Hand,
    lo: Hand,
}

impl PaiGowHand {
    pub(crate) fn from_cards(hi: Vec<Card>, lo: Vec<Card>) -> Result<Self, PokerError> {
        Ok(Self {
            hi: resolve(&CardPool::new(hi, &HIGH)?, &HIGH),
            lo: resolve(&CardPool::new(lo, &LOW)?, &LOW),
        })
    }

    /// The five card hand.
    pub fn hi(&self) -> &Hand {
        &self.hi
    }

    /// The two card hand.
    pub fn lo(&self) -> &Hand {
        &self.lo
    }

    /// The low hand ranks above the high hand.
    pub fn is_fouled(&self) -> bool {
        self.lo.compare(&self.hi) == Ordering::Greater
    }
}

/// Result of a player's hand against the banker's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Outcome {
    Banker = -1,
    Push = 0,
    Player = 1,
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> i8 {
        outcome as i8
    }
}

/// Set seven cards the house way.
///
/// # Examples
///
/// ```
/// use poker_solver::pai_gow;
///
/// let hand = pai_gow::solve(&["5c", "5s", "5h", "6c", "2d", "9h", "Qs"]).unwrap();
/// assert_eq!("Three of a Kind, 5's", hand.hi().description());
/// assert_eq!("Q High", hand.lo().description());
/// ```
pub fn solve<S: AsRef<str>>(tokens: &[S]) -> Result<PaiGowHand, PokerError> {
    let cards = parse_cards(tokens)?;
    if cards.len() != HAND_CARDS {
        return Err(PokerError::WrongCardCount {
            expected: HAND_CARDS,
            found: cards.len(),
        });
    }
    let hand = house_way::set(&cards)?;
    event!(
        Level::DEBUG,
        hi = hand.hi().description(),
        lo = hand.lo().description(),
        "house way"
    );
    Ok(hand)
}

/// Take a setting chosen by hand. The setting may be fouled.
///
/// # Examples
///
/// ```
/// use poker_solver::pai_gow;
///
/// let hand = pai_gow::set_hands(&["Kh", "Qs", "Td", "7c", "5s"], &["Ah", "2d"]).unwrap();
/// assert!(hand.is_fouled());
/// ```
pub fn set_hands<S: AsRef<str>>(hi: &[S], lo: &[S]) -> Result<PaiGowHand, PokerError> {
    let hi = parse_cards(hi)?;
    let lo = parse_cards(lo)?;
    for (cards, expected) in [(&hi, HIGH_CARDS), (&lo, LOW_CARDS)] {
        if cards.len() != expected {
            return Err(PokerError::WrongCardCount {
                expected,
                found: cards.len(),
            });
        }
    }
    // Only built to reject a card that is in both hands.
    CardPool::new(hi.iter().chain(&lo).copied().collect(), &FULL)?;
    PaiGowHand::from_cards(hi, lo)
}

/// Settle a player against the banker. A fouled player loses. Otherwise
/// the player must win both hands to win, the banker takes ties on
/// either hand, and splitting the two hands is a push.
///
/// # Examples
///
/// ```
/// use poker_solver::pai_gow::{self, Outcome};
///
/// let player = pai_gow::solve(&["Ah", "As", "Kd", "Kc", "9h", "8s", "2c"]).unwrap();
/// let banker = pai_gow::solve(&["Qh", "Qs", "Jd", "5c", "4h", "3s", "2h"]).unwrap();
/// assert_eq!(Outcome::Player, pai_gow::winners(&player, &banker));
/// assert_eq!(1, i8::from(pai_gow::winners(&player, &banker)));
/// ```
pub fn winners(player: &PaiGowHand, banker: &PaiGowHand) -> Outcome {
    if player.is_fouled() {
        return Outcome::Banker;
    }
    if banker.is_fouled() {
        return Outcome::Player;
    }
    let hi = player.hi.compare(&banker.hi);
    let lo = player.lo.compare(&banker.lo);
    match (hi, lo) {
        (Ordering::Greater, Ordering::Greater) => Outcome::Player,
        (Ordering::Greater, _) | (_, Ordering::Greater) => Outcome::Push,
        _ => Outcome::Banker,
    }
}
