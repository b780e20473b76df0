//! Omaha hands.
//!
//! A player holds four cards and shares a five card board. The hand must
//! use exactly two of the hole cards and three from the board, so every
//! such combination is tried and the best one kept.

use tracing::{Level, event};

use crate::core::{Card, CardIter, CardPool, GameConfig, Hand, PokerError, parse_cards, resolve};

/// Cards on the board.
pub const BOARD_CARDS: usize = 5;
/// Cards each player holds.
pub const HOLE_CARDS: usize = 4;

const BOARD_USED: usize = 3;
const HOLE_USED: usize = 2;

/// Best standard poker hand from a board and a player's hole cards.
///
/// # Examples
///
/// ```
/// use poker_solver::omaha;
///
/// let hand = omaha::solve(&["As", "4h", "Kd", "3h", "5h"], &["Ah", "Ks", "4d", "2h"]).unwrap();
/// assert_eq!("Straight Flush", hand.name());
///
/// let hand = omaha::solve(&["Ah", "4h", "Kd", "3h", "5h"], &["As", "Ks", "4d", "2h"]).unwrap();
/// assert_ne!("Straight Flush", hand.name());
/// ```
pub fn solve<S: AsRef<str>>(board: &[S], hole: &[S]) -> Result<Hand, PokerError> {
    solve_with_config(board, hole, &GameConfig::standard())
}

/// Like `solve` but judging each combination with the given game.
pub fn solve_with_config<S: AsRef<str>>(
    board: &[S],
    hole: &[S],
    config: &GameConfig,
) -> Result<Hand, PokerError> {
    let board = parse_cards(board)?;
    let hole = parse_cards(hole)?;
    for (cards, expected) in [(&board, BOARD_CARDS), (&hole, HOLE_CARDS)] {
        if cards.len() != expected {
            return Err(PokerError::WrongCardCount {
                expected,
                found: cards.len(),
            });
        }
    }
    // Only built to reject cards that are both on the board and in hand.
    CardPool::new(board.iter().chain(&hole).copied().collect(), config)?;

    let judge = |cards: Vec<Card>| -> Result<Hand, PokerError> {
        Ok(resolve(&CardPool::new(cards, config)?, config))
    };
    // Start from the first combination so ties keep the earliest one.
    let mut best = judge(board[..BOARD_USED].iter().chain(&hole[..HOLE_USED]).copied().collect())?;
    for from_board in CardIter::new(&board, BOARD_USED) {
        for from_hole in CardIter::new(&hole, HOLE_USED) {
            let hand = judge(from_board.iter().chain(&from_hole).copied().collect())?;
            if best.loses_to(&hand) {
                best = hand;
            }
        }
    }

    event!(
        Level::TRACE,
        description = best.description(),
        "best omaha combination"
    );
    Ok(best)
}
