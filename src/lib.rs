//! A poker hand solver.
//!
//! Give it the cards in a pool and the game being played, and it finds
//! the best hand those cards make, describes it, and compares it to other
//! hands to pick the winners.
//!
//! # Games
//!
//! Standard poker, jacks or better, joker poker, deuces wild, three card
//! and four card poker are all plain `GameConfig`s. Omaha and Pai Gow
//! Poker have their own modules since they decide which cards may be
//! combined.
//!
//! # Example
//!
//! ```
//! use poker_solver::core::{GameConfig, solve, winners};
//!
//! let config = GameConfig::standard();
//! let hands = vec![
//!     solve(&["Ad", "As", "Jc", "Th", "2d", "3c", "Kd"], &config).unwrap(),
//!     solve(&["Ad", "As", "Jc", "Th", "2d", "Qs", "Qd"], &config).unwrap(),
//! ];
//!
//! let won = winners(&hands);
//! assert_eq!("Two Pair, A's & Q's", won[0].description());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to the game played.
pub mod core;
/// Omaha, where hands must use exactly two hole cards.
pub mod omaha;
/// Pai Gow Poker, setting seven cards into a high and a low hand.
pub mod pai_gow;
