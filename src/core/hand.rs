use std::cmp::Ordering;
use std::fmt;

use super::{CardPool, Category, GameConfig, PlayedCard, kinds};

/// The best hand found in a pool of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand {
    category: Category,
    strength: usize,
    pool: Vec<PlayedCard>,
    cards: Vec<PlayedCard>,
    description: String,
    qualified: bool,
}

impl Hand {
    /// Try to make a hand of one category out of the pool. `None` when the
    /// cards don't make it, or when the game has no such hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::{CardPool, Category, GameConfig, Hand};
    ///
    /// let config = GameConfig::standard();
    /// let pool = CardPool::new_from_str("5d 5h 3h 3c Qh Qd Qs", &config).unwrap();
    ///
    /// let hand = Hand::evaluate(Category::FullHouse, &pool, &config).unwrap();
    /// assert_eq!("Full House, Q's over 5's", hand.description());
    /// assert!(Hand::evaluate(Category::Straight, &pool, &config).is_none());
    /// ```
    pub fn evaluate(category: Category, pool: &CardPool, config: &GameConfig) -> Option<Hand> {
        let strength = config.strength(category)?;
        let made = category.evaluate(pool, config)?;
        Some(Hand {
            category,
            strength,
            pool: pool.cards().to_vec(),
            cards: made.cards,
            description: made.description,
            qualified: true,
        })
    }

    /// A high card hand regardless of what the game lists.
    pub(crate) fn high_card(pool: &CardPool, config: &GameConfig) -> Hand {
        let cards = kinds::high_card(pool, config);
        let description = cards
            .first()
            .map(|c| format!("{} High", c.value().label()))
            .unwrap_or_default();
        Hand {
            category: Category::HighCard,
            strength: config.strength(Category::HighCard).unwrap_or_default(),
            pool: pool.cards().to_vec(),
            cards,
            description,
            qualified: true,
        }
    }

    pub(crate) fn disqualify(&mut self) {
        self.qualified = false;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Display name of the category, e.g. `Two Pair`.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Where the category ranks in its game. Higher is better.
    pub fn strength(&self) -> usize {
        self.strength
    }

    /// Every card the hand was made from, strongest first.
    pub fn pool(&self) -> &[PlayedCard] {
        &self.pool
    }

    /// The cards that make the hand, most important first.
    pub fn cards(&self) -> &[PlayedCard] {
        &self.cards
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified
    }

    /// Compare two hands of the same game. Category strength decides
    /// first, then the cards one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use poker_solver::core::{GameConfig, solve};
    ///
    /// let config = GameConfig::standard();
    /// let six_high = solve(&["2s", "3s", "4h", "5c", "6s"], &config).unwrap();
    /// let wheel = solve(&["As", "2s", "3s", "4h", "5c"], &config).unwrap();
    ///
    /// assert_eq!(Ordering::Greater, six_high.compare(&wheel));
    /// ```
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.strength.cmp(&other.strength).then_with(|| {
            self.cards
                .iter()
                .map(PlayedCard::rank)
                .cmp(other.cards.iter().map(PlayedCard::rank))
        })
    }

    pub fn loses_to(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
