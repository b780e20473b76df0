use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use super::{Card, GameConfig, PokerError, Suit, Value, cards_from_str, parse_cards};

/// A card as it plays inside a hand.
///
/// Natural cards play as themselves (an ace may also play low). Wild
/// cards show as aces until a hand decides what they stand for, then take
/// that value, and for flushes that suit as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayedCard {
    card: Card,
    rank: u8,
    suit: Option<Suit>,
    wild: bool,
}

impl PlayedCard {
    pub(crate) fn new(card: Card, wild: bool) -> Self {
        match card {
            Card::Standard { value, suit } if !wild => Self {
                card,
                rank: value.rank(),
                suit: Some(suit),
                wild: false,
            },
            _ => Self {
                card,
                rank: Value::Ace.rank(),
                suit: None,
                wild: true,
            },
        }
    }

    /// The same card playing as the given rank. A suit of `None` keeps
    /// whatever suit the card already shows.
    pub(crate) fn playing_as(self, rank: u8, suit: Option<Suit>) -> Self {
        Self {
            rank,
            suit: suit.or(self.suit),
            ..self
        }
    }

    /// The physical card.
    pub fn card(&self) -> Card {
        self.card
    }

    /// The rank this card plays as. See `Value::rank`.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The value this card plays as.
    pub fn value(&self) -> Value {
        Value::from_rank(self.rank)
    }

    /// The suit this card plays as, if it has one.
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn is_wild(&self) -> bool {
        self.wild
    }
}

impl fmt::Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self
            .suit
            .map(Suit::to_char)
            .unwrap_or_else(|| self.card.suit_char());
        write!(f, "{}{}", self.value().label(), suit)
    }
}

/// The cards a hand is made from.
///
/// Building a pool is where input gets checked: jokers need a game that
/// plays with them and no regular card may show up twice. The cards are
/// kept ordered strongest first with wild cards at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<PlayedCard>,
}

impl CardPool {
    /// Create a pool for the given game.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::{Card, CardPool, GameConfig, Suit, Value};
    ///
    /// let config = GameConfig::joker_poker();
    /// let pool = CardPool::new(
    ///     vec![Card::Joker, Card::new(Value::Two, Suit::Heart), Card::new(Value::King, Suit::Heart)],
    ///     &config,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!("Kh", pool.cards()[0].to_string());
    /// assert_eq!("Ar", pool.cards()[2].to_string());
    /// ```
    pub fn new(cards: Vec<Card>, config: &GameConfig) -> Result<Self, PokerError> {
        if cards.is_empty() {
            return Err(PokerError::EmptyPool);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        let mut played = Vec::with_capacity(cards.len());
        for card in cards {
            if card.is_joker() {
                if !config.wild().allows_joker() {
                    return Err(PokerError::MalformedCard(card.to_string()));
                }
            } else if !seen.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            played.push(PlayedCard::new(card, config.is_wild(&card)));
        }

        // Stable, so equal ranks keep the order they were given in.
        played.sort_by_key(|c| (c.is_wild(), Reverse(c.rank())));
        Ok(Self { cards: played })
    }

    /// Create a pool from card tokens such as `["As", "Td", "Or"]`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], config: &GameConfig) -> Result<Self, PokerError> {
        Self::new(parse_cards(tokens)?, config)
    }

    /// Create a pool from one string of cards, e.g. `"As Td Or"`.
    pub fn new_from_str(cards: &str, config: &GameConfig) -> Result<Self, PokerError> {
        Self::new(cards_from_str(cards)?, config)
    }

    pub fn cards(&self) -> &[PlayedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayedCard> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a CardPool {
    type Item = &'a PlayedCard;
    type IntoIter = std::slice::Iter<'a, PlayedCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
