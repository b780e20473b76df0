use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// The rank an ace takes when it plays below the two, as in A-2-3-4-5.
pub const LOW_ACE_RANK: u8 = 0;

impl Value {
    /// Get all of the `Value`'s that are possible.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The strength of this value inside a hand. Two is 1 and a (high)
    /// ace is 13, which leaves 0 for an ace played low.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::{LOW_ACE_RANK, Value};
    ///
    /// assert_eq!(1, Value::Two.rank());
    /// assert_eq!(13, Value::Ace.rank());
    /// assert_eq!(Value::Ace, Value::from_rank(LOW_ACE_RANK));
    /// ```
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of `rank`. Both 0 and 13 are aces.
    pub fn from_rank(rank: u8) -> Value {
        match rank {
            LOW_ACE_RANK => Value::Ace,
            r => VALUES[usize::from(r.min(13)) - 1],
        }
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// How the value is written when describing a hand. Tens are
    /// spelled `10`.
    pub fn label(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::King => "K",
            Value::Queen => "Q",
            Value::Jack => "J",
            Value::Ten => "10",
            Value::Nine => "9",
            Value::Eight => "8",
            Value::Seven => "7",
            Value::Six => "6",
            Value::Five => "5",
            Value::Four => "4",
            Value::Three => "3",
            Value::Two => "2",
        }
    }
}

/// Enum for the four different suits.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Suits are read without regard to case.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The token used for the joker. Any `O` plus one character parses as
/// the joker; other tokens ending in `r`, such as `2r`, are malformed.
pub const JOKER_TOKEN: &str = "Or";

/// A physical card. Either one of the 52 regular cards or a joker.
///
/// Whether a card is wild depends on the game being played, so a deuce
/// is a `Standard` card even in deuces wild.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Card {
    Standard { value: Value, suit: Suit },
    Joker,
}

impl Card {
    /// Create a regular card.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ten, Suit::Spade);
    /// assert_eq!("10s", card.to_string());
    /// assert_eq!(card, "Ts".parse().unwrap());
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Card::Standard { value, suit }
    }

    pub fn value(&self) -> Option<Value> {
        match self {
            Card::Standard { value, .. } => Some(*value),
            Card::Joker => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }

    /// The suit character printed for the card. The joker has no suit
    /// and prints as `r`.
    pub(crate) fn suit_char(&self) -> char {
        match self {
            Card::Standard { suit, .. } => suit.to_char(),
            Card::Joker => 'r',
        }
    }
}

impl FromStr for Card {
    type Err = PokerError;

    /// Parse a two character token such as `As` or `Td`. `10` is taken
    /// for a ten and any token starting with `O` is the joker.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || PokerError::MalformedCard(token.to_string());
        let (value, suit) = match token.strip_prefix("10") {
            Some(rest) => (Some(Value::Ten), rest),
            None => {
                let mut chars = token.chars();
                match chars.next() {
                    Some('O') if chars.clone().count() == 1 => return Ok(Card::Joker),
                    Some(c) => (Value::from_char(c), chars.as_str()),
                    None => return Err(malformed()),
                }
            }
        };

        let mut suit_chars = suit.chars();
        match (value, suit_chars.next(), suit_chars.next()) {
            (Some(value), Some(s), None) => Suit::from_char(s)
                .map(|suit| Card::new(value, suit))
                .ok_or_else(malformed),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { value, suit } => write!(f, "{}{}", value.label(), suit.to_char()),
            Card::Joker => f.write_str(JOKER_TOKEN),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a list of card tokens.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, PokerError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Parse cards written in one string, separated by whitespace or commas.
///
/// # Examples
///
/// ```
/// use poker_solver::core::{Card, cards_from_str};
///
/// let cards = cards_from_str("As Kd, Or").unwrap();
/// assert_eq!(3, cards.len());
/// assert_eq!(Card::Joker, cards[2]);
/// ```
pub fn cards_from_str(cards: &str) -> Result<Vec<Card>, PokerError> {
    cards
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Some(Suit::Spade), c.suit());
        assert_eq!(Some(Value::Three), c.value());
        assert!(!c.is_joker());
    }

    #[test]
    fn test_parse_values_and_suits() {
        let c: Card = "Kh".parse().unwrap();
        assert_eq!(Card::new(Value::King, Suit::Heart), c);

        let c: Card = "2D".parse().unwrap();
        assert_eq!(Card::new(Value::Two, Suit::Diamond), c);

        let c: Card = "10c".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Club), c);
    }

    #[test]
    fn test_parse_joker() {
        assert_eq!(Card::Joker, "Or".parse::<Card>().unwrap());
        assert_eq!(None, Card::Joker.suit());
        assert_eq!(None, Card::Joker.value());
        assert_eq!(Card::Joker, "Ox".parse::<Card>().unwrap());
        assert_eq!(
            Err(PokerError::MalformedCard("2r".to_string())),
            "2r".parse::<Card>()
        );
    }

    #[test]
    fn test_parse_malformed() {
        for token in ["", "A", "Ax", "1s", "Asd", "kd", "O", "Orr"] {
            assert_eq!(
                Err(PokerError::MalformedCard(token.to_string())),
                token.parse::<Card>(),
                "{token}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("As", Card::new(Value::Ace, Suit::Spade).to_string());
        assert_eq!("10d", Card::new(Value::Ten, Suit::Diamond).to_string());
        assert_eq!("Or", Card::Joker.to_string());
    }

    #[test]
    fn test_rank_round_trip() {
        for v in Value::values() {
            assert_eq!(v, Value::from_rank(v.rank()));
        }
        assert_eq!(Value::Ace, Value::from_rank(LOW_ACE_RANK));
    }

    #[test]
    fn test_cards_from_str() {
        let cards = cards_from_str("Ad,Kd  Qd\tJd").unwrap();
        assert_eq!(4, cards.len());
        assert!(cards_from_str("Ad Kx").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_token() {
        let card = Card::new(Value::Ten, Suit::Heart);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!("\"10h\"", json);
        assert_eq!(card, serde_json::from_str::<Card>(&json).unwrap());
        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }
}
