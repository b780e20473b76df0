use std::collections::HashSet;
use std::str::FromStr;

use super::{Card, Category, PokerError, Suit, Value};

/// Which cards are wild in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wild {
    #[default]
    None,
    /// Every two is wild.
    Deuces,
    /// The joker is wild.
    Joker,
}

impl Wild {
    pub fn is_wild(self, card: &Card) -> bool {
        match (self, card) {
            (Wild::Joker, Card::Joker) => true,
            (Wild::Deuces, Card::Standard { value, .. }) => *value == Value::Two,
            _ => false,
        }
    }

    pub fn allows_joker(self) -> bool {
        self == Wild::Joker
    }
}

/// The rules of a poker variant that matter when judging a hand.
///
/// `categories` lists the hands the variant knows, strongest first. A
/// hand's strength is its position counted from the weakest, so the
/// last category is always `HighCard`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GameDefinition"))]
pub struct GameConfig {
    name: String,
    categories: Vec<Category>,
    wild: Wild,
    bug: bool,
    cards_in_hand: usize,
    run_length: usize,
    wheel_high: bool,
    lowest_qualified: Option<Vec<Card>>,
}

fn cards(list: &[(Value, Suit)]) -> Vec<Card> {
    list.iter().map(|&(v, s)| Card::new(v, s)).collect()
}

const STANDARD: [Category; 9] = [
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::OnePair,
    Category::HighCard,
];

const FOUR_CARD: [Category; 8] = [
    Category::FourOfAKind,
    Category::StraightFlush,
    Category::ThreeOfAKind,
    Category::Flush,
    Category::Straight,
    Category::TwoPair,
    Category::OnePair,
    Category::HighCard,
];

impl GameConfig {
    /// Define a custom game. Every other setting starts out as in a
    /// standard five card game and can be changed with the `with_*`
    /// methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::{Category, GameConfig, Wild};
    ///
    /// let config = GameConfig::new(
    ///     "pairs",
    ///     vec![Category::ThreeOfAKind, Category::OnePair, Category::HighCard],
    /// )
    /// .unwrap()
    /// .with_cards_in_hand(3)
    /// .with_wild(Wild::Joker);
    ///
    /// assert_eq!(Some(2), config.strength(Category::ThreeOfAKind));
    /// assert_eq!(None, config.strength(Category::Flush));
    /// ```
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Result<Self, PokerError> {
        let mut seen = HashSet::with_capacity(categories.len());
        if let Some(dup) = categories.iter().find(|c| !seen.insert(**c)) {
            return Err(PokerError::InvalidGame(format!("{} is listed twice", dup.name())));
        }
        if categories.last() != Some(&Category::HighCard) {
            return Err(PokerError::InvalidGame(
                "the weakest hand must be High Card".to_string(),
            ));
        }
        Ok(Self::preset(name, &categories))
    }

    fn preset(name: impl Into<String>, categories: &[Category]) -> Self {
        Self {
            name: name.into(),
            categories: categories.to_vec(),
            wild: Wild::None,
            bug: false,
            cards_in_hand: 5,
            run_length: 5,
            wheel_high: false,
            lowest_qualified: None,
        }
    }

    pub fn with_wild(mut self, wild: Wild) -> Self {
        self.wild = wild;
        self
    }

    /// The wild card only completes straights and flushes. Otherwise it
    /// plays as an ace.
    pub fn with_bug(mut self) -> Self {
        self.bug = true;
        self
    }

    /// How many cards make a hand, kickers included.
    pub fn with_cards_in_hand(mut self, cards: usize) -> Self {
        self.cards_in_hand = cards.max(1);
        self.run_length = self.run_length.min(self.cards_in_hand);
        self
    }

    /// How many cards a straight or flush needs.
    pub fn with_run_length(mut self, cards: usize) -> Self {
        self.run_length = cards.clamp(2, 13);
        self
    }

    /// A-2-3-4-5 beats every straight except the ace high one.
    pub fn with_wheel_high(mut self) -> Self {
        self.wheel_high = true;
        self
    }

    /// Hands weaker than the one these cards make do not qualify.
    pub fn with_lowest_qualified(mut self, cards: Vec<Card>) -> Self {
        self.lowest_qualified = Some(cards);
        self
    }

    /// Standard five card poker.
    pub fn standard() -> Self {
        Self::preset("standard", &STANDARD)
    }

    /// Jacks or better video poker.
    pub fn jacks_or_better() -> Self {
        use Suit::*;
        use Value::*;
        Self::preset("jacksbetter", &STANDARD).with_lowest_qualified(cards(&[
            (Jack, Club),
            (Jack, Diamond),
            (Four, Heart),
            (Three, Spade),
            (Two, Club),
        ]))
    }

    /// Joker poker, a 53 card deck with the joker wild.
    pub fn joker_poker() -> Self {
        use Suit::*;
        use Value::*;
        Self::preset(
            "joker",
            &[
                Category::NaturalRoyalFlush,
                Category::FiveOfAKind,
                Category::WildRoyalFlush,
                Category::StraightFlush,
                Category::FourOfAKind,
                Category::FullHouse,
                Category::Flush,
                Category::Straight,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_wild(Wild::Joker)
        .with_lowest_qualified(cards(&[
            (Three, Diamond),
            (Three, Heart),
            (Two, Spade),
            (Two, Club),
            (Four, Club),
        ]))
    }

    /// Deuces wild video poker.
    pub fn deuces_wild() -> Self {
        use Suit::*;
        use Value::*;
        Self::preset(
            "deuceswild",
            &[
                Category::NaturalRoyalFlush,
                Category::FourWilds,
                Category::WildRoyalFlush,
                Category::FiveOfAKind,
                Category::StraightFlush,
                Category::FourOfAKind,
                Category::FullHouse,
                Category::Flush,
                Category::Straight,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_wild(Wild::Deuces)
        .with_lowest_qualified(cards(&[
            (Five, Club),
            (Four, Diamond),
            (Three, Spade),
            (Three, Club),
            (Three, Diamond),
        ]))
    }

    /// Three card poker. The dealer needs queen high to qualify.
    pub fn three_card() -> Self {
        use Suit::*;
        use Value::*;
        Self::preset(
            "threecard",
            &[
                Category::StraightFlush,
                Category::ThreeOfAKind,
                Category::Straight,
                Category::Flush,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_cards_in_hand(3)
        .with_run_length(3)
        .with_lowest_qualified(cards(&[(Queen, Heart), (Three, Spade), (Two, Club)]))
    }

    /// Four card poker.
    pub fn four_card() -> Self {
        Self::preset("fourcard", &FOUR_CARD)
            .with_cards_in_hand(4)
            .with_run_length(4)
    }

    /// Four card poker where the bonus needs a pair of aces.
    pub fn four_card_bonus() -> Self {
        use Suit::*;
        use Value::*;
        Self::preset("fourcardbonus", &FOUR_CARD)
            .with_cards_in_hand(4)
            .with_run_length(4)
            .with_lowest_qualified(cards(&[
                (Ace, Club),
                (Ace, Diamond),
                (Three, Heart),
                (Two, Spade),
            ]))
    }

    /// Pai Gow Poker over all seven cards, used to decide how to set them.
    pub fn pai_gow() -> Self {
        Self::preset(
            "paigowpokerfull",
            &[
                Category::FiveOfAKind,
                Category::FourOfAKindPairPlus,
                Category::StraightFlush,
                Category::Flush,
                Category::Straight,
                Category::FourOfAKind,
                Category::TwoThreeOfAKind,
                Category::ThreeOfAKindTwoPair,
                Category::FullHouse,
                Category::ThreeOfAKind,
                Category::ThreePair,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_pai_gow_joker()
        .with_cards_in_hand(7)
        .with_wheel_high()
    }

    /// Pai Gow Poker over all seven cards looking only at pairs, trips
    /// and quads.
    pub fn pai_gow_pairs() -> Self {
        Self::preset(
            "paigowpokeralt",
            &[
                Category::FiveOfAKind,
                Category::FourOfAKindPairPlus,
                Category::FourOfAKind,
                Category::TwoThreeOfAKind,
                Category::ThreeOfAKindTwoPair,
                Category::FullHouse,
                Category::ThreeOfAKind,
                Category::ThreePair,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_pai_gow_joker()
        .with_cards_in_hand(7)
    }

    /// The five card high hand of Pai Gow Poker.
    pub fn pai_gow_high() -> Self {
        Self::preset(
            "paigowpokerhi",
            &[
                Category::FiveOfAKind,
                Category::StraightFlush,
                Category::FourOfAKind,
                Category::FullHouse,
                Category::Flush,
                Category::Straight,
                Category::ThreeOfAKind,
                Category::TwoPair,
                Category::OnePair,
                Category::HighCard,
            ],
        )
        .with_pai_gow_joker()
        .with_wheel_high()
    }

    /// The two card low hand of Pai Gow Poker.
    pub fn pai_gow_low() -> Self {
        Self::preset("paigowpokerlo", &[Category::OnePair, Category::HighCard])
            .with_pai_gow_joker()
            .with_cards_in_hand(2)
            .with_run_length(2)
    }

    fn with_pai_gow_joker(self) -> Self {
        self.with_wild(Wild::Joker).with_bug()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hands this game knows about, strongest first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn wild(&self) -> Wild {
        self.wild
    }

    pub fn is_bug(&self) -> bool {
        self.bug
    }

    pub fn cards_in_hand(&self) -> usize {
        self.cards_in_hand
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn wheel_high(&self) -> bool {
        self.wheel_high
    }

    pub fn lowest_qualified(&self) -> Option<&[Card]> {
        self.lowest_qualified.as_deref()
    }

    pub fn is_wild(&self, card: &Card) -> bool {
        self.wild.is_wild(card)
    }

    /// Strength of a category in this game, 0 for the weakest. `None`
    /// when the game does not have that hand.
    pub fn strength(&self, category: Category) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| *c == category)
            .map(|idx| self.categories.len() - 1 - idx)
    }

    /// Load a game from its JSON definition.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, PokerError> {
        serde_json::from_str(json).map_err(|e| PokerError::InvalidGame(e.to_string()))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for GameConfig {
    type Err = PokerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "standard" => Ok(Self::standard()),
            "jacksbetter" => Ok(Self::jacks_or_better()),
            "joker" => Ok(Self::joker_poker()),
            "deuceswild" => Ok(Self::deuces_wild()),
            "threecard" => Ok(Self::three_card()),
            "fourcard" => Ok(Self::four_card()),
            "fourcardbonus" => Ok(Self::four_card_bonus()),
            "paigowpokerfull" => Ok(Self::pai_gow()),
            "paigowpokeralt" => Ok(Self::pai_gow_pairs()),
            "paigowpokerhi" => Ok(Self::pai_gow_high()),
            "paigowpokerlo" => Ok(Self::pai_gow_low()),
            _ => Err(PokerError::UnknownGame(name.to_string())),
        }
    }
}

/// The serialized form of a game. Checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GameDefinition {
    name: String,
    categories: Vec<Category>,
    #[serde(default)]
    wild: Wild,
    #[serde(default)]
    bug: bool,
    cards_in_hand: Option<usize>,
    run_length: Option<usize>,
    #[serde(default)]
    wheel_high: bool,
    #[serde(default)]
    lowest_qualified: Option<Vec<Card>>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameDefinition> for GameConfig {
    type Error = PokerError;

    fn try_from(def: GameDefinition) -> Result<Self, Self::Error> {
        let mut config = GameConfig::new(def.name, def.categories)?.with_wild(def.wild);
        if def.bug {
            config = config.with_bug();
        }
        if let Some(cards) = def.cards_in_hand {
            config = config.with_cards_in_hand(cards);
        }
        if let Some(cards) = def.run_length {
            config = config.with_run_length(cards);
        }
        if def.wheel_high {
            config = config.with_wheel_high();
        }
        if let Some(cards) = def.lowest_qualified {
            if cards.is_empty() {
                return Err(PokerError::InvalidGame(
                    "the lowest qualifying hand needs cards".to_string(),
                ));
            }
            config = config.with_lowest_qualified(cards);
        }
        Ok(config)
    }
}
