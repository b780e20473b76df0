use super::kinds::{self, Groups};
use super::runs::{self, Run};
use super::{CardPool, GameConfig, PlayedCard, Value};

/// Every kind of hand the solver knows. How they rank against each other
/// is up to the game, see `GameConfig::categories`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard,
    OnePair,
    TwoPair,
    /// Three pairs among seven cards.
    ThreePair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    /// Trips plus two more pairs.
    ThreeOfAKindTwoPair,
    /// Two sets of trips.
    TwoThreeOfAKind,
    FourOfAKind,
    /// Quads plus at least a pair.
    FourOfAKindPairPlus,
    StraightFlush,
    FiveOfAKind,
    /// Ace high straight flush made with a wild card.
    WildRoyalFlush,
    /// Four wild cards, whatever else is held.
    FourWilds,
    /// Ace high straight flush without any wild card.
    NaturalRoyalFlush,
}

/// What a category found in a pool.
pub(crate) struct Made {
    pub(crate) cards: Vec<PlayedCard>,
    pub(crate) description: String,
}

fn label(rank: u8) -> &'static str {
    Value::from_rank(rank).label()
}

fn group_labels(ranks: &[u8], sep: &str) -> String {
    ranks
        .iter()
        .map(|&r| format!("{}'s", label(r)))
        .collect::<Vec<_>>()
        .join(sep)
}

impl Category {
    /// The display name of the category.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_solver::core::Category;
    ///
    /// assert_eq!("Pair", Category::OnePair.name());
    /// assert_eq!("Royal Flush", Category::NaturalRoyalFlush.name());
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreePair => "Three Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::ThreeOfAKindTwoPair => "Three of a Kind with Two Pair",
            Category::TwoThreeOfAKind => "Two Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FourOfAKindPairPlus => "Four of a Kind with Pair or Better",
            Category::StraightFlush => "Straight Flush",
            Category::FiveOfAKind => "Five of a Kind",
            Category::WildRoyalFlush => "Wild Royal Flush",
            Category::FourWilds => "Four Wild Cards",
            Category::NaturalRoyalFlush => "Royal Flush",
        }
    }

    /// Same ranked groups this category is made of, biggest first.
    fn group_sizes(self) -> Option<&'static [usize]> {
        match self {
            Category::OnePair => Some(&[2]),
            Category::TwoPair => Some(&[2, 2]),
            Category::ThreePair => Some(&[2, 2, 2]),
            Category::ThreeOfAKind => Some(&[3]),
            Category::FullHouse => Some(&[3, 2]),
            Category::ThreeOfAKindTwoPair => Some(&[3, 2, 2]),
            Category::TwoThreeOfAKind => Some(&[3, 3]),
            Category::FourOfAKind => Some(&[4]),
            Category::FourOfAKindPairPlus => Some(&[4, 2]),
            Category::FiveOfAKind => Some(&[5]),
            _ => None,
        }
    }

    /// Look for this category in the pool.
    pub(crate) fn evaluate(self, pool: &CardPool, config: &GameConfig) -> Option<Made> {
        if let Some(sizes) = self.group_sizes() {
            return kinds::of_a_kind(pool, config, sizes).map(|groups| self.describe_groups(groups));
        }

        let made = |cards: Vec<PlayedCard>, description: String| Made { cards, description };
        match self {
            Category::HighCard => {
                let cards = kinds::high_card(pool, config);
                let description = format!("{} High", cards.first()?.value().label());
                Some(made(cards, description))
            }
            Category::Straight => runs::straight(pool, config).map(|run| {
                let description = if run.wheel && config.wheel_high() {
                    "Straight, Wheel".to_string()
                } else {
                    format!("Straight, {} High", label(top(&run)))
                };
                made(run.cards, description)
            }),
            Category::Flush => runs::flush(pool, config).and_then(|cards| {
                let description = format!("Flush, {} High", cards.first()?);
                Some(made(cards, description))
            }),
            Category::StraightFlush => runs::straight_flush(pool, config).and_then(|run| {
                let description = if run.is_royal() {
                    "Royal Flush".to_string()
                } else if run.wheel && config.wheel_high() {
                    "Straight Flush, Wheel".to_string()
                } else {
                    format!("Straight Flush, {} High", run.cards.first()?)
                };
                Some(made(run.cards, description))
            }),
            Category::NaturalRoyalFlush => runs::natural_royal(pool, config)
                .map(|run| made(run.cards, "Royal Flush".to_string())),
            Category::WildRoyalFlush => runs::wild_royal(pool, config)
                .map(|run| made(run.cards, "Wild Royal Flush".to_string())),
            Category::FourWilds => kinds::four_wilds(pool, config)
                .map(|cards| made(cards, "Four Wild Cards".to_string())),
            _ => None,
        }
    }

    fn describe_groups(self, groups: Groups) -> Made {
        let r = &groups.ranks;
        let description = match self {
            Category::OnePair => format!("Pair, {}", group_labels(r, "")),
            Category::TwoPair => format!("Two Pair, {}", group_labels(r, " & ")),
            Category::ThreePair => format!("Three Pair, {}", group_labels(r, " & ")),
            Category::ThreeOfAKind => format!("Three of a Kind, {}", group_labels(r, "")),
            Category::FullHouse => format!("Full House, {}", group_labels(r, " over ")),
            Category::ThreeOfAKindTwoPair => format!(
                "Three of a Kind with Two Pair, {} over {}",
                group_labels(&r[..1], ""),
                group_labels(&r[1..], " & ")
            ),
            Category::TwoThreeOfAKind => {
                format!("Two Three of a Kind, {}", group_labels(r, " & "))
            }
            Category::FourOfAKind => format!("Four of a Kind, {}", group_labels(r, "")),
            Category::FourOfAKindPairPlus => format!(
                "Four of a Kind with Pair or Better, {}",
                group_labels(r, " over ")
            ),
            Category::FiveOfAKind => format!("Five of a Kind, {}", group_labels(r, "")),
            _ => self.name().to_string(),
        };
        Made {
            cards: groups.cards,
            description,
        }
    }
}

fn top(run: &Run) -> u8 {
    run.cards.first().map(PlayedCard::rank).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, solve, solve_qualified};

    fn made(config: &GameConfig, category: Category, tokens: &str) -> Option<Hand> {
        let pool = CardPool::new_from_str(tokens, config).unwrap();
        Hand::evaluate(category, &pool, config)
    }

    fn possible(config: &GameConfig, category: Category, tokens: &str) -> bool {
        made(config, category, tokens).is_some()
    }

    fn description(config: &GameConfig, category: Category, tokens: &str) -> String {
        made(config, category, tokens)
            .map(|h| h.description().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_names() {
        assert_eq!("High Card", Category::HighCard.name());
        assert_eq!("Three of a Kind with Two Pair", Category::ThreeOfAKindTwoPair.name());
        assert_eq!("Four Wild Cards", Category::FourWilds.name());
        assert_eq!("Wild Royal Flush", Category::WildRoyalFlush.name());
    }

    #[test]
    fn test_missing_category_is_not_evaluated() {
        let config = GameConfig::standard();
        assert!(!possible(&config, Category::FiveOfAKind, "7h 7d 7s 7c 3d"));
        assert!(possible(&config, Category::FourOfAKind, "7h 7d 7s 7c 3d"));
    }

    #[test]
    fn test_joker_pool_order() {
        let config = GameConfig::joker_poker();
        let hand = solve(&["Kh", "Or", "As", "7c", "2h"], &config).unwrap();
        assert_eq!("As", hand.pool()[0].to_string());
        assert_eq!("Ar", hand.pool()[4].to_string());

        let hand = solve(&["Kh", "As", "3c", "3s", "Or"], &config).unwrap();
        assert_eq!("Three of a Kind, 3's", hand.description());
    }

    #[test]
    fn test_joker_royals() {
        let config = GameConfig::joker_poker();
        assert!(possible(&config, Category::NaturalRoyalFlush, "As Qs Js Ts Ks"));
        assert!(!possible(&config, Category::NaturalRoyalFlush, "7s 8s Js Ts 9s"));
        assert!(!possible(&config, Category::NaturalRoyalFlush, "Or Ks Js Ts Qs"));

        assert!(possible(&config, Category::WildRoyalFlush, "As Or Js Ts Ks"));
        assert!(!possible(&config, Category::WildRoyalFlush, "7s Or Js Ts 9s"));
        assert!(possible(&config, Category::WildRoyalFlush, "Ks Qs Js Ts Or"));
        assert!(possible(&config, Category::WildRoyalFlush, "Or Qs Ts Ks Or"));
        assert!(possible(&config, Category::WildRoyalFlush, "Qs Or As Js Ks"));
        assert!(!possible(&config, Category::WildRoyalFlush, "As Qs Js Ts Ks"));
    }

    #[test_log::test]
    fn test_joker_straight_flush() {
        let config = GameConfig::joker_poker();
        let sf = Category::StraightFlush;
        assert!(possible(&config, sf, "7s 8s Js Ts 9s"));
        assert!(!possible(&config, sf, "7s 8s Js Ts 9d"));
        assert!(possible(&config, sf, "7s 8s Js Ts Or"));
        assert!(!possible(&config, sf, "Or 8s Js Ts 9d"));
        assert_eq!("Straight Flush, Js High", description(&config, sf, "7s 8s 9s Ts Or"));
        assert_eq!("Straight Flush, Qs High", description(&config, sf, "Or 8s Js Ts Or"));
        assert_eq!(
            "Straight Flush, Ks High",
            description(&config, sf, "9s Or 7s Js Kh Ts Or")
        );
        assert_eq!("Royal Flush", description(&config, sf, "Qs Or As Js Kh Ts Or"));
    }

    #[test]
    fn test_joker_of_a_kind() {
        let config = GameConfig::joker_poker();
        assert!(possible(&config, Category::FiveOfAKind, "7h 7d Or 7s 7c"));
        assert!(!possible(&config, Category::FiveOfAKind, "7h 7d 3s 7s 7c"));
        assert!(!possible(&config, Category::FiveOfAKind, "7h Or 3s 7s 7c"));

        assert!(possible(&config, Category::FourOfAKind, "7h 7d 3s 7s 7c"));
        assert!(possible(&config, Category::FourOfAKind, "7h 3d Or 7s 7c"));
        assert!(!possible(&config, Category::FourOfAKind, "7h 3d 3s 7s 7c"));
        assert!(!possible(&config, Category::FourOfAKind, "7h 3d 3s Or 7c"));

        assert!(possible(&config, Category::ThreeOfAKind, "5c 5s Or 6c 2d"));
        assert!(!possible(&config, Category::ThreeOfAKind, "5c 7h Or 6c 2d"));
    }

    #[test]
    fn test_joker_full_house() {
        let config = GameConfig::joker_poker();
        let fh = Category::FullHouse;
        assert!(possible(&config, fh, "Qd Js Qc Jc Jd"));
        assert!(possible(&config, fh, "9c 9d Or Jc Js"));
        assert!(possible(&config, fh, "9c 9d Jh Or Js 9h As"));
        assert!(possible(&config, fh, "9h 9s Or 5c Kd 5d Kh"));
        assert!(!possible(&config, fh, "5h 3h 3c 5d 2s Ts Td"));
        assert!(!possible(&config, fh, "9h 9s Or 5d Kh"));

        let hand = made(&config, fh, "5d 5h 3h 3c Or Qd Qs").unwrap();
        assert!(!hand.to_string().contains("3h"));

        let hand = made(&config, fh, "9c Qs 9h 5h Ts Qc Qh").unwrap();
        assert_eq!("Qs, Qc, Qh, 9c, 9h", hand.to_string());
        let hand = made(&config, fh, "9c Qs 9h 5h Ts Or Qh").unwrap();
        assert_eq!("Qs, Qh, Qr, 9c, 9h", hand.to_string());
    }

    #[test]
    fn test_joker_flush_and_straight() {
        let config = GameConfig::joker_poker();
        assert!(possible(&config, Category::Flush, "4h Th 5h Or Kh"));
        assert_eq!(
            "Flush, Ah High",
            description(&config, Category::Flush, "4h Th Ah Or Kh")
        );
        assert!(!possible(&config, Category::Flush, "4s Th Or Ac 2h Kh 8d"));

        let st = Category::Straight;
        assert!(possible(&config, st, "7s 8s Jc Ts Or"));
        assert_eq!("Straight, J High", description(&config, st, "7d 8s 9s Ts Or"));
        assert_eq!("Straight, Q High", description(&config, st, "Or 8s Jh Ts Or"));
        assert_eq!("Straight, A High", description(&config, st, "Qs Or 8c Jh Kh Ts Or"));
        assert_eq!("Straight, A High", description(&config, st, "Qs Or As Js Kh Ts Or"));
        assert!(!possible(&config, st, "Or 8s Js Ts 8d"));
        assert!(!possible(&config, st, "2d 3s 4h 7c As Ts Kd"));
    }

    #[test]
    fn test_deuces_wild() {
        let config = GameConfig::deuces_wild();
        let hand = solve(&["Kh", "Tc", "As", "3s", "2h"], &config).unwrap();
        assert_eq!("As", hand.pool()[0].to_string());
        assert_eq!("Ah", hand.pool()[4].to_string());
        let hand = solve(&["Kh", "As", "3c", "3s", "2h"], &config).unwrap();
        assert_eq!("Three of a Kind, 3's", hand.description());

        assert!(!possible(&config, Category::NaturalRoyalFlush, "2s Ks Js Ts Qs"));
        assert!(possible(&config, Category::WildRoyalFlush, "As 2s Js Ts Ks"));
        assert!(possible(&config, Category::WildRoyalFlush, "Ks As Js Ts 2d"));
        assert!(possible(&config, Category::WildRoyalFlush, "2c Qs Ts Ks 2s"));
        assert!(!possible(&config, Category::WildRoyalFlush, "7s 2s Js Ts 9s"));

        let sf = Category::StraightFlush;
        assert_eq!("Straight Flush, Js High", description(&config, sf, "7s 8s 9s Ts 2c"));
        assert_eq!("Straight Flush, Qs High", description(&config, sf, "2d 8s Js Ts 2h"));
        assert_eq!("Royal Flush", description(&config, sf, "Qs 2h As Js Kh Ts 2d"));
        assert!(!possible(&config, sf, "2c 8s Js Ts 9d"));

        assert!(possible(&config, Category::FiveOfAKind, "7h 7d 2s 7s 7c"));
        assert!(!possible(&config, Category::FiveOfAKind, "7h 2c 3s 7s 7c"));
        assert!(possible(&config, Category::FourWilds, "2h 2d 3s 2s 2c"));
        assert!(!possible(&config, Category::FourWilds, "2h 3d 3s 2s 2c"));
        assert!(possible(&config, Category::FourOfAKind, "7h 3d 2s 7s 7c"));
        assert!(!possible(&config, Category::FourOfAKind, "7h 3d 3s 2s 7c"));
        assert!(possible(&config, Category::FullHouse, "9c 9d Jh 2s Js 9h As"));
    }

    #[test]
    fn test_deuces_wild_resolves_best_category() {
        let config = GameConfig::deuces_wild();
        let hand = solve(&["2h", "2d", "3s", "2s", "2c"], &config).unwrap();
        assert_eq!(Category::FourWilds, hand.category());
        let hand = solve(&["Ks", "As", "Js", "Ts", "2d"], &config).unwrap();
        assert_eq!(Category::WildRoyalFlush, hand.category());
        let hand = solve(&["7h", "7d", "2s", "7s", "7c"], &config).unwrap();
        assert_eq!("Five of a Kind, 7's", hand.description());
    }

    #[test]
    fn test_three_card() {
        let config = GameConfig::three_card();
        let hand = solve(&["3c", "Kh", "3s"], &config).unwrap();
        assert_eq!("Kh", hand.pool()[0].to_string());
        assert_eq!("3s", hand.pool()[2].to_string());
        assert_eq!("Pair, 3's", solve(&["As", "3c", "3s"], &config).unwrap().description());

        assert!(possible(&config, Category::StraightFlush, "8s Ts 9s"));
        assert!(!possible(&config, Category::StraightFlush, "8s Ts 9d"));
        assert!(possible(&config, Category::Flush, "4h Th 5h"));
        assert!(!possible(&config, Category::Flush, "4s Th 5h"));
        assert!(possible(&config, Category::Straight, "3s 4s 5c"));
        assert!(possible(&config, Category::Straight, "2c 3s As"));
        assert!(!possible(&config, Category::Straight, "2d 4h As"));
        assert!(!possible(&config, Category::Straight, "5h 6s 6h"));

        let trips = made(&config, Category::ThreeOfAKind, "5c 5s 5h").unwrap();
        assert_eq!("5c, 5s, 5h", trips.to_string());

        let wheel = made(&config, Category::Straight, "2s 3s Ad").unwrap();
        let four_high = made(&config, Category::Straight, "2s 3s 4h").unwrap();
        assert!(!four_high.loses_to(&wheel));
        assert!(wheel.loses_to(&four_high));

        let jack = made(&config, Category::OnePair, "4d 4h Jc").unwrap();
        let ten = made(&config, Category::OnePair, "4d 4h Tc").unwrap();
        assert!(ten.loses_to(&jack));
    }

    #[test]
    fn test_four_card() {
        let config = GameConfig::four_card();
        let hand = solve(&["Kh", "As", "Ad", "3s", "2h"], &config).unwrap();
        assert_eq!("Pair, A's", hand.description());
        assert_eq!(4, hand.cards().len());

        assert!(possible(&config, Category::FourOfAKind, "7h 7d 7s 7c"));
        assert!(!possible(&config, Category::FourOfAKind, "7h 3d 7s 7c"));
        assert!(possible(&config, Category::StraightFlush, "8s Js Ts 9s"));
        assert!(!possible(&config, Category::StraightFlush, "8s Js Ts 9d"));
        assert!(possible(&config, Category::Straight, "2c 3s 4h As"));
        assert!(!possible(&config, Category::Straight, "2d 3s As Kd"));
        assert!(possible(&config, Category::TwoPair, "5c 5d 6s 6c"));
        assert!(!possible(&config, Category::TwoPair, "5c 6s 6h 8d"));

        let quads = solve(&["7h", "7d", "7s", "7c"], &config).unwrap();
        let straight_flush = solve(&["8s", "Js", "Ts", "9s"], &config).unwrap();
        assert!(straight_flush.loses_to(&quads));

        let trips = solve(&["2s", "3c", "3s", "3h"], &config).unwrap();
        let low_trips = solve(&["3h", "2d", "2c", "2s"], &config).unwrap();
        assert!(low_trips.loses_to(&trips));
    }

    #[test]
    fn test_qualification() {
        let jacks = GameConfig::jacks_or_better();
        assert!(solve_qualified(&["Jh", "Js", "4d", "3c", "2s"], &jacks).unwrap().is_qualified());
        assert!(solve_qualified(&["Ah", "As", "6d", "3s", "2h"], &jacks).unwrap().is_qualified());
        assert!(!solve_qualified(&["Th", "Ts", "4d", "3c", "2s"], &jacks).unwrap().is_qualified());

        let joker = GameConfig::joker_poker();
        assert!(solve_qualified(&["As", "Or", "Js", "Ts", "Qs"], &joker).unwrap().is_qualified());
        assert!(solve_qualified(&["3c", "3s", "2d", "2h", "5c"], &joker).unwrap().is_qualified());
        assert!(!solve_qualified(&["Ah", "As", "Kd", "7c", "2h"], &joker).unwrap().is_qualified());

        let deuces = GameConfig::deuces_wild();
        assert!(solve_qualified(&["5h", "5d", "2c", "9s", "Kh"], &deuces).unwrap().is_qualified());
        assert!(!solve_qualified(&["Kh", "Kd", "9s", "9c", "4h"], &deuces).unwrap().is_qualified());

        let bonus = GameConfig::four_card_bonus();
        assert!(solve_qualified(&["Ah", "As", "3s", "2h"], &bonus).unwrap().is_qualified());
        assert!(!solve_qualified(&["Jh", "Js", "3s", "2h"], &bonus).unwrap().is_qualified());
        assert!(!solve_qualified(&["Qh", "9s", "Ad", "Jh"], &bonus).unwrap().is_qualified());

        let four = GameConfig::four_card();
        assert!(solve_qualified(&["Qh", "9s", "Ad", "Jh"], &four).unwrap().is_qualified());
    }
}
