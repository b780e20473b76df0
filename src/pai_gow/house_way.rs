use std::cmp::Ordering;
use std::ops::Range;

use tracing::{Level, event};

use super::{FULL, HIGH_CARDS, PAIRS, PaiGowHand};
use crate::core::{Card, CardIter, CardPool, Category, Hand, PlayedCard, PokerError, Value, remaining, resolve};

const ACE: u8 = Value::Ace.rank();
const KING: u8 = Value::King.rank();
const JACK: u8 = Value::Jack.rank();
const TEN: u8 = Value::Ten.rank();
const SIX: u8 = Value::Six.rank();
const TWO: u8 = Value::Two.rank();

/// Cards picked for the high and the low hand.
struct Split {
    hi: Vec<Card>,
    lo: Vec<Card>,
}

impl Split {
    fn into_hand(self) -> Result<PaiGowHand, PokerError> {
        PaiGowHand::from_cards(self.hi, self.lo)
    }
}

fn is_made(category: Category) -> bool {
    matches!(
        category,
        Category::StraightFlush | Category::Flush | Category::Straight
    )
}

/// Set seven cards the way the house does.
pub(super) fn set(cards: &[Card]) -> Result<PaiGowHand, PokerError> {
    let base = resolve(&CardPool::new(cards.to_vec(), &FULL)?, &FULL);
    event!(Level::DEBUG, key = ?base.category(), "setting hand");
    if is_made(base.category()) {
        let pattern = resolve(&CardPool::new(cards.to_vec(), &PAIRS)?, &PAIRS);
        made_hand_way(&pattern, cards)
    } else {
        by_pairs(&base).into_hand()
    }
}

/// Every setting that keeps a straight or better in the high hand.
fn made_settings(cards: &[Card]) -> Result<Vec<PaiGowHand>, PokerError> {
    let mut settings = Vec::new();
    for hi in CardIter::new(cards, HIGH_CARDS) {
        let lo = remaining(cards, &hi);
        let setting = PaiGowHand::from_cards(hi, lo)?;
        if is_made(setting.hi().category()) {
            settings.push(setting);
        }
    }
    Ok(settings)
}

/// Best low hand, then best high hand. The first setting wins ties.
fn best<'a>(settings: impl Iterator<Item = &'a PaiGowHand>) -> Option<&'a PaiGowHand> {
    settings.reduce(|best, next| {
        let ord = next
            .lo()
            .compare(best.lo())
            .then_with(|| next.hi().compare(best.hi()));
        if ord == Ordering::Greater { next } else { best }
    })
}

/// Decide between playing the straight or flush and breaking it up to
/// set the pairs. `pattern` is the same seven cards judged on pairs only.
fn made_hand_way(pattern: &Hand, cards: &[Card]) -> Result<PaiGowHand, PokerError> {
    let settings = made_settings(cards)?;
    let keeping_pair = || {
        best(
            settings
                .iter()
                .filter(|s| s.lo().category() == Category::OnePair),
        )
    };
    let r = ranks(pattern);

    let chosen = match pattern.category() {
        Category::HighCard => best(settings.iter()),
        Category::OnePair => keeping_pair().or_else(|| {
            // A big pair goes high with the ace low when every straight
            // or flush would take the ace.
            let ace_tied_up = r[2] == ACE
                && settings
                    .iter()
                    .all(|s| s.lo().cards().iter().all(|c| c.rank() != ACE));
            if (TEN..=KING).contains(&r[0]) && ace_tied_up {
                None
            } else {
                best(settings.iter())
            }
        }),
        Category::TwoPair if r[0] <= SIX && r[4] != ACE => best(settings.iter()),
        Category::ThreeOfAKind | Category::FourOfAKind => keeping_pair(),
        _ => None,
    };

    match chosen {
        Some(setting) => Ok(setting.clone()),
        None => by_pairs(pattern).into_hand(),
    }
}

fn ranks(hand: &Hand) -> Vec<u8> {
    hand.cards().iter().map(PlayedCard::rank).collect()
}

fn pick(cards: &[Card], ranges: &[Range<usize>]) -> Vec<Card> {
    ranges
        .iter()
        .flat_map(|range| cards[range.clone()].iter().copied())
        .collect()
}

/// Set a hand by its pairs. The hand's cards must be all seven, grouped
/// the way the category lists them (groups first, then singles high to
/// low).
fn by_pairs(hand: &Hand) -> Split {
    let c: Vec<Card> = hand.cards().iter().map(PlayedCard::card).collect();
    let r = ranks(hand);
    if c.len() < 7 {
        let (hi, lo) = c.split_at(c.len().min(HIGH_CARDS));
        return Split {
            hi: hi.to_vec(),
            lo: lo.to_vec(),
        };
    }

    let split = |hi: &[Range<usize>], lo: &[Range<usize>]| Split {
        hi: pick(&c, hi),
        lo: pick(&c, lo),
    };

    match hand.category() {
        Category::FiveOfAKind => {
            if r[5] == r[6] && r[5] == KING {
                split(&[0..5], &[5..7])
            } else {
                split(&[2..7], &[0..2])
            }
        }
        Category::FourOfAKindPairPlus => {
            if r[0] == ACE && r[4] < KING {
                split(&[0..2, 4..7], &[2..4])
            } else {
                split(&[0..4, 6..7], &[4..6])
            }
        }
        Category::FourOfAKind => {
            let keep = r[0] <= SIX || (r[0] <= TEN && r[4] == ACE && r[5] >= JACK);
            if keep {
                split(&[0..4, 6..7], &[4..6])
            } else {
                split(&[0..2, 4..7], &[2..4])
            }
        }
        Category::TwoThreeOfAKind => split(&[2..7], &[0..2]),
        Category::ThreeOfAKindTwoPair => split(&[0..3, 5..7], &[3..5]),
        Category::FullHouse => {
            if r[3] == TWO && r[5] == ACE && r[6] == KING {
                split(&[0..5], &[5..7])
            } else {
                split(&[0..3, 5..7], &[3..5])
            }
        }
        Category::ThreeOfAKind => {
            if r[0] == ACE {
                split(&[0..2, 4..7], &[2..4])
            } else {
                split(&[0..3, 5..7], &[3..5])
            }
        }
        Category::ThreePair => split(&[2..7], &[0..2]),
        Category::TwoPair => {
            let keep = (r[4] == ACE && r[2] < JACK) || (r[0] <= SIX && r[4] == KING);
            if keep {
                split(&[0..4, 6..7], &[4..6])
            } else {
                split(&[0..2, 4..7], &[2..4])
            }
        }
        Category::OnePair => split(&[0..2, 4..7], &[2..4]),
        Category::HighCard => split(&[0..1, 3..7], &[1..3]),
        _ => split(&[0..5], &[5..7]),
    }
}
