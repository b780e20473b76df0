use super::Card;

/// Iterates over every `num_cards` sized set of the given cards, in the
/// order the cards were given.
///
/// # Examples
///
/// ```
/// use poker_solver::core::{CardIter, cards_from_str};
///
/// let hole = cards_from_str("As Ks Qs Js").unwrap();
/// assert_eq!(6, CardIter::new(&hole, 2).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the cards sets are made from.
    possible_cards: &'a [Card],

    // Offsets of the next set to hand out. `None` once exhausted.
    idx: Option<Vec<usize>>,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        let idx = (num_cards <= possible_cards.len()).then(|| (0..num_cards).collect());
        CardIter {
            possible_cards,
            idx,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let idx = self.idx.as_mut()?;
        let result: Vec<Card> = idx.iter().map(|&i| self.possible_cards[i]).collect();

        // Find the last level that can still move forward while leaving
        // enough cards for the levels after it.
        let num_cards = idx.len();
        let total = self.possible_cards.len();
        match (0..num_cards).rev().find(|&level| idx[level] < total - num_cards + level) {
            Some(level) => {
                idx[level] += 1;
                for next in level + 1..num_cards {
                    idx[next] = idx[next - 1] + 1;
                }
            }
            None => self.idx = None,
        }
        Some(result)
    }
}

/// The cards left over once `taken` is removed from `all`. Each taken
/// card removes one copy, so repeated jokers are handled.
pub(crate) fn remaining(all: &[Card], taken: &[Card]) -> Vec<Card> {
    let mut rest = all.to_vec();
    for card in taken {
        if let Some(pos) = rest.iter().position(|c| c == card) {
            rest.remove(pos);
        }
    }
    rest
}
