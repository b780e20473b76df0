use std::cmp::Reverse;

use super::kinds::Holding;
use super::{CardPool, GameConfig, LOW_ACE_RANK, PlayedCard, Suit, Value};

const ACE: u8 = Value::Ace.rank();

/// A straight, or a straight flush when all the cards share a suit.
pub(crate) struct Run {
    /// Best card first. A wheel lists the ace last unless the game ranks
    /// it high.
    pub(crate) cards: Vec<PlayedCard>,
    pub(crate) wheel: bool,
    pub(crate) wilds_used: usize,
}

impl Run {
    pub(crate) fn is_royal(&self) -> bool {
        !self.wheel && self.cards.first().map(PlayedCard::rank) == Some(ACE)
    }
}

fn ranks(cards: &[PlayedCard]) -> impl Iterator<Item = u8> + '_ {
    cards.iter().map(PlayedCard::rank)
}

/// Top ranks of every run of `len` cards, best first.
fn tops(len: usize, wheel_high: bool) -> Vec<u8> {
    let wheel = (len - 1) as u8;
    let mut tops: Vec<u8> = (wheel..=ACE).rev().collect();
    if wheel_high && tops.len() > 1 {
        tops.pop();
        tops.insert(1, wheel);
    }
    tops
}

/// The best run of `len` cards. Wild cards fill the gaps and take `suit`
/// when one is given.
fn best_run(
    naturals: &[PlayedCard],
    wilds: &[PlayedCard],
    len: usize,
    wheel_high: bool,
    suit: Option<Suit>,
) -> Option<Run> {
    if !(2..=13).contains(&len) || naturals.len() + wilds.len() < len {
        return None;
    }
    let find = |rank: u8| -> Option<PlayedCard> {
        if rank == LOW_ACE_RANK {
            naturals
                .iter()
                .find(|c| c.rank() == ACE)
                .map(|c| c.playing_as(LOW_ACE_RANK, None))
        } else {
            naturals.iter().find(|c| c.rank() == rank).copied()
        }
    };

    for top in tops(len, wheel_high) {
        let bottom = top + 1 - len as u8;
        let missing = (bottom..=top).filter(|&r| find(r).is_none()).count();
        if missing > wilds.len() {
            continue;
        }

        let mut free = wilds.iter();
        let Some(mut cards) = (bottom..=top)
            .rev()
            .map(|rank| find(rank).or_else(|| free.next().map(|w| w.playing_as(rank, suit))))
            .collect::<Option<Vec<_>>>()
        else {
            continue;
        };

        let wheel = bottom == LOW_ACE_RANK;
        if wheel && wheel_high {
            if let Some(ace) = cards.pop() {
                cards.insert(0, ace.playing_as(ACE, None));
            }
        }
        return Some(Run {
            cards,
            wheel,
            wilds_used: missing,
        });
    }
    None
}

/// Keeps the earlier candidate on ties.
fn better<T>(best: T, next: T, cards: impl Fn(&T) -> &[PlayedCard]) -> T {
    if ranks(cards(&next)).gt(ranks(cards(&best))) {
        next
    } else {
        best
    }
}

fn suited(naturals: &[PlayedCard], suit: Suit) -> Vec<PlayedCard> {
    naturals
        .iter()
        .filter(|c| c.suit() == Some(suit))
        .copied()
        .collect()
}

pub(crate) fn straight(pool: &CardPool, config: &GameConfig) -> Option<Run> {
    let holding = Holding::for_runs(pool);
    best_run(
        &holding.naturals,
        &holding.wilds,
        config.run_length(),
        config.wheel_high(),
        None,
    )
}

pub(crate) fn straight_flush(pool: &CardPool, config: &GameConfig) -> Option<Run> {
    let holding = Holding::for_runs(pool);
    Suit::suits()
        .into_iter()
        .filter_map(|suit| {
            best_run(
                &suited(&holding.naturals, suit),
                &holding.wilds,
                config.run_length(),
                config.wheel_high(),
                Some(suit),
            )
        })
        .reduce(|best, run| better(best, run, |r| &r.cards))
}

/// Ace high straight flush without any wild card.
pub(crate) fn natural_royal(pool: &CardPool, config: &GameConfig) -> Option<Run> {
    let holding = Holding::for_runs(pool);
    Suit::suits().into_iter().find_map(|suit| {
        best_run(
            &suited(&holding.naturals, suit),
            &[],
            config.run_length(),
            false,
            Some(suit),
        )
        .filter(Run::is_royal)
    })
}

/// Ace high straight flush that needs a wild card.
pub(crate) fn wild_royal(pool: &CardPool, config: &GameConfig) -> Option<Run> {
    straight_flush(pool, config).filter(|run| run.is_royal() && run.wilds_used > 0)
}

pub(crate) fn flush(pool: &CardPool, config: &GameConfig) -> Option<Vec<PlayedCard>> {
    let holding = Holding::for_runs(pool);
    let len = config.run_length();
    Suit::suits()
        .into_iter()
        .filter_map(|suit| {
            let mut cards = suited(&holding.naturals, suit);
            if cards.len() + holding.wilds.len() < len {
                return None;
            }
            // Wild cards become the best ranks the suit is missing.
            let mut free = holding.wilds.iter();
            for rank in (1..=ACE).rev() {
                if cards.iter().any(|c| c.rank() == rank) {
                    continue;
                }
                match free.next() {
                    Some(wild) => cards.push(wild.playing_as(rank, Some(suit))),
                    None => break,
                }
            }
            cards.sort_by_key(|c| Reverse(c.rank()));
            cards.truncate(len);
            Some(cards)
        })
        .reduce(|best, cards| better(best, cards, |c| c.as_slice()))
}
