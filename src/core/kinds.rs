use std::cmp::Reverse;

use super::{CardPool, GameConfig, PlayedCard, Value};

const ACE: u8 = Value::Ace.rank();

/// The cards of a pool split into the ones that keep their face and the
/// wild cards that are free to become anything.
pub(crate) struct Holding {
    pub(crate) naturals: Vec<PlayedCard>,
    pub(crate) wilds: Vec<PlayedCard>,
}

impl Holding {
    /// For pairs, trips and the like. A bug can only ever be an ace here.
    pub(crate) fn for_kinds(pool: &CardPool, config: &GameConfig) -> Self {
        let (mut naturals, wilds): (Vec<PlayedCard>, Vec<PlayedCard>) = pool
            .iter()
            .partition(|c| !c.is_wild() || config.is_bug());
        // A bug sorts in behind the natural aces.
        naturals.sort_by_key(|c| Reverse(c.rank()));
        Self { naturals, wilds }
    }

    /// For straights and flushes, where every wild card is free.
    pub(crate) fn for_runs(pool: &CardPool) -> Self {
        let (naturals, wilds) = pool.iter().partition(|c| !c.is_wild());
        Self { naturals, wilds }
    }

    fn count(&self, rank: u8) -> usize {
        self.naturals.iter().filter(|c| c.rank() == rank).count()
    }
}

/// Groups of same ranked cards found in a pool.
pub(crate) struct Groups {
    /// Rank of each group, in the order the sizes were asked for.
    pub(crate) ranks: Vec<u8>,
    /// The grouped cards followed by the best kickers.
    pub(crate) cards: Vec<PlayedCard>,
}

/// Find groups of the given sizes, biggest first, e.g. `[3, 2]` for a
/// full house. Wild cards fill out groups where needed.
pub(crate) fn of_a_kind(pool: &CardPool, config: &GameConfig, sizes: &[usize]) -> Option<Groups> {
    if sizes.iter().sum::<usize>() > config.cards_in_hand() {
        return None;
    }
    let holding = Holding::for_kinds(pool, config);
    let mut ranks = Vec::with_capacity(sizes.len());
    if !search(&holding, sizes, holding.wilds.len(), &mut ranks) {
        return None;
    }
    let cards = take_groups(&holding, sizes, &ranks, config.cards_in_hand());
    Some(Groups { ranks, cards })
}

/// Depth first over ranks from the top, so the first fit is the best one.
/// Groups of equal size take strictly descending ranks so the same set of
/// ranks is never tried twice.
fn search(holding: &Holding, sizes: &[usize], wilds: usize, chosen: &mut Vec<u8>) -> bool {
    let depth = chosen.len();
    let Some(&size) = sizes.get(depth) else {
        return true;
    };
    let ceiling = match depth.checked_sub(1) {
        Some(prev) if sizes[prev] == size => chosen[prev].saturating_sub(1),
        _ => ACE,
    };

    for rank in (1..=ceiling).rev() {
        if chosen.contains(&rank) {
            continue;
        }
        let needed = size.saturating_sub(holding.count(rank));
        if needed > wilds {
            continue;
        }
        chosen.push(rank);
        if search(holding, sizes, wilds - needed, chosen) {
            return true;
        }
        chosen.pop();
    }
    false
}

fn take_groups(
    holding: &Holding,
    sizes: &[usize],
    ranks: &[u8],
    hand_size: usize,
) -> Vec<PlayedCard> {
    let mut used = vec![false; holding.naturals.len()];
    let mut wilds = holding.wilds.iter();
    let mut cards = Vec::with_capacity(hand_size);

    for (&size, &rank) in sizes.iter().zip(ranks) {
        let mut taken = 0;
        for (idx, card) in holding.naturals.iter().enumerate() {
            if taken == size {
                break;
            }
            if !used[idx] && card.rank() == rank {
                used[idx] = true;
                cards.push(*card);
                taken += 1;
            }
        }
        for wild in wilds.by_ref().take(size - taken) {
            cards.push(wild.playing_as(rank, None));
        }
    }

    let rest = holding
        .naturals
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(card, _)| card)
        .chain(wilds);
    cards.extend(kickers(rest, hand_size.saturating_sub(cards.len())));
    cards
}

/// The best `count` cards. Unused wild cards play as aces.
fn kickers<'a>(cards: impl Iterator<Item = &'a PlayedCard>, count: usize) -> Vec<PlayedCard> {
    let mut cards: Vec<PlayedCard> = cards.copied().collect();
    cards.sort_by_key(|c| Reverse(c.rank()));
    cards.truncate(count);
    cards
}

/// Four wild cards and the best kickers.
pub(crate) fn four_wilds(pool: &CardPool, config: &GameConfig) -> Option<Vec<PlayedCard>> {
    let holding = Holding::for_kinds(pool, config);
    if holding.wilds.len() < 4 || config.cards_in_hand() < 4 {
        return None;
    }
    let (four, extra) = holding.wilds.split_at(4);
    let mut cards = four.to_vec();
    cards.extend(kickers(
        holding.naturals.iter().chain(extra),
        config.cards_in_hand() - 4,
    ));
    Some(cards)
}

/// The best cards in the pool, one hand's worth.
pub(crate) fn high_card(pool: &CardPool, config: &GameConfig) -> Vec<PlayedCard> {
    let holding = Holding::for_kinds(pool, config);
    kickers(
        holding.naturals.iter().chain(&holding.wilds),
        config.cards_in_hand(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(groups: &Groups) -> Vec<Value> {
        groups.ranks.iter().map(|&r| Value::from_rank(r)).collect()
    }

    fn shown(cards: &[PlayedCard]) -> Vec<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_full_house_picks_highest_trips_then_pair() {
        let pool = CardPool::new_from_str("5d 5h 3h 3c Qh Qd Qs", &GameConfig::standard()).unwrap();
        let groups = of_a_kind(&pool, &GameConfig::standard(), &[3, 2]).unwrap();
        assert_eq!(vec![Value::Queen, Value::Five], ranks(&groups));
        assert_eq!(vec!["Qh", "Qd", "Qs", "5d", "5h"], shown(&groups.cards));
    }

    #[test]
    fn test_three_pair_ranks_descend() {
        let config = GameConfig::pai_gow_pairs();
        let pool = CardPool::new_from_str("6h 6c 9d 9h As Ac Qs", &config).unwrap();
        let groups = of_a_kind(&pool, &config, &[2, 2, 2]).unwrap();
        assert_eq!(vec![Value::Ace, Value::Nine, Value::Six], ranks(&groups));
        assert_eq!("Qs", groups.cards[6].to_string());
    }

    #[test]
    fn test_wild_fills_group() {
        let config = GameConfig::deuces_wild();
        let pool = CardPool::new_from_str("9c Qs 9h 5h Ts 2s Qh", &config).unwrap();
        let groups = of_a_kind(&pool, &config, &[3, 2]).unwrap();
        assert_eq!(vec!["Qs", "Qh", "Qs", "9c", "9h"], shown(&groups.cards));
        assert!(groups.cards[2].is_wild());
    }

    #[test]
    fn test_bug_only_pairs_with_aces() {
        let config = GameConfig::pai_gow();
        let pool = CardPool::new_from_str("Kh Or Qs Td 5s 7c 2h", &config).unwrap();
        assert!(of_a_kind(&pool, &config, &[2]).is_none());

        let pool = CardPool::new_from_str("Ah Or Qs Td 5s 7c 2h", &config).unwrap();
        let pair = of_a_kind(&pool, &config, &[2]).unwrap();
        assert_eq!(vec![Value::Ace], ranks(&pair));
        assert_eq!(vec!["Ah", "Ar"], shown(&pair.cards[..2]));
    }

    #[test]
    fn test_group_needs_room_in_hand() {
        let config = GameConfig::three_card();
        let pool = CardPool::new_from_str("4d 4h 5c", &config).unwrap();
        assert!(of_a_kind(&pool, &config, &[2, 2]).is_none());
    }

    #[test]
    fn test_four_wilds_kickers() {
        let config = GameConfig::deuces_wild();
        let pool = CardPool::new_from_str("2h 2c 5h 2s 2d", &config).unwrap();
        let cards = four_wilds(&pool, &config).unwrap();
        assert_eq!(5, cards.len());
        assert_eq!("5h", cards[4].to_string());
    }

    #[test]
    fn test_high_card_takes_best() {
        let config = GameConfig::standard();
        let pool = CardPool::new_from_str("2d 3s 4h 7c As Ts Kd", &config).unwrap();
        assert_eq!(
            vec!["As", "Kd", "10s", "7c", "4h"],
            shown(&high_card(&pool, &config))
        );
    }
}
