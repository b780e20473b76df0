use tracing::{Level, event};

use super::{CardPool, GameConfig, Hand, PokerError};

/// Find the best hand the pool makes. Categories are tried from the
/// strongest down and the first one that fits wins.
pub fn resolve(pool: &CardPool, config: &GameConfig) -> Hand {
    let hand = config
        .categories()
        .iter()
        .find_map(|&category| Hand::evaluate(category, pool, config))
        .unwrap_or_else(|| Hand::high_card(pool, config));
    event!(
        Level::TRACE,
        game = config.name(),
        category = ?hand.category(),
        description = hand.description(),
        "resolved hand"
    );
    hand
}

/// Solve a hand from card tokens.
///
/// # Examples
///
/// ```
/// use poker_solver::core::{GameConfig, solve};
///
/// let hand = solve(&["Ad", "As", "Jc", "Th", "2d", "3c", "Kd"], &GameConfig::default()).unwrap();
/// assert_eq!("Pair", hand.name());
/// assert_eq!("Pair, A's", hand.description());
/// ```
pub fn solve<S: AsRef<str>>(tokens: &[S], config: &GameConfig) -> Result<Hand, PokerError> {
    let pool = CardPool::from_tokens(tokens, config)?;
    Ok(resolve(&pool, config))
}

/// Solve a hand and check it against the lowest hand that qualifies in
/// this game. Games without a qualifier always qualify.
///
/// # Examples
///
/// ```
/// use poker_solver::core::{GameConfig, solve_qualified};
///
/// let config = GameConfig::jacks_or_better();
/// let tens = solve_qualified(&["Th", "Ts", "Ad", "Ks", "Jh"], &config).unwrap();
/// assert!(!tens.is_qualified());
/// ```
pub fn solve_qualified<S: AsRef<str>>(
    tokens: &[S],
    config: &GameConfig,
) -> Result<Hand, PokerError> {
    let mut hand = solve(tokens, config)?;
    if let Some(cards) = config.lowest_qualified() {
        let lowest = resolve(&CardPool::new(cards.to_vec(), config)?, config);
        if hand.loses_to(&lowest) {
            event!(
                Level::DEBUG,
                game = config.name(),
                hand = hand.description(),
                needed = lowest.description(),
                "hand does not qualify"
            );
            hand.disqualify();
        }
    }
    Ok(hand)
}

/// The hands that win. Unqualified hands are dropped, then every hand
/// that loses to another is. Ties return more than one winner.
///
/// # Examples
///
/// ```
/// use poker_solver::core::{GameConfig, solve, winners};
///
/// let config = GameConfig::standard();
/// let h1 = solve(&["2s", "3s", "4h", "5c", "As", "Ts", "8d"], &config).unwrap();
/// let h2 = solve(&["5s", "Td", "3h", "Ac", "2s", "Ts", "8d"], &config).unwrap();
/// let h3 = solve(&["5s", "5h", "3s", "3c", "2s", "Ts", "3d"], &config).unwrap();
///
/// let hands = vec![h1, h2, h3];
/// let won = winners(&hands);
/// assert_eq!(1, won.len());
/// assert_eq!("Full House", won[0].name());
/// ```
pub fn winners(hands: &[Hand]) -> Vec<&Hand> {
    let qualified: Vec<&Hand> = hands.iter().filter(|h| h.is_qualified()).collect();
    let Some(best) = qualified.iter().map(|h| h.strength()).max() else {
        return Vec::new();
    };
    let top: Vec<&Hand> = qualified
        .into_iter()
        .filter(|h| h.strength() == best)
        .collect();
    top.iter()
        .copied()
        .filter(|h| !top.iter().any(|other| h.loses_to(other)))
        .collect()
}
