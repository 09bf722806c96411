use super::policy::Policy;
use super::strategy::Strategy;
use super::table::Table;
use kuhn_cards::*;
use kuhn_core::*;
use kuhn_gameplay::*;

/// Exact expected payoff to seat 0 when `hero` sits in seat 0 and
/// `villain` in seat 1, averaged over the six equally likely deals.
///
/// Fails if either strategy puts weight on an illegal action.
pub fn evaluate(hero: &dyn Strategy, villain: &dyn Strategy) -> Result<Utility, IllegalAction> {
    let deals = Deal::all();
    let mut total = 0.;
    for deal in deals.iter() {
        total += expand(&Game::from(*deal), [hero, villain])?;
    }
    Ok(total / deals.len() as Utility)
}

/// Best pure counter-strategy for `seat` against `strategy` in the other
/// seat, and its expected value to `seat`.
///
/// A seat owns two decision points with three cards each, so there are
/// only 64 pure strategies; all of them are evaluated exactly.
pub fn best_response(strategy: &dyn Strategy, seat: Position) -> Result<(Table, Utility), IllegalAction> {
    let nodes = Node::all()
        .into_iter()
        .filter(|node| node.seat() == seat)
        .collect::<Vec<_>>();
    let mut best = (pure(&nodes, 0), Utility::NEG_INFINITY);
    for mask in 0..1u32 << (nodes.len() * RANKS) {
        let response = pure(&nodes, mask);
        let value = match seat {
            0 => evaluate(&response, strategy)?,
            _ => -evaluate(strategy, &response)?,
        };
        if value > best.1 {
            best = (response, value);
        }
    }
    Ok(best)
}

/// Average gain of a best responder over the game value, across both seats.
///
/// Zero exactly at equilibrium and positive for any strategy that can be
/// exploited.
pub fn exploitability(strategy: &dyn Strategy) -> Result<Utility, IllegalAction> {
    let (_, first) = best_response(strategy, 0)?;
    let (_, second) = best_response(strategy, 1)?;
    Ok((first + second) / 2.)
}

/// Pure strategy where bit `i * RANKS + card` of `mask` decides BET/CALL at `nodes[i]`.
fn pure(nodes: &[Node], mask: u32) -> Table {
    Table::from_fn(|node, card| match nodes.iter().position(|n| *n == node) {
        Some(i) => {
            let bit = i * RANKS + u8::from(card) as usize;
            Policy::lean(node, ((mask >> bit) & 1) as Probability)
        }
        None => Policy::lean(node, 0.),
    })
}

fn expand(game: &Game, seats: [&dyn Strategy; N]) -> Result<Utility, IllegalAction> {
    match game.node() {
        None => Ok(game.payoffs().map(|p| p[0] as Utility).unwrap_or_default()),
        Some(node) => {
            let seat = node.seat();
            let policy = seats[seat].policy(game.deal().card(seat), node);
            let mut value = 0.;
            for (action, p) in policy.iter().filter(|(_, p)| *p > 0.) {
                value += p * expand(&game.try_apply(*action)?, seats)?;
            }
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    const VALUE: Utility = -1. / 18.;

    #[test]
    fn equilibrium_value_is_constant_in_alpha() {
        for alpha in [0., 1. / 6., 1. / 3.] {
            let equilibrium = Equilibrium::new(Alpha::new(alpha).unwrap());
            let value = evaluate(&equilibrium, &equilibrium).unwrap();
            assert!((value - VALUE).abs() < TOLERANCE, "α={} value={}", alpha, value);
        }
    }
    #[test]
    fn equilibrium_is_unexploitable() {
        for alpha in [0., 1. / 6., 1. / 3.] {
            let equilibrium = Equilibrium::new(Alpha::new(alpha).unwrap());
            let gap = exploitability(&equilibrium).unwrap();
            assert!(gap.abs() <= TOLERANCE, "α={} exploitability={}", alpha, gap);
        }
    }
    #[test]
    fn best_response_recovers_game_value() {
        let equilibrium = Equilibrium::default();
        let (_, first) = best_response(&equilibrium, 0).unwrap();
        let (_, second) = best_response(&equilibrium, 1).unwrap();
        assert!((first - VALUE).abs() < TOLERANCE);
        assert!((second + VALUE).abs() < TOLERANCE);
    }
    #[test]
    fn calling_station_is_exploitable() {
        let station = Table::from_fn(|node, _| match node.context() {
            Context::Opening => Policy::lean(node, 0.),
            Context::Facing => Policy::lean(node, 1.),
        });
        assert!(exploitability(&station).unwrap() > 0.1);
        let (response, _) = best_response(&station, 0).unwrap();
        assert_eq!(response.get(Card::Jack, Node::Open).aggression(), 0.);
        assert_eq!(response.get(Card::King, Node::Open).aggression(), 1.);
    }
    #[test]
    fn illegal_weight_is_reported() {
        let broken = Table::from_fn(|_, _| Policy::pure(Action::Call));
        assert!(evaluate(&broken, &broken).is_err());
    }
}
