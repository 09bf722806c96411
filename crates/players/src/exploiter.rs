use super::mode::Mode;
use super::profile::Profile;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;
use kuhn_gameroom::*;
use kuhn_gto::*;

/// Plays equilibrium until the opponent shows a leak, then deviates.
///
/// After every hand the opponent's actions go into a [`Profile`]; before
/// every decision the profile's threshold rules pick a [`Mode`] for the
/// seat being played. While learning, or when no rule fires, decisions are
/// the oracle's. Otherwise the active deviation overrides the equilibrium
/// probability at the decisions it targets.
pub struct Exploiter {
    name: String,
    oracle: Oracle,
    profile: Option<Profile>,
    modes: [Mode; N],
}

impl Exploiter {
    pub fn new(oracle: Oracle) -> Self {
        Self {
            name: String::from("Exploiter"),
            oracle,
            profile: None,
            modes: [Mode::Learning; N],
        }
    }
    pub fn named(self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self
        }
    }
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
    /// Current mode when playing from `seat`.
    pub fn mode(&self, seat: Position) -> Mode {
        self.modes[seat]
    }
    /// Policy for a decision from `seat`, after any active deviation.
    pub fn policy(&self, seat: Position, card: Card, node: Node) -> Policy {
        let base = self.oracle.policy(card, node);
        match self.modes[seat].deviation() {
            Some(deviation) => Policy::lean(node, deviation.adjust(card, node, base.aggression())),
            None => base,
        }
    }
}

impl Agent for Exploiter {
    fn name(&self) -> &str {
        &self.name
    }
    fn decide(&mut self, recall: &Partial, legal: &[Action], dice: &mut Dice) -> Action {
        recall
            .node()
            .and_then(|node| self.policy(recall.seat(), recall.card(), node).sample(dice))
            .filter(|action| legal.contains(action))
            .or_else(|| legal.first().copied())
            .expect("non empty legal actions conditional on being asked to move")
    }
    fn observe(&mut self, record: &Record, seat: Position) {
        let profile = self.profile.get_or_insert_with(Profile::default);
        profile.observe(record, seat);
        let mode = profile.mode(seat);
        if mode != self.modes[seat] {
            log::info!(
                "[exploit] {} P{} after hand {}: {} -> {}",
                self.name,
                seat,
                record.hand(),
                self.modes[seat],
                mode
            );
            self.modes[seat] = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use kuhn_cards::Deal;

    fn exploiter() -> Exploiter {
        Exploiter::new(Oracle::new(Alpha::default()).unwrap())
    }

    #[test]
    fn profile_created_lazily() {
        let mut agent = exploiter();
        assert!(agent.profile().is_none());
        let record = Record::replay(0, Deal::from([Card::King, Card::Queen]), &[Action::Check, Action::Check]).unwrap();
        agent.observe(&record, 0);
        assert!(agent.profile().is_some());
        assert_eq!(agent.mode(0), Mode::Learning);
    }
    #[test]
    fn folding_opponent_draws_bluffs() {
        let mut agent = exploiter();
        let baseline = agent.policy(0, Card::Jack, Node::Open).aggression();
        for hand in 0..25 {
            let record = Record::replay(hand, Deal::from([Card::Jack, Card::Queen]), &[Action::Bet, Action::Fold]).unwrap();
            agent.observe(&record, 0);
        }
        assert_eq!(agent.mode(0), Mode::Exploit(Deviation::Bluff));
        let bluff = agent.policy(0, Card::Jack, Node::Open).aggression();
        assert!(bluff > baseline);
        assert_eq!(bluff, 1.);
        // hand 26 from seat 0 with Jack always bluffs
        let game = Game::from(Deal::from([Card::Jack, Card::King]));
        let ref mut dice = dice(26);
        for _ in 0..50 {
            assert_eq!(agent.decide(&game.partial(0), &game.legal(), dice), Action::Bet);
        }
    }
    #[test]
    fn learning_matches_oracle() {
        let agent = exploiter();
        let oracle = Oracle::new(Alpha::default()).unwrap();
        for node in Node::all() {
            for card in Card::all() {
                assert_eq!(agent.policy(node.seat(), card, node), oracle.policy(card, node));
            }
        }
    }
    #[test]
    fn beats_calling_station() {
        let mut station = HumanLike::new(Bias {
            open: [0., 0., 0.],
            check: [0., 0., 0.],
            bet: [1., 1., 1.],
            check_bet: [1., 1., 1.],
        })
        .named("station");
        let mut agent = exploiter();
        let session = Arena::new(2000, 11)
            .mirrored(true)
            .run(&mut agent, &mut station);
        assert_eq!(agent.mode(0), Mode::Exploit(Deviation::ValueOnly));
        assert!(session.total(0) > 0);
    }
}
