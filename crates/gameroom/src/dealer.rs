use super::agent::Agent;
use kuhn_cards::Deal;
use kuhn_core::*;
use kuhn_gameplay::*;

/// Plays single hands between two seated agents.
///
/// The dealer owns the [`Game`] for the duration of a hand. Each turn it
/// queries the legal actions, asks the acting agent, and applies the answer
/// through [`Game::try_apply`]. An illegal answer ends the hand with an
/// error and nothing is observed, so a broken agent can never produce a
/// result.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: u64,
    game: Game,
}

impl Dealer {
    pub fn new(hand: u64, deal: Deal) -> Self {
        Self {
            hand,
            game: Game::from(deal),
        }
    }
    /// Runs the hand to completion, then lets both seats observe it.
    pub fn play(mut self, mut seats: [&mut dyn Agent; N], dice: &mut Dice) -> Result<Record, IllegalAction> {
        while let Turn::Choice(seat) = self.game.turn() {
            let legal = self.game.legal();
            let recall = self.game.partial(seat);
            let action = seats[seat].decide(&recall, &legal, dice);
            log::trace!(
                "[dealer] hand {} {} P{} holding {} -> {}",
                self.hand,
                self.game.history(),
                seat,
                recall.card(),
                action
            );
            self.game = self.game.try_apply(action)?;
        }
        let record = self
            .game
            .record(self.hand)
            .expect("betting loop exits only at a terminal state");
        for (seat, agent) in seats.iter_mut().enumerate() {
            agent.observe(&record, seat);
        }
        log::debug!("[dealer] {}", record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuhn_cards::Card;

    /// Plays a fixed script, one action per call, and remembers what it saw.
    struct Script {
        moves: Vec<Action>,
        seen: Vec<(Card, Position)>,
        observed: Vec<Position>,
    }
    impl Script {
        fn new(moves: Vec<Action>) -> Self {
            Self {
                moves,
                seen: vec![],
                observed: vec![],
            }
        }
    }
    impl Agent for Script {
        fn name(&self) -> &str {
            "script"
        }
        fn decide(&mut self, recall: &Partial, _: &[Action], _: &mut Dice) -> Action {
            self.seen.push((recall.card(), recall.seat()));
            self.moves.remove(0)
        }
        fn observe(&mut self, _: &Record, seat: Position) {
            self.observed.push(seat);
        }
    }

    #[test]
    fn plays_to_showdown() {
        let deal = Deal::from([Card::Queen, Card::King]);
        let mut a = Script::new(vec![Action::Check, Action::Call]);
        let mut b = Script::new(vec![Action::Bet]);
        let record = Dealer::new(3, deal)
            .play([&mut a, &mut b], &mut dice(0))
            .unwrap();
        assert_eq!(record.actions(), &[Action::Check, Action::Bet, Action::Call]);
        assert_eq!(record.payoffs(), [-2, 2]);
        assert_eq!(a.seen, vec![(Card::Queen, 0), (Card::Queen, 0)]);
        assert_eq!(b.seen, vec![(Card::King, 1)]);
        assert_eq!(a.observed, vec![0]);
        assert_eq!(b.observed, vec![1]);
    }
    #[test]
    fn illegal_action_discards_hand() {
        let deal = Deal::from([Card::Jack, Card::King]);
        let mut a = Script::new(vec![Action::Call]);
        let mut b = Script::new(vec![]);
        let err = Dealer::new(0, deal)
            .play([&mut a, &mut b], &mut dice(0))
            .unwrap_err();
        assert_eq!(err.action(), Action::Call);
        assert!(a.observed.is_empty());
        assert!(b.observed.is_empty());
    }
}
