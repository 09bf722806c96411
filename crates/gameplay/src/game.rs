use super::*;
use kuhn_cards::*;
use kuhn_core::*;

/// The state of one Kuhn poker hand.
///
/// `Game` is the betting state machine. It owns the deal, each seat's
/// contribution to the pot, and the action history, and derives everything
/// else (whose turn, legal actions, terminal payoffs) from those.
///
/// # Invariants
///
/// - The pot is exactly the sum of the contributions.
/// - While live, exactly one seat is to act; once terminal, no action is accepted.
/// - Terminal payoffs sum to zero.
///
/// Transitions are functional: [`try_apply`](Self::try_apply) returns a new
/// `Game` and leaves the receiver untouched, so a rejected action can never
/// corrupt the hand in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    deal: Deal,
    history: History,
    stakes: [Chips; N],
}

impl From<Deal> for Game {
    /// Both seats post the ante; seat 0 acts first.
    fn from(deal: Deal) -> Self {
        Self {
            deal,
            history: History::new(),
            stakes: [ANTE; N],
        }
    }
}

/// Public state accessors.
impl Game {
    /// Total chips in the pot.
    pub fn pot(&self) -> Chips {
        self.stakes.iter().sum()
    }
    /// Chips each seat has put in, ante included.
    pub fn stakes(&self) -> [Chips; N] {
        self.stakes
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    /// Private cards. Only the dealer and post-hand observers may look.
    pub fn deal(&self) -> Deal {
        self.deal
    }
    /// Current decision point.
    pub fn node(&self) -> Option<Node> {
        self.history.node()
    }
    /// Determines whether a seat is to act or the hand is over.
    pub fn turn(&self) -> Turn {
        match self.node() {
            Some(node) => Turn::Choice(node.seat()),
            None => Turn::Terminal,
        }
    }
    pub fn is_terminal(&self) -> bool {
        self.history.is_terminal()
    }
    /// The acting seat's view of the hand: its own card and the public state.
    pub fn partial(&self, seat: Position) -> Partial {
        Partial::new(seat, self.deal.card(seat), self.history.clone(), self.stakes)
    }
}

/// Action validation and application.
impl Game {
    /// Returns all legal actions in the current state. Empty once terminal.
    pub fn legal(&self) -> Vec<Action> {
        self.node()
            .map(|node| node.legal().to_vec())
            .unwrap_or_default()
    }
    /// Whether the action is in the current legal set.
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.legal().contains(action)
    }
    /// Returns a new game state with the action applied.
    ///
    /// Returns `Err` if the action is not legal in the current state; the
    /// receiver is never modified.
    pub fn try_apply(&self, action: Action) -> Result<Self, IllegalAction> {
        if !self.is_allowed(&action) {
            return Err(IllegalAction::new(action, self.history.clone()));
        }
        let mut child = self.clone();
        child.act(action);
        Ok(child)
    }
    fn act(&mut self, action: Action) {
        let seat = History::actor(self.history.len());
        self.stakes[seat] += action.amount();
        self.history.push(action);
        debug_assert!(self.stakes.iter().all(|s| *s >= ANTE));
    }
}

/// Terminal resolution.
impl Game {
    /// How the hand ended. None while live.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.is_terminal(), self.history.last()) {
            (false, _) => None,
            (true, Some(Action::Fold)) => Some(Outcome::Fold(History::actor(self.history.len() - 1))),
            (true, _) => Some(Outcome::Showdown(self.deal.leader())),
        }
    }
    /// Seat that takes the pot. None while live.
    pub fn winner(&self) -> Option<Position> {
        self.outcome().map(|o| o.winner())
    }
    /// Net chip change per seat relative to the start of the hand.
    ///
    /// The winner collects the whole pot, so gains its opponent's stake;
    /// the loser forfeits its own stake.
    pub fn payoffs(&self) -> Option<[Chips; N]> {
        let winner = self.winner()?;
        let mut payoffs = [0; N];
        for seat in 0..N {
            payoffs[seat] = match seat == winner {
                true => self.pot() - self.stakes[seat],
                false => -self.stakes[seat],
            };
        }
        debug_assert_eq!(payoffs.iter().sum::<Chips>(), 0);
        Some(payoffs)
    }
    /// The completed hand as a record. None while live.
    pub fn record(&self, hand: u64) -> Option<Record> {
        Some(Record::new(
            hand,
            self.deal,
            self.history.clone(),
            self.payoffs()?,
            timestamp(),
        ))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Game(pot={}, history={}, turn={})",
            self.pot(),
            self.history,
            self.turn()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cards: [Card; N], actions: &[Action]) -> Game {
        actions
            .iter()
            .fold(Game::from(Deal::from(cards)), |game, a| game.try_apply(*a).unwrap())
    }
    /// Every terminal line of the betting tree.
    fn lines() -> Vec<Vec<Action>> {
        use Action::*;
        vec![
            vec![Check, Check],
            vec![Check, Bet, Call],
            vec![Check, Bet, Fold],
            vec![Bet, Call],
            vec![Bet, Fold],
        ]
    }
    fn deals() -> Vec<[Card; N]> {
        Card::all()
            .into_iter()
            .flat_map(|a| Card::all().into_iter().map(move |b| [a, b]))
            .filter(|[a, b]| a != b)
            .collect()
    }

    #[test]
    fn root_state() {
        let game = Game::from(Deal::from([Card::Jack, Card::King]));
        assert_eq!(game.pot(), 2 * ANTE);
        assert_eq!(game.turn(), Turn::Choice(0));
        assert_eq!(game.legal(), vec![Action::Check, Action::Bet]);
        assert!(game.payoffs().is_none());
    }
    #[test]
    fn pot_is_sum_of_stakes() {
        for cards in deals() {
            for line in lines() {
                let mut game = Game::from(Deal::from(cards));
                for action in line {
                    game = game.try_apply(action).unwrap();
                    assert_eq!(game.pot(), game.stakes().iter().sum::<Chips>());
                }
            }
        }
    }
    #[test]
    fn zero_sum_payoffs() {
        for cards in deals() {
            for line in lines() {
                let game = play(cards, &line);
                let payoffs = game.payoffs().unwrap();
                assert_eq!(payoffs.iter().sum::<Chips>(), 0);
            }
        }
    }
    #[test]
    fn showdown_goes_to_higher_card() {
        for cards in deals() {
            for line in lines().into_iter().filter(|l| l.last() != Some(&Action::Fold)) {
                let game = play(cards, &line);
                let winner = game.winner().unwrap();
                assert!(game.outcome().unwrap().is_showdown());
                assert!(cards[winner].beats(&cards[1 - winner]));
            }
        }
    }
    #[test]
    fn folder_never_wins() {
        for cards in deals() {
            for line in lines().into_iter().filter(|l| l.last() == Some(&Action::Fold)) {
                let game = play(cards, &line);
                let folder = History::actor(line.len() - 1);
                assert_eq!(game.outcome(), Some(Outcome::Fold(folder)));
                assert!(game.payoffs().unwrap()[folder] < 0);
            }
        }
    }
    #[test]
    fn payoff_magnitudes() {
        use Action::*;
        let cards = [Card::King, Card::Jack];
        assert_eq!(play(cards, &[Check, Check]).payoffs(), Some([1, -1]));
        assert_eq!(play(cards, &[Bet, Call]).payoffs(), Some([2, -2]));
        assert_eq!(play(cards, &[Bet, Fold]).payoffs(), Some([1, -1]));
        assert_eq!(play(cards, &[Check, Bet, Fold]).payoffs(), Some([-1, 1]));
        assert_eq!(play(cards, &[Check, Bet, Call]).payoffs(), Some([2, -2]));
    }
    #[test]
    fn call_without_bet_is_rejected() {
        let game = Game::from(Deal::from([Card::Queen, Card::King]));
        let before = game.clone();
        let err = game.try_apply(Action::Call).unwrap_err();
        assert_eq!(err.action(), Action::Call);
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 0);
        assert_eq!(game.pot(), 2 * ANTE);
    }
    #[test]
    fn terminal_state_is_frozen() {
        let game = play([Card::Queen, Card::Jack], &[Action::Bet, Action::Fold]);
        assert_eq!(game.turn(), Turn::Terminal);
        assert!(game.legal().is_empty());
        for action in Action::all() {
            assert!(game.try_apply(action).is_err());
        }
    }
    #[test]
    fn partial_hides_opponent_card() {
        let game = play([Card::Queen, Card::Jack], &[Action::Check]);
        let view = game.partial(1);
        assert_eq!(view.card(), Card::Jack);
        assert_eq!(view.seat(), 1);
        assert_eq!(view.legal(), vec![Action::Check, Action::Bet]);
        assert_eq!(view.pot(), 2 * ANTE);
    }
}
