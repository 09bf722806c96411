use super::card::Card;
use kuhn_core::*;

/// The private cards of one hand, indexed by seat.
///
/// Two seats always hold distinct ranks. Each agent only ever sees its own
/// entry; the whole deal is revealed to observers once the hand is over.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Deal([Card; N]);

impl Deal {
    /// Every possible deal: the six ordered pairs of distinct cards.
    pub fn all() -> Vec<Self> {
        Card::all()
            .into_iter()
            .flat_map(|a| Card::all().into_iter().map(move |b| [a, b]))
            .filter(|[a, b]| a != b)
            .map(Self)
            .collect()
    }
    /// Deals two cards from a fresh deck.
    pub fn sample(dice: &mut Dice) -> Self {
        super::deck::Deck::new()
            .deal(dice)
            .expect("a fresh deck holds three cards")
    }
    /// Card held by a seat.
    pub fn card(&self, seat: Position) -> Card {
        self.0[seat]
    }
    /// Both cards in seat order.
    pub fn cards(&self) -> [Card; N] {
        self.0
    }
    /// Seat holding the higher card.
    pub fn leader(&self) -> Position {
        if self.0[0].beats(&self.0[1]) { 0 } else { 1 }
    }
}

impl From<[Card; N]> for Deal {
    fn from(cards: [Card; N]) -> Self {
        debug_assert!(cards[0] != cards[1], "deal repeats {}", cards[0]);
        Self(cards)
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_holds_higher_card() {
        assert_eq!(Deal::from([Card::King, Card::Jack]).leader(), 0);
        assert_eq!(Deal::from([Card::Queen, Card::King]).leader(), 1);
    }
    #[test]
    fn six_possible_deals() {
        let deals = Deal::all();
        assert_eq!(deals.len(), 6);
        assert!(deals.iter().all(|d| d.card(0) != d.card(1)));
        assert_eq!(deals.iter().filter(|d| d.leader() == 0).count(), 3);
    }
    #[test]
    fn sampled_deal_is_distinct() {
        let ref mut dice = dice(5);
        for _ in 0..50 {
            let deal = Deal::sample(dice);
            assert!(deal.card(0) != deal.card(1));
            assert!(Deal::all().contains(&deal));
        }
    }
}
