use super::card::Card;
use super::deal::Deal;
use kuhn_core::*;
use rand::Rng;

/// The undealt cards of a hand.
///
/// Starts with all three ranks. Each [`draw`](Self::draw) removes a card
/// chosen uniformly from what remains, so a deal never repeats a card.
/// Randomness is always supplied by the caller to keep runs reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full three-card deck.
    pub fn new() -> Self {
        Self(Card::all().to_vec())
    }
    /// Cards remaining.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card. None once exhausted.
    pub fn draw(&mut self, dice: &mut Dice) -> Option<Card> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(dice.random_range(0..n))),
        }
    }
    /// Deals one private card to each seat.
    pub fn deal(&mut self, dice: &mut Dice) -> Option<Deal> {
        let a = self.draw(dice)?;
        let b = self.draw(dice)?;
        Some(Deal::from([a, b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_without_replacement() {
        let ref mut dice = dice(7);
        let mut deck = Deck::new();
        let a = deck.draw(dice).unwrap();
        let b = deck.draw(dice).unwrap();
        let c = deck.draw(dice).unwrap();
        assert!(a != b && b != c && a != c);
        assert_eq!(deck.size(), 0);
        assert!(deck.draw(dice).is_none());
    }
    #[test]
    fn deals_are_uniform() {
        let ref mut dice = dice(42);
        let mut counts = std::collections::HashMap::<(Card, Card), usize>::new();
        for _ in 0..60_000 {
            let deal = Deck::new().deal(dice).unwrap();
            *counts.entry((deal.card(0), deal.card(1))).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n > 9_000 && n < 11_000));
    }
    #[test]
    fn same_seed_same_deals() {
        let ref mut a = dice(3);
        let ref mut b = dice(3);
        for _ in 0..100 {
            assert_eq!(Deck::new().deal(a), Deck::new().deal(b));
        }
    }
}
