use super::agent::Agent;
use super::dealer::Dealer;
use super::entry::Entry;
use super::session::Session;
use kuhn_cards::Deal;
use kuhn_core::*;

/// A seeded tournament between two agents.
///
/// Hands are played strictly one after another with a single random source
/// seeded from `seed`, so a run is exactly reproducible. The first agent
/// sits in seat 0 on even hands and seat 1 on odd hands. With `mirror` set,
/// every deal is replayed once on the next hand, where the agents have
/// swapped seats: each agent plays both sides of the same cards.
///
/// The interrupt flag is checked before each hand; an interrupted run
/// returns the hands completed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    hands: u64,
    seed: u64,
    mirror: bool,
}

impl Arena {
    pub fn new(hands: u64, seed: u64) -> Self {
        Self {
            hands,
            seed,
            mirror: false,
        }
    }
    pub fn mirrored(self, mirror: bool) -> Self {
        Self { mirror, ..self }
    }
    pub fn hands(&self) -> u64 {
        self.hands
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn mirror(&self) -> bool {
        self.mirror
    }
    pub fn run(&self, a: &mut dyn Agent, b: &mut dyn Agent) -> Session {
        let ref mut dice = dice(self.seed);
        let mut session = Session::new([a.name().to_string(), b.name().to_string()]);
        let mut replay = None::<Deal>;
        log::info!(
            "[arena] {} vs {}: {} hands, seed {}{}",
            a.name(),
            b.name(),
            self.hands,
            self.seed,
            if self.mirror { ", mirrored" } else { "" }
        );
        for hand in 0..self.hands {
            if interrupted() {
                log::warn!("[arena] interrupted after {} hands", hand);
                break;
            }
            let deal = match replay.take() {
                Some(deal) => deal,
                None => {
                    let deal = Deal::sample(dice);
                    if self.mirror {
                        replay = Some(deal);
                    }
                    deal
                }
            };
            let (seating, seats): ([usize; N], [&mut dyn Agent; N]) = match hand % 2 {
                0 => ([0, 1], [&mut *a, &mut *b]),
                _ => ([1, 0], [&mut *b, &mut *a]),
            };
            match Dealer::new(hand, deal).play(seats, dice) {
                Ok(record) => session.push(Entry::new(record, seating)),
                Err(e) => {
                    log::error!("[arena] hand {} discarded: {}", hand, e);
                    session.discard();
                }
            }
            if (hand + 1) % LOG_INTERVAL == 0 {
                log::info!("[arena] {:>8} hands  {:+} / {:+}", hand + 1, session.total(0), session.total(1));
            }
        }
        log::info!("[arena] {}", session);
        session
    }
}
