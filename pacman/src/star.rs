//! The star and its symbol-matching minigame.
//!
//! Two displayed symbols are re-rolled every couple of seconds. After a fixed
//! delay the star appears along with a target symbol; collecting it pays out
//! according to how the displayed symbols line up with the target at that
//! moment.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::collectable::Collectable;
use crate::constants::score::{STAR_CONSOLATION, STAR_JACKPOT, STAR_PAIR};
use crate::constants::star::{REVEAL_DELAY, SYMBOL_COUNT, SYMBOL_CYCLE};
use crate::events::GameEvent;
use crate::timer::Countdown;

/// Bonus for collecting the star with symbols `a` and `b` displayed, against `target`.
///
/// 5000 when both symbols match the target, 2000 when they only match each
/// other (or there is no target yet), 500 otherwise.
pub fn star_bonus(a: u8, b: u8, target: Option<u8>) -> u32 {
    if a != b {
        return STAR_CONSOLATION;
    }
    match target {
        Some(target) if target == a => STAR_JACKPOT,
        _ => STAR_PAIR,
    }
}

#[derive(Debug, Clone)]
pub struct StarGame {
    star: Collectable,
    reveal: Countdown,
    cycle: Countdown,
    symbols: (u8, u8),
    target: Option<u8>,
}

impl StarGame {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            star: Collectable::star(pos),
            reveal: Countdown::started(REVEAL_DELAY),
            cycle: Countdown::started(SYMBOL_CYCLE),
            symbols: roll_symbols(rng),
            target: None,
        }
    }

    /// Advances the symbol cycle and the reveal timer.
    ///
    /// Returns [`GameEvent::StarShown`] on the frame the star appears.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> Option<GameEvent> {
        if self.cycle.tick(dt) {
            self.symbols = roll_symbols(rng);
            self.cycle.start();
        }

        if self.reveal.tick(dt) && self.star.show() {
            let target = rng.random_range(0..SYMBOL_COUNT);
            self.target = Some(target);
            debug!(target, "Star revealed");
            return Some(GameEvent::StarShown);
        }

        None
    }

    /// Collects the star if it touches the given circle, returning the bonus earned.
    pub fn try_collect(&mut self, pos: Vec2, radius: f32) -> Option<u32> {
        if !self.star.collect_if_touching(pos, radius) {
            return None;
        }

        let (a, b) = self.symbols;
        let bonus = star_bonus(a, b, self.target);
        debug!(a, b, target = ?self.target, bonus, "Star collected");
        Some(bonus)
    }

    pub fn star(&self) -> &Collectable {
        &self.star
    }

    pub fn symbols(&self) -> (u8, u8) {
        self.symbols
    }

    /// Forces the displayed symbols. Meant for debugging and tests.
    pub fn set_symbols(&mut self, a: u8, b: u8) {
        self.symbols = (a, b);
    }

    pub fn target(&self) -> Option<u8> {
        self.target
    }

    /// Seconds until the star appears; zero once it has.
    pub fn time_until_reveal(&self) -> f32 {
        self.reveal.remaining()
    }
}

fn roll_symbols(rng: &mut impl Rng) -> (u8, u8) {
    (rng.random_range(0..SYMBOL_COUNT), rng.random_range(0..SYMBOL_COUNT))
}
