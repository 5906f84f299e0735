//! Wall-clock time and dice for the settlement ports.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Reads the real UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Uniform probability rolls from a `StdRng`.
///
/// The generator sits behind a mutex so one instance can be shared as
/// `Arc<dyn RandomPort>`. A seeded instance replays the same roll sequence.
#[derive(Debug)]
pub struct SystemRandom {
    rng: Mutex<StdRng>,
}

impl SystemRandom {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_probability(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..1.0)
    }
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_probability(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_unit_interval() {
        let random = SystemRandom::new();
        for _ in 0..1_000 {
            let roll = random.gen_probability();
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let first = SystemRandom::seeded(2077);
        let second = SystemRandom::seeded(2077);

        let a: Vec<f64> = (0..8).map(|_| first.gen_probability()).collect();
        let b: Vec<f64> = (0..8).map(|_| second.gen_probability()).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let earlier = clock.now();
        assert!(clock.now() >= earlier);
    }
}
