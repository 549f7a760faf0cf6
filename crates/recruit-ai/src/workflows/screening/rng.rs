//! Seeded linear-congruential generator backing every synthesis call.
//!
//! Nothing in candidate synthesis may touch a platform RNG. Each call to the
//! synthesizer derives a seed from the job identifier and owns a fresh
//! generator, so pools are reproducible across runs and processes.

use super::domain::JobId;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Added to the character-code sum of a job id when deriving its seed.
pub const SEED_OFFSET: u32 = 42;

/// Stateful generator yielding floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn for_job(job_id: &JobId) -> Self {
        Self::new(seed_for_job(job_id))
    }

    /// Advance the state (`state * A + C mod 2^32`) and return `state / 2^32`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Bernoulli trial: true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// `floor(next * span)`, clamped to `span - 1`. `span` must be non-zero.
    pub fn below(&mut self, span: usize) -> usize {
        let index = (self.next_f64() * span as f64).floor() as usize;
        index.min(span.saturating_sub(1))
    }
}

/// Sum of the id's character codes plus [`SEED_OFFSET`], wrapping in 32 bits.
pub fn seed_for_job(job_id: &JobId) -> u32 {
    job_id
        .0
        .chars()
        .fold(SEED_OFFSET, |acc, ch| acc.wrapping_add(ch as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_sequence() {
        let mut first = SeededRng::new(1234);
        let mut second = SeededRng::new(1234);
        let a: Vec<f64> = (0..64).map(|_| first.next_f64()).collect();
        let b: Vec<f64> = (0..64).map(|_| second.next_f64()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn outputs_stay_in_unit_interval() {
        let mut rng = SeededRng::new(u32::MAX);
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "{value} escaped [0, 1)");
        }
    }

    #[test]
    fn first_draw_follows_the_recurrence() {
        let mut rng = SeededRng::new(0);
        let expected = f64::from(INCREMENT) / MODULUS;
        assert_eq!(rng.next_f64(), expected);
    }

    #[test]
    fn job_seed_sums_character_codes() {
        // 'j' (106) + 'd' (100) + '1' (49) + offset
        assert_eq!(seed_for_job(&JobId("jd1".to_string())), 255 + SEED_OFFSET);
        assert_eq!(seed_for_job(&JobId(String::new())), SEED_OFFSET);
    }

    #[test]
    fn below_never_reaches_span() {
        let mut rng = SeededRng::new(99);
        for _ in 0..5_000 {
            assert!(rng.below(7) < 7);
        }
        assert_eq!(rng.below(1), 0);
    }
}
