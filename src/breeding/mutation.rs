//! # Mutation
//!
//! Whole-genome mutation: a random `gene_length`-bit mask is drawn for every
//! offspring and, with probability `mutate_prob`, XOR-ed into it. When it fires it
//! flips every bit set in the mask (about half of the genome on average); when it
//! does not, the offspring is left untouched.

use tracing::trace;

use crate::error::Result;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// The outcome of one mutation trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    /// The genome after the trial.
    pub offspring: Genome,
    /// The mask that was drawn, whether or not it was applied.
    pub mask: Genome,
    /// Whether the mask was XOR-ed into the genome.
    pub applied: bool,
}

/// Runs one mutation trial on `genome`.
///
/// # Example
///
/// ```rust
/// use bitgenalg::breeding::mutation::mutate;
/// use bitgenalg::genome::Genome;
/// use bitgenalg::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(8);
/// let genome = Genome::from_u64(16, 0xbeef).unwrap();
///
/// let outcome = mutate(genome.clone(), 1.0, &mut rng).unwrap();
/// assert!(outcome.applied);
/// assert_eq!(outcome.offspring, genome.xor(&outcome.mask));
/// ```
pub fn mutate(
    genome: Genome,
    mutate_prob: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<Mutation> {
    let mask = Genome::random(genome.width(), rng)?;
    let applied = rng.chance(mutate_prob);
    trace!(applied, "mutation");

    let offspring = if applied { genome.xor(&mask) } else { genome };
    Ok(Mutation {
        offspring,
        mask,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_probability_never_changes() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        for _ in 0..500 {
            let genome = Genome::random(40, &mut rng).unwrap();
            let outcome = mutate(genome.clone(), 0.0, &mut rng).unwrap();
            assert!(!outcome.applied);
            assert_eq!(outcome.offspring, genome);
        }
    }

    #[test]
    fn test_full_probability_always_applies_drawn_mask() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        for _ in 0..500 {
            let genome = Genome::random(70, &mut rng).unwrap();
            let outcome = mutate(genome.clone(), 1.0, &mut rng).unwrap();
            assert!(outcome.applied);
            assert_eq!(outcome.offspring, genome.xor(&outcome.mask));
        }
    }

    #[test]
    fn test_mask_is_reproducible_from_seed() {
        let genome = Genome::from_u64(12, 0xabc).unwrap();

        let mut replay = RandomNumberGenerator::from_seed(77);
        let expected_mask = Genome::random(12, &mut replay).unwrap();

        let mut rng = RandomNumberGenerator::from_seed(77);
        let outcome = mutate(genome.clone(), 1.0, &mut rng).unwrap();

        assert_eq!(outcome.mask, expected_mask);
        assert_eq!(outcome.offspring, genome.xor(&expected_mask));
    }

    #[test]
    fn test_offspring_stays_within_width() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let genome = Genome::low_mask(5, 5).unwrap();
        for _ in 0..200 {
            let outcome = mutate(genome.clone(), 1.0, &mut rng).unwrap();
            assert!(outcome.offspring.to_u64().unwrap() < 32);
        }
    }

    #[test]
    fn test_firing_rate() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let genome = Genome::zero(8).unwrap();
        let trials = 20_000;
        let fired = (0..trials)
            .filter(|_| mutate(genome.clone(), 0.3, &mut rng).unwrap().applied)
            .count();
        let rate = fired as f64 / trials as f64;
        assert!((rate - 0.3).abs() < 0.02, "firing rate was {}", rate);
    }
}
