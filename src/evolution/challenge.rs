use crate::error::Result;
use crate::genome::Genome;

/// The fitness evaluator: maps a genome to a real-valued score, higher is better.
///
/// Scores must be finite and non-negative, and at least one score per generation
/// should be positive for selection pressure to exist.
///
/// Any `Fn(&Genome) -> f64` closure is a `Challenge`:
///
/// ```rust
/// use bitgenalg::evolution::Challenge;
/// use bitgenalg::genome::Genome;
///
/// let one_max = |genome: &Genome| genome.count_ones() as f64;
/// assert_eq!(one_max.score(&Genome::from_u64(8, 0b1011).unwrap()), 3.0);
/// ```
pub trait Challenge {
    fn score(&self, genome: &Genome) -> f64;

    /// Fallible scoring. The launcher calls this method; override it to abort the
    /// run with an error instead of returning a score.
    fn try_score(&self, genome: &Genome) -> Result<f64> {
        Ok(self.score(genome))
    }
}

impl<F> Challenge for F
where
    F: Fn(&Genome) -> f64,
{
    fn score(&self, genome: &Genome) -> f64 {
        self(genome)
    }
}
