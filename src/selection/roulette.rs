use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::genome::{Genome, ScoredGenome};
use crate::rng::RandomNumberGenerator;

use super::FitnessWeights;

/// Roulette wheel (fitness proportionate) parent selection over one ranked generation.
///
/// The wheel borrows the generation's ranked list, so weight `i` always belongs
/// to `ranked[i]`. Parents are drawn with replacement; a mating pair is redrawn
/// as a whole until the two genomes differ.
///
/// If fewer than two distinct genome values carry a positive weight no distinct
/// pair exists, and the pair is accepted as drawn.
///
/// # Examples
///
/// ```
/// use bitgenalg::genome::{Genome, ScoredGenome};
/// use bitgenalg::rng::RandomNumberGenerator;
/// use bitgenalg::selection::RouletteWheel;
///
/// let ranked = vec![
///     ScoredGenome::new(Genome::from_u64(4, 0b0001).unwrap(), 1.0),
///     ScoredGenome::new(Genome::from_u64(4, 0b0111).unwrap(), 3.0),
/// ];
/// let wheel = RouletteWheel::new(&ranked).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let (a, b) = wheel.select_pair(&mut rng, 100).unwrap();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel<'a> {
    ranked: &'a [ScoredGenome],
    weights: FitnessWeights,
    diverse: bool,
}

impl<'a> RouletteWheel<'a> {
    /// Builds the wheel for a ranked generation.
    ///
    /// # Errors
    ///
    /// Returns an error if `ranked` is empty or if any score is negative or non-finite.
    pub fn new(ranked: &'a [ScoredGenome]) -> Result<Self> {
        if ranked.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        let weights = FitnessWeights::from_scores(&scores)?;

        let mut candidates = ranked
            .iter()
            .zip(weights.weights())
            .filter(|(_, w)| **w > 0.0)
            .map(|(s, _)| &s.genome);
        let diverse = match candidates.next() {
            Some(first) => candidates.any(|g| g != first),
            None => false,
        };

        Ok(Self {
            ranked,
            weights,
            diverse,
        })
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Whether a pair of distinct parents can be drawn at all.
    pub fn is_diverse(&self) -> bool {
        self.diverse
    }

    /// Draws a single genome.
    pub fn spin(&self, rng: &mut RandomNumberGenerator) -> &'a Genome {
        &self.ranked[self.weights.sample(rng)].genome
    }

    /// Draws a mating pair of bit-distinct genomes.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::MaxAttemptsReached`] if the pair is still identical
    /// after `max_redraws` redraws.
    pub fn select_pair(
        &self,
        rng: &mut RandomNumberGenerator,
        max_redraws: usize,
    ) -> Result<(&'a Genome, &'a Genome)> {
        let mut a = self.spin(rng);
        let mut b = self.spin(rng);

        if !self.diverse {
            trace!("Population has collapsed to one value, accepting identical parents");
            return Ok((a, b));
        }

        let mut redraws = 0;
        while a == b {
            if redraws >= max_redraws {
                return Err(GeneticError::MaxAttemptsReached(format!(
                    "No distinct parent pair after {} redraws",
                    max_redraws
                )));
            }
            redraws += 1;
            a = self.spin(rng);
            b = self.spin(rng);
        }

        Ok((a, b))
    }
}
