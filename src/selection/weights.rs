use tracing::warn;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Per-generation selection probabilities, one per ranked individual.
///
/// The weight of an individual is its score divided by the sum of all scores,
/// so scores must be finite and non-negative. When every score is zero the
/// weights fall back to a uniform distribution.
///
/// # Examples
///
/// ```
/// use bitgenalg::selection::FitnessWeights;
///
/// let weights = FitnessWeights::from_scores(&[1.0, 3.0]).unwrap();
/// assert_eq!(weights.weights(), &[0.25, 0.75]);
///
/// assert!(FitnessWeights::from_scores(&[1.0, -1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessWeights {
    weights: Vec<f64>,
    cumulative: Vec<f64>,
    uniform_fallback: bool,
}

impl FitnessWeights {
    /// Builds the weights for `scores`, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::Selection`] if `scores` is empty.
    /// - [`GeneticError::FitnessCalculation`] if a score is negative, NaN or infinite.
    pub fn from_scores(scores: &[f64]) -> Result<Self> {
        if scores.is_empty() {
            return Err(GeneticError::Selection(
                "Cannot build fitness weights from an empty score list".to_string(),
            ));
        }

        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                bad
            )));
        }

        if let Some(negative) = scores.iter().find(|&&s| s < 0.0) {
            return Err(GeneticError::FitnessCalculation(format!(
                "Fitness-proportionate selection requires non-negative scores, got {}",
                negative
            )));
        }

        let mut total: f64 = scores.iter().sum();
        let mut scaled = None;
        if total.is_infinite() {
            // The sum overflowed; proportions are unchanged by dividing through the maximum.
            let max = scores.iter().copied().fold(0.0, f64::max);
            let rescaled: Vec<f64> = scores.iter().map(|s| s / max).collect();
            total = rescaled.iter().sum();
            scaled = Some(rescaled);
        }
        let scores = scaled.as_deref().unwrap_or(scores);

        let (weights, uniform_fallback) = if total > 0.0 {
            (scores.iter().map(|s| s / total).collect::<Vec<_>>(), false)
        } else {
            warn!(
                individuals = scores.len(),
                "All fitness scores are zero, selecting parents uniformly"
            );
            (vec![1.0 / scores.len() as f64; scores.len()], true)
        };

        let cumulative = weights
            .iter()
            .scan(0.0, |acc, w| {
                *acc += w;
                Some(*acc)
            })
            .collect();

        Ok(Self {
            weights,
            cumulative,
            uniform_fallback,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Whether the scores summed to zero and uniform weights were used instead.
    pub fn is_uniform_fallback(&self) -> bool {
        self.uniform_fallback
    }

    /// Draws an index with probability equal to its weight.
    ///
    /// Individuals with zero weight are never drawn.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let r = rng.uniform() * total;

        self.cumulative
            .iter()
            .position(|&c| r < c)
            .unwrap_or(self.cumulative.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_proportional() {
        let weights = FitnessWeights::from_scores(&[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(weights.weights(), &[0.25, 0.25, 0.5]);
        assert!(!weights.is_uniform_fallback());
        assert_eq!(weights.len(), 3);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let weights = FitnessWeights::from_scores(&[0.5, 0.8, 0.3, 0.9, 0.1]).unwrap();
        let sum: f64 = weights.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scores() {
        assert!(matches!(
            FitnessWeights::from_scores(&[]),
            Err(GeneticError::Selection(_))
        ));
    }

    #[test]
    fn test_negative_score() {
        assert!(matches!(
            FitnessWeights::from_scores(&[0.5, -0.8, 0.3]),
            Err(GeneticError::FitnessCalculation(_))
        ));
    }

    #[test]
    fn test_non_finite_score() {
        assert!(FitnessWeights::from_scores(&[0.5, f64::NAN]).is_err());
        assert!(FitnessWeights::from_scores(&[f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_all_zero_scores_fall_back_to_uniform() {
        let weights = FitnessWeights::from_scores(&[0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(weights.is_uniform_fallback());
        assert_eq!(weights.weights(), &[0.25; 4]);
    }

    #[test]
    fn test_huge_scores_keep_their_proportions() {
        let weights = FitnessWeights::from_scores(&[1e308; 3]).unwrap();
        assert!(!weights.is_uniform_fallback());
        assert!(weights.weights().iter().all(|w| (w - 1.0 / 3.0).abs() < 1e-12));

        let weights = FitnessWeights::from_scores(&[0.0, 1e308, 1.5e308, 1.5e308]).unwrap();
        let expected = [0.0, 0.25, 0.375, 0.375];
        for (w, e) in weights.weights().iter().zip(expected) {
            assert!((w - e).abs() < 1e-12, "weights were {:?}", weights.weights());
        }
    }

    #[test]
    fn test_sample_skips_zero_weights() {
        let weights = FitnessWeights::from_scores(&[0.0, 2.0, 0.0, 1.0, 0.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..5000 {
            let idx = weights.sample(&mut rng);
            assert!(idx == 1 || idx == 3, "drew zero-weight index {}", idx);
        }
    }

    #[test]
    fn test_sample_frequencies() {
        let weights = FitnessWeights::from_scores(&[1.0, 3.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(7);
        let draws = 20_000;
        let hits = (0..draws).filter(|_| weights.sample(&mut rng) == 1).count();
        let freq = hits as f64 / draws as f64;
        assert!((freq - 0.75).abs() < 0.02, "frequency was {}", freq);
    }
}
