//! # Population
//!
//! Builds and checks the fixed-size collection of genomes that a run evolves.

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Draws `individual_num` independent genomes uniformly from `[0, 2^gene_length - 1]`.
///
/// Duplicates are allowed.
///
/// # Errors
///
/// Returns [`GeneticError::Configuration`] if either parameter is zero.
///
/// # Example
///
/// ```rust
/// use bitgenalg::population::random_population;
/// use bitgenalg::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let population = random_population(16, 10, &mut rng).unwrap();
/// assert_eq!(population.len(), 10);
/// assert!(population.iter().all(|g| g.width() == 16));
/// ```
pub fn random_population(
    gene_length: usize,
    individual_num: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Genome>> {
    if gene_length == 0 {
        return Err(GeneticError::Configuration(
            "gene_length must be at least 1".to_string(),
        ));
    }
    if individual_num == 0 {
        return Err(GeneticError::Configuration(
            "individual_num must be at least 1".to_string(),
        ));
    }

    (0..individual_num)
        .map(|_| Genome::random(gene_length, rng))
        .collect()
}

/// Checks that a caller-supplied population has the configured size and width.
pub fn validate_population(
    population: &[Genome],
    gene_length: usize,
    individual_num: usize,
) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    if population.len() != individual_num {
        return Err(GeneticError::Configuration(format!(
            "Initial population has {} genomes but individual_num is {}",
            population.len(),
            individual_num
        )));
    }
    population
        .iter()
        .try_for_each(|genome| genome.ensure_width(gene_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let population = random_population(70, 25, &mut rng).unwrap();
        assert_eq!(population.len(), 25);
        assert!(population.iter().all(|g| g.width() == 70));
    }

    #[test]
    fn test_random_population_rejects_zero_parameters() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        assert!(matches!(
            random_population(0, 4, &mut rng),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            random_population(8, 0, &mut rng),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_population() {
        let population = vec![Genome::zero(8).unwrap(), Genome::zero(8).unwrap()];
        assert!(validate_population(&population, 8, 2).is_ok());
        assert!(matches!(
            validate_population(&population, 8, 3),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            validate_population(&population, 4, 2),
            Err(GeneticError::WidthMismatch { .. })
        ));
        assert!(matches!(
            validate_population(&[], 4, 2),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
