use crate::{
    breeding::BreedStrategy,
    error::{GeneticError, Result},
};

use super::{Challenge, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] from its parts.
///
/// ```rust
/// use bitgenalg::breeding::OrdinaryStrategy;
/// use bitgenalg::evolution::builder::EvolutionLauncherBuilder;
/// use bitgenalg::genome::Genome;
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_breed_strategy(OrdinaryStrategy::new())
///     .with_challenge(|genome: &Genome| genome.count_ones() as f64)
///     .build()
///     .unwrap();
/// ```
pub struct EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy,
    F: Challenge + Sync,
{
    breed_strategy: Option<B>,
    challenge: Option<F>,
}

impl<B, F> EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy,
    F: Challenge + Sync,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, F>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<B, F> Default for EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy,
    F: Challenge + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
