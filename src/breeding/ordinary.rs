//! # OrdinaryStrategy
//!
//! The `OrdinaryStrategy` struct is the standard breeding step: the elite of the
//! ranked generation is carried over unchanged into the first slot, and every
//! other slot is filled by one mating event (roulette selection of two distinct
//! parents, crossover keeping the first offspring, then mutation).
use std::fmt::Debug;

use super::{crossover, mutation, BreedStrategy};
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    genome::{Genome, ScoredGenome},
    rng::RandomNumberGenerator,
    selection::RouletteWheel,
};

/// # OrdinaryStrategy
///
/// Single-elite, fitness-proportionate breeding.
#[derive(Debug, Clone, Default)]
pub struct OrdinaryStrategy {
    // No fields needed
}

impl OrdinaryStrategy {
    /// Creates a new `OrdinaryStrategy` instance.
    pub fn new() -> Self {
        Self {}
    }

    /// Performs one mating event and returns the single retained offspring.
    pub fn mate(
        &self,
        wheel: &RouletteWheel<'_>,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome> {
        let (a, b) = wheel.select_pair(rng, evol_options.get_max_parent_redraws())?;
        let (child, _discarded) = crossover::crossover(a, b, rng)?;
        let outcome = mutation::mutate(child, evol_options.get_mutate_prob(), rng)?;
        Ok(outcome.offspring)
    }
}

impl BreedStrategy for OrdinaryStrategy {
    /// Breeds the next population from a generation ranked ascending by score.
    ///
    /// ## Returns
    ///
    /// The elite's genome followed by `individual_num - 1` offspring.
    ///
    /// ## Errors
    ///
    /// This method will return an error if `ranked` is empty, if the scores cannot
    /// be turned into selection weights, or if no distinct mating pair is found
    /// within `max_parent_redraws`.
    fn breed(
        &self,
        ranked: &[ScoredGenome],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        let elite = ranked.last().ok_or(GeneticError::EmptyPopulation)?;
        let wheel = RouletteWheel::new(ranked)?;

        let mut children = Vec::with_capacity(evol_options.get_individual_num());
        children.push(elite.genome.clone());

        for _ in 1..evol_options.get_individual_num() {
            children.push(self.mate(&wheel, evol_options, rng)?);
        }

        Ok(children)
    }
}
