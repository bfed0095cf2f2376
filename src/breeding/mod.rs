//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn one
//! ranked generation into the complete next population.
pub mod crossover;
pub mod mutation;
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    genome::{Genome, ScoredGenome},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces the next population from the current generation's ranked individuals.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next population.
    ///
    /// ## Parameters
    ///
    /// - `ranked`: the generation's scored individuals sorted ascending by score,
    ///   so the elite is the last element.
    /// - `evol_options`: the run's options.
    /// - `rng`: the run's random number generator.
    ///
    /// ## Returns
    ///
    /// Exactly `evol_options.get_individual_num()` genomes of width
    /// `evol_options.get_gene_length()`.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - `ranked` is empty
    /// - selection weights cannot be formed from the scores
    /// - a distinct mating pair cannot be found within the redraw cap
    fn breed(
        &self,
        ranked: &[ScoredGenome],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}

pub use crossover::Crossover;
pub use mutation::Mutation;
pub use ordinary::OrdinaryStrategy;
