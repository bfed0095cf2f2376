use tracing::{debug, debug_span, info};

use super::{challenge::Challenge, hooks::EvolutionHooks, options::EvolutionOptions};
use crate::{
    breeding::BreedStrategy,
    error::{GeneticError, OptionExt, Result},
    genome::{Genome, ScoredGenome},
    population::{random_population, validate_population},
    rng::RandomNumberGenerator,
};
use rayon::prelude::*;

/// The outcome of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The elite of the last generation executed.
    pub elite: ScoredGenome,
    /// The population bred by the last generation, elite first.
    pub population: Vec<Genome>,
    /// The elite's score in every generation executed, in order.
    pub history: Vec<f64>,
}

impl EvolutionResult {
    /// Number of generations executed.
    pub fn generations_run(&self) -> usize {
        self.history.len()
    }
}

/// Runs the generation loop with a breeding strategy and a challenge.
///
/// Each generation goes through evaluate, elite capture, report, reproduce,
/// replace and the termination check. The run ends when the hooks ask to stop or
/// when the generation budget is spent.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    challenge: Chall,
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge + Sync,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a randomly initialised population.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The evaluator reports a failure or produces a non-finite or negative score
    /// - A hook reports a failure
    /// - Breeding fails, e.g. no distinct parents are found within the redraw cap
    pub fn evolve<H>(
        &self,
        options: &EvolutionOptions,
        hooks: &mut H,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult>
    where
        H: EvolutionHooks + ?Sized,
    {
        options.validate()?;
        let population = random_population(
            options.get_gene_length(),
            options.get_individual_num(),
            rng,
        )?;
        self.evolve_from(options, population, hooks, rng)
    }

    /// Evolves a caller-supplied initial population.
    ///
    /// The population must contain exactly `individual_num` genomes of width
    /// `gene_length`.
    pub fn evolve_from<H>(
        &self,
        options: &EvolutionOptions,
        initial_population: Vec<Genome>,
        hooks: &mut H,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult>
    where
        H: EvolutionHooks + ?Sized,
    {
        options.validate()?;
        validate_population(
            &initial_population,
            options.get_gene_length(),
            options.get_individual_num(),
        )?;

        info!(
            gene_length = options.get_gene_length(),
            individual_num = options.get_individual_num(),
            mutate_prob = options.get_mutate_prob(),
            generations = options.get_generations(),
            "Starting evolution"
        );

        let mut population = initial_population;
        let mut history = Vec::with_capacity(options.get_generations().min(4096));
        let mut last_elite = None;
        let mut stopped_early = false;

        for generation in 0..options.get_generations() {
            let _span = debug_span!("generation", generation).entered();

            let ranked = self.evaluate(&population, options)?;
            let elite = ranked
                .last()
                .cloned()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            debug!(score = elite.score, genome = %elite.genome, "Generation elite");

            history.push(elite.score);
            hooks.report(generation, &elite)?;

            population = self.strategy.breed(&ranked, options, rng)?;

            let stop = hooks.should_stop(&elite)?;
            last_elite = Some(elite);
            if stop {
                stopped_early = true;
                break;
            }
        }

        let elite = last_elite.ok_or_else_genetic(|| {
            GeneticError::Evolution("No generation was executed".to_string())
        })?;

        info!(
            generations_run = history.len(),
            best_score = elite.score,
            stopped_early,
            "Evolution finished"
        );

        hooks.finish(&history)?;

        Ok(EvolutionResult {
            elite,
            population,
            history,
        })
    }

    /// Scores every genome once and sorts the pairs ascending by score.
    ///
    /// The sort is stable, so among equal scores the later genome ranks higher.
    /// Large populations are scored on the rayon pool; the results keep population
    /// order before sorting, so the ranking does not depend on scheduling.
    pub fn evaluate(
        &self,
        population: &[Genome],
        options: &EvolutionOptions,
    ) -> Result<Vec<ScoredGenome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let parallel = population.len() >= options.get_parallel_threshold();
        let mut ranked = if parallel {
            debug!(individuals = population.len(), "Evaluating in parallel");
            population
                .par_iter()
                .map(|genome| self.score_genome(genome))
                .collect::<Result<Vec<_>>>()?
        } else {
            population
                .iter()
                .map(|genome| self.score_genome(genome))
                .collect::<Result<Vec<_>>>()?
        };

        ranked.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(ranked)
    }

    fn score_genome(&self, genome: &Genome) -> Result<ScoredGenome> {
        let score = self.challenge.try_score(genome)?;

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }

        Ok(ScoredGenome::new(genome.clone(), score))
    }
}
