//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable of a run: genome width,
//! population size, mutation probability and the generation budget, plus the
//! redraw cap for parent selection and the population size at which fitness
//! evaluation moves onto the rayon thread pool.
//!
//! The values are threaded explicitly into every operation that needs them;
//! nothing is read from process-wide state.
//!
//! ## Example
//!
//! ```rust
//! use bitgenalg::evolution::options::EvolutionOptions;
//!
//! // Positional constructor
//! let options = EvolutionOptions::new(64, 5, 0.08, 20_000);
//! assert!(options.validate().is_ok());
//!
//! // Builder
//! let options = EvolutionOptions::builder()
//!     .gene_length(256)
//!     .individual_num(10)
//!     .mutate_prob(0.08)
//!     .generations(100_000)
//!     .build();
//! assert_eq!(options.get_gene_length(), 256);
//! ```
//!
//! ## Defaults
//!
//! | Field                | Default  |
//! |----------------------|----------|
//! | `gene_length`        | 64       |
//! | `individual_num`     | 5        |
//! | `mutate_prob`        | 0.08     |
//! | `generations`        | 20000    |
//! | `max_parent_redraws` | 10000    |
//! | `parallel_threshold` | 1000     |

use crate::error::{GeneticError, Result};

const DEFAULT_GENE_LENGTH: usize = 64;
const DEFAULT_INDIVIDUAL_NUM: usize = 5;
const DEFAULT_MUTATE_PROB: f64 = 0.08;
const DEFAULT_GENERATIONS: usize = 20_000;
const DEFAULT_MAX_PARENT_REDRAWS: usize = 10_000;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    gene_length: usize,
    individual_num: usize,
    mutate_prob: f64,
    generations: usize,
    /// Cap on redraws while looking for two distinct parents
    max_parent_redraws: usize,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        gene_length: usize,
        individual_num: usize,
        mutate_prob: f64,
        generations: usize,
    ) -> Self {
        Self {
            gene_length,
            individual_num,
            mutate_prob,
            generations,
            max_parent_redraws: DEFAULT_MAX_PARENT_REDRAWS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `gene_length`, `individual_num`,
    /// `generations` or `max_parent_redraws` is zero, or if `mutate_prob` is not
    /// a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.gene_length == 0 {
            return Err(GeneticError::Configuration(
                "gene_length must be at least 1".to_string(),
            ));
        }
        if self.individual_num == 0 {
            return Err(GeneticError::Configuration(
                "individual_num must be at least 1".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(GeneticError::Configuration(
                "generations must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutate_prob) {
            return Err(GeneticError::Configuration(format!(
                "mutate_prob must be within [0, 1], got {}",
                self.mutate_prob
            )));
        }
        if self.max_parent_redraws == 0 {
            return Err(GeneticError::Configuration(
                "max_parent_redraws must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_gene_length(&self) -> usize {
        self.gene_length
    }

    pub fn get_individual_num(&self) -> usize {
        self.individual_num
    }

    pub fn get_mutate_prob(&self) -> f64 {
        self.mutate_prob
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_max_parent_redraws(&self) -> usize {
        self.max_parent_redraws
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_gene_length(&mut self, gene_length: usize) {
        self.gene_length = gene_length;
    }

    pub fn set_individual_num(&mut self, individual_num: usize) {
        self.individual_num = individual_num;
    }

    pub fn set_mutate_prob(&mut self, mutate_prob: f64) {
        self.mutate_prob = mutate_prob;
    }

    pub fn set_generations(&mut self, generations: usize) {
        self.generations = generations;
    }

    pub fn set_max_parent_redraws(&mut self, max_parent_redraws: usize) {
        self.max_parent_redraws = max_parent_redraws;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            gene_length: DEFAULT_GENE_LENGTH,
            individual_num: DEFAULT_INDIVIDUAL_NUM,
            mutate_prob: DEFAULT_MUTATE_PROB,
            generations: DEFAULT_GENERATIONS,
            max_parent_redraws: DEFAULT_MAX_PARENT_REDRAWS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take their default values. The result is not validated here;
/// the launcher validates it before the first generation.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    gene_length: Option<usize>,
    individual_num: Option<usize>,
    mutate_prob: Option<f64>,
    generations: Option<usize>,
    max_parent_redraws: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn gene_length(mut self, value: usize) -> Self {
        self.gene_length = Some(value);
        self
    }

    pub fn individual_num(mut self, value: usize) -> Self {
        self.individual_num = Some(value);
        self
    }

    pub fn mutate_prob(mut self, value: f64) -> Self {
        self.mutate_prob = Some(value);
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    pub fn max_parent_redraws(mut self, value: usize) -> Self {
        self.max_parent_redraws = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            gene_length: self.gene_length.unwrap_or(DEFAULT_GENE_LENGTH),
            individual_num: self.individual_num.unwrap_or(DEFAULT_INDIVIDUAL_NUM),
            mutate_prob: self.mutate_prob.unwrap_or(DEFAULT_MUTATE_PROB),
            generations: self.generations.unwrap_or(DEFAULT_GENERATIONS),
            max_parent_redraws: self
                .max_parent_redraws
                .unwrap_or(DEFAULT_MAX_PARENT_REDRAWS),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn try_build(self) -> Result<EvolutionOptions> {
        let options = self.build();
        options.validate()?;
        Ok(options)
    }
}
