//! # bitgenalg
//!
//! A genetic algorithm over fixed-width bitstrings. Each individual is a
//! [`Genome`] of `gene_length` bits; a caller-supplied challenge scores it, and every
//! generation the best individual is carried over while the rest of the population
//! is bred by roulette selection, crossover and mutation.
//!
//! ```rust
//! use bitgenalg::evolution::{run, CallbackHooks, EvolutionOptions};
//! use bitgenalg::genome::Genome;
//! use bitgenalg::rng::RandomNumberGenerator;
//!
//! let options = EvolutionOptions::builder()
//!     .gene_length(24)
//!     .individual_num(30)
//!     .mutate_prob(0.08)
//!     .generations(2000)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut hooks = CallbackHooks::new()
//!     .with_print(|_, _| Ok(()))
//!     .with_break(|elite| Ok(elite.score >= 24.0));
//!
//! let result = run(
//!     &options,
//!     |genome: &Genome| genome.count_ones() as f64,
//!     &mut hooks,
//!     &mut rng,
//! )
//! .unwrap();
//! assert!(result.history.windows(2).all(|w| w[0] <= w[1]));
//! ```

pub mod breeding;
pub mod caching;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{run, Challenge, EvolutionOptions, EvolutionResult};
pub use genome::{Genome, ScoredGenome};
pub use rng::RandomNumberGenerator;
