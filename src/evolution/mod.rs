pub mod builder;
pub mod caching_challenge;
pub mod challenge;
pub mod hooks;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use hooks::{CallbackHooks, DefaultHooks, EvolutionHooks, SilentHooks};
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::EvolutionOptions;

use crate::{breeding::OrdinaryStrategy, error::Result, rng::RandomNumberGenerator};

/// Runs the standard engine: single-elite roulette breeding on a random initial
/// population.
///
/// # Example
///
/// ```rust
/// use bitgenalg::evolution::{run, EvolutionOptions, SilentHooks};
/// use bitgenalg::genome::Genome;
/// use bitgenalg::rng::RandomNumberGenerator;
///
/// let options = EvolutionOptions::new(16, 20, 0.1, 50);
/// let mut rng = RandomNumberGenerator::from_seed(7);
///
/// let result = run(
///     &options,
///     |genome: &Genome| genome.count_ones() as f64,
///     &mut SilentHooks,
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(result.population.len(), 20);
/// assert_eq!(result.history.len(), 50);
/// ```
pub fn run<C, H>(
    options: &EvolutionOptions,
    challenge: C,
    hooks: &mut H,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult>
where
    C: Challenge + Sync,
    H: EvolutionHooks + ?Sized,
{
    EvolutionLauncher::new(OrdinaryStrategy::new(), challenge).evolve(options, hooks, rng)
}
