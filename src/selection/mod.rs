//! Fitness-proportionate parent selection.
//!
//! [`FitnessWeights`] turns one generation's ranked scores into a sampling
//! distribution and [`RouletteWheel`] draws mating pairs from it.
pub mod roulette;
pub mod weights;

pub use roulette::RouletteWheel;
pub use weights::FitnessWeights;
