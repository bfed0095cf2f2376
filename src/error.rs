//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Configuration problems are reported before the first generation runs,
//! while failures raised by an evaluator or a hook are passed through
//! untouched so the caller sees exactly what its callback returned.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitgenalg::error::{GeneticError, Result};
//!
//! fn check_width(width: usize) -> Result<()> {
//!     if width == 0 {
//!         return Err(GeneticError::Configuration("gene_length must be at least 1".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(0).is_err());
//! ```
//!
//! Adding context to a foreign error inside a hook:
//!
//! ```rust
//! use bitgenalg::error::{Result, ResultExt};
//! use std::io::Write;
//!
//! fn write_line(out: &mut Vec<u8>, line: &str) -> Result<()> {
//!     writeln!(out, "{}", line).context("Failed to write progress line")
//! }
//! ```
//!
//! Converting an `Option` into a `Result`:
//!
//! ```rust
//! use bitgenalg::error::{GeneticError, OptionExt};
//!
//! fn best(scores: &[u32]) -> bitgenalg::error::Result<u32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The evolution loop reached an inconsistent state.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// An invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation received an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The evaluator produced a score the engine cannot use.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Selection weights could not be formed.
    #[error("Selection error: {0}")]
    Selection(String),

    /// A genome does not have the expected bit width.
    #[error("Width mismatch: expected a {expected}-bit genome, found {found} bits")]
    WidthMismatch { expected: usize, found: usize },

    /// A value does not fit in the requested genome width.
    #[error("Bounds error: {0}")]
    OutOfBounds(String),

    /// A retry loop gave up.
    #[error("Maximum attempts reached: {0}")]
    MaxAttemptsReached(String),

    /// A caller-supplied callback reported a failure.
    #[error("Callback error: {0}")]
    Callback(String),

    /// An I/O operation failed, typically inside a reporting hook.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use bitgenalg::error::ResultExt;
///
/// fn parse_generations(raw: &str) -> bitgenalg::error::Result<usize> {
///     raw.parse::<usize>().context("Invalid generation count")
/// }
///
/// assert!(parse_generations("abc").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| to_genetic_error(e, &context.to_string()))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn` for `None`.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Converts a standard error into a `GeneticError` with context.
///
/// ## Examples
///
/// ```rust
/// use bitgenalg::error::to_genetic_error;
/// use std::io;
///
/// fn example() -> bitgenalg::error::Result<()> {
///     let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "plot sink closed");
///     Err(to_genetic_error(io_error, "Failed to hand over score history"))
/// }
///
/// assert!(example().is_err());
/// ```
pub fn to_genetic_error<E: StdError>(error: E, context: &str) -> GeneticError {
    GeneticError::Other(format!("{}: {}", context, error))
}
