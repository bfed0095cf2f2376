//! # Evolution hooks
//!
//! The launcher talks to the outside world only through [`EvolutionHooks`]:
//!
//! - `report` is called once per generation with the generation index and its elite.
//!   The default prints a progress line to stdout.
//! - `should_stop` is asked once per generation, after the next population has been
//!   bred, whether the run should end early. The default never stops.
//! - `finish` receives the complete per-generation best-score history once the run
//!   ends, e.g. to plot it. The default does nothing.
//!
//! Every hook returns a `Result`; an `Err` aborts the run and is returned to the
//! caller unchanged.
//!
//! ## Example
//!
//! ```rust
//! use bitgenalg::evolution::hooks::CallbackHooks;
//!
//! let mut plotted = Vec::new();
//! {
//!     let _hooks = CallbackHooks::new()
//!         .with_print(|_generation, _elite| Ok(()))
//!         .with_break(|elite| Ok(elite.score >= 64.0))
//!         .with_plot(|history| {
//!             plotted.extend_from_slice(history);
//!             Ok(())
//!         });
//! }
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::error::{Result, ResultExt};
use crate::genome::ScoredGenome;

/// Formats the default progress line: the generation index left-aligned in 7
/// columns, the genome as zero-padded binary, then the score right-aligned in 5
/// columns over the genome width.
pub fn format_progress(generation: usize, elite: &ScoredGenome) -> String {
    format!(
        "{:<7}{:b}{:>5}/{}",
        generation,
        elite.genome,
        elite.score,
        elite.genome.width()
    )
}

/// Writes the default progress line to stdout.
///
/// # Errors
///
/// Fails if stdout cannot be written, e.g. when it is a closed pipe.
pub fn print_progress(generation: usize, elite: &ScoredGenome) -> Result<()> {
    writeln!(io::stdout().lock(), "{}", format_progress(generation, elite))
        .context("Failed to write progress line")
}

/// Callbacks invoked by the generation loop.
pub trait EvolutionHooks {
    fn report(&mut self, generation: usize, elite: &ScoredGenome) -> Result<()> {
        print_progress(generation, elite)
    }

    fn should_stop(&mut self, _elite: &ScoredGenome) -> Result<bool> {
        Ok(false)
    }

    fn finish(&mut self, _history: &[f64]) -> Result<()> {
        Ok(())
    }
}

/// Prints progress, never stops early, ignores the history.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl EvolutionHooks for DefaultHooks {}

/// Like [`DefaultHooks`] but without console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHooks;

impl EvolutionHooks for SilentHooks {
    fn report(&mut self, _generation: usize, _elite: &ScoredGenome) -> Result<()> {
        Ok(())
    }
}

type PrintFn<'a> = Box<dyn FnMut(usize, &ScoredGenome) -> Result<()> + 'a>;
type BreakFn<'a> = Box<dyn FnMut(&ScoredGenome) -> Result<bool> + 'a>;
type PlotFn<'a> = Box<dyn FnMut(&[f64]) -> Result<()> + 'a>;

/// Hooks assembled from optional closures. A missing closure falls back to the
/// default behaviour of [`EvolutionHooks`].
#[derive(Default)]
pub struct CallbackHooks<'a> {
    print_fn: Option<PrintFn<'a>>,
    break_fn: Option<BreakFn<'a>>,
    plot_fn: Option<PlotFn<'a>>,
}

impl<'a> CallbackHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the progress reporter.
    pub fn with_print<F>(mut self, print_fn: F) -> Self
    where
        F: FnMut(usize, &ScoredGenome) -> Result<()> + 'a,
    {
        self.print_fn = Some(Box::new(print_fn));
        self
    }

    /// Sets the early-termination predicate.
    pub fn with_break<F>(mut self, break_fn: F) -> Self
    where
        F: FnMut(&ScoredGenome) -> Result<bool> + 'a,
    {
        self.break_fn = Some(Box::new(break_fn));
        self
    }

    /// Sets the receiver of the final score history.
    pub fn with_plot<F>(mut self, plot_fn: F) -> Self
    where
        F: FnMut(&[f64]) -> Result<()> + 'a,
    {
        self.plot_fn = Some(Box::new(plot_fn));
        self
    }
}

impl fmt::Debug for CallbackHooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHooks")
            .field("print_fn", &self.print_fn.is_some())
            .field("break_fn", &self.break_fn.is_some())
            .field("plot_fn", &self.plot_fn.is_some())
            .finish()
    }
}

impl EvolutionHooks for CallbackHooks<'_> {
    fn report(&mut self, generation: usize, elite: &ScoredGenome) -> Result<()> {
        match self.print_fn.as_mut() {
            Some(print_fn) => print_fn(generation, elite),
            None => print_progress(generation, elite),
        }
    }

    fn should_stop(&mut self, elite: &ScoredGenome) -> Result<bool> {
        match self.break_fn.as_mut() {
            Some(break_fn) => break_fn(elite),
            None => Ok(false),
        }
    }

    fn finish(&mut self, history: &[f64]) -> Result<()> {
        match self.plot_fn.as_mut() {
            Some(plot_fn) => plot_fn(history),
            None => Ok(()),
        }
    }
}
