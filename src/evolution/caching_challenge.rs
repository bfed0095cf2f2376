use crate::{
    caching::{CachedChallenge, ThreadLocalCachedChallenge},
    evolution::Challenge,
};

/// Trait for wrapping a challenge with caching functionality.
pub trait CachingChallenge: Challenge + Sized + Clone {
    /// Wraps this challenge in a [`CachedChallenge`], whose mutex-protected cache
    /// is shared across all threads.
    ///
    /// # Example
    ///
    /// ```
    /// # use bitgenalg::{
    /// #     evolution::{Challenge, caching_challenge::CachingChallenge},
    /// #     genome::Genome,
    /// # };
    /// #
    /// #[derive(Clone)]
    /// struct Popcount;
    ///
    /// impl Challenge for Popcount {
    ///     fn score(&self, genome: &Genome) -> f64 {
    ///         genome.count_ones() as f64
    ///     }
    /// }
    ///
    /// let cached_challenge = Popcount.with_global_cache();
    /// assert_eq!(cached_challenge.score(&"0110".parse().unwrap()), 2.0);
    /// assert_eq!(cached_challenge.cache_size(), 1);
    /// ```
    fn with_global_cache(&self) -> CachedChallenge<Self>;

    /// Wraps this challenge in a [`ThreadLocalCachedChallenge`], which keeps a
    /// separate cache for each thread to avoid mutex contention.
    fn with_thread_local_cache(&self) -> ThreadLocalCachedChallenge<Self>;
}

impl<C> CachingChallenge for C
where
    C: Challenge + Clone,
{
    fn with_global_cache(&self) -> CachedChallenge<Self> {
        CachedChallenge::new(self.clone())
    }

    fn with_thread_local_cache(&self) -> ThreadLocalCachedChallenge<Self> {
        ThreadLocalCachedChallenge::new(self.clone())
    }
}
