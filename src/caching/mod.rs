//! # Caching Module
//!
//! Fitness caches keyed by the genome itself. The engine scores every individual
//! once per generation, and with an elite carried over and a converging population
//! the same bit pattern is often scored again and again; wrapping an expensive
//! challenge in a cache turns those repeats into lookups.
//!
//! Only successful scores are cached. A failing evaluation is returned to the caller
//! and retried the next time the genome is seen.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thread_local::ThreadLocal;

use crate::error::Result;
use crate::evolution::Challenge;
use crate::genome::Genome;

/// A challenge wrapper with one cache shared by all threads.
#[derive(Debug, Clone)]
pub struct CachedChallenge<C>
where
    C: Challenge,
{
    challenge: C,
    cache: Arc<Mutex<HashMap<Genome, f64>>>,
}

impl<C> CachedChallenge<C>
where
    C: Challenge,
{
    pub fn new(challenge: C) -> Self {
        Self::with_cache(challenge, HashMap::new())
    }

    /// Creates a cached challenge with a pre-populated cache.
    pub fn with_cache(challenge: C, cache: HashMap<Genome, f64>) -> Self {
        Self {
            challenge,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a reference to the wrapped challenge.
    pub fn inner(&self) -> &C {
        &self.challenge
    }

    /// Returns the number of cached fitness evaluations.
    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    /// Returns a copy of the cache.
    pub fn get_cache(&self) -> HashMap<Genome, f64> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Genome, f64>> {
        // The map is only ever touched by plain inserts, so a poisoned lock still
        // holds consistent data.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> Challenge for CachedChallenge<C>
where
    C: Challenge,
{
    fn score(&self, genome: &Genome) -> f64 {
        if let Some(score) = self.lock().get(genome) {
            return *score;
        }

        let score = self.challenge.score(genome);
        self.lock().insert(genome.clone(), score);
        score
    }

    fn try_score(&self, genome: &Genome) -> Result<f64> {
        if let Some(score) = self.lock().get(genome) {
            return Ok(*score);
        }

        // The lock is released while the wrapped challenge runs.
        let score = self.challenge.try_score(genome)?;
        self.lock().insert(genome.clone(), score);
        Ok(score)
    }
}

/// A per-thread fitness cache.
///
/// Each thread of the evaluation pool fills its own map, so lookups never contend.
#[derive(Debug, Default)]
pub struct ThreadLocalCache {
    cache: ThreadLocal<RefCell<HashMap<Genome, f64>>>,
}

impl ThreadLocalCache {
    pub fn new() -> Self {
        Self {
            cache: ThreadLocal::new(),
        }
    }

    /// Gets a cached fitness value for the current thread, if any.
    pub fn get(&self, genome: &Genome) -> Option<f64> {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .and_then(|cache| cache.get(genome).copied())
    }

    pub fn insert(&self, genome: Genome, score: f64) {
        if let Ok(mut cache) = self.cache.get_or_default().try_borrow_mut() {
            cache.insert(genome, score);
        }
    }

    /// Clears the cache of the current thread.
    pub fn clear(&self) {
        if let Some(cell) = self.cache.get() {
            if let Ok(mut cache) = cell.try_borrow_mut() {
                cache.clear();
            }
        }
    }

    /// Returns the number of entries cached by the current thread.
    pub fn len(&self) -> usize {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A challenge wrapper with one cache per thread.
#[derive(Debug, Clone)]
pub struct ThreadLocalCachedChallenge<C>
where
    C: Challenge,
{
    challenge: C,
    cache: Arc<ThreadLocalCache>,
}

impl<C> ThreadLocalCachedChallenge<C>
where
    C: Challenge,
{
    pub fn new(challenge: C) -> Self {
        Self {
            challenge,
            cache: Arc::new(ThreadLocalCache::new()),
        }
    }

    pub fn inner(&self) -> &C {
        &self.challenge
    }

    /// Clears the cache of the current thread.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Returns the number of entries cached by the current thread.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<C> Challenge for ThreadLocalCachedChallenge<C>
where
    C: Challenge,
{
    fn score(&self, genome: &Genome) -> f64 {
        if let Some(score) = self.cache.get(genome) {
            return score;
        }

        let score = self.challenge.score(genome);
        self.cache.insert(genome.clone(), score);
        score
    }

    fn try_score(&self, genome: &Genome) -> Result<f64> {
        if let Some(score) = self.cache.get(genome) {
            return Ok(score);
        }

        let score = self.challenge.try_score(genome)?;
        self.cache.insert(genome.clone(), score);
        Ok(score)
    }
}
