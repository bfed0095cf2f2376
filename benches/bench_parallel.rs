use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitgenalg::{
    breeding::OrdinaryStrategy,
    caching::{CachedChallenge, ThreadLocalCachedChallenge},
    evolution::{Challenge, EvolutionLauncher, EvolutionOptions},
    genome::Genome,
    population::random_population,
    rng::RandomNumberGenerator,
};

/// A deliberately slow challenge: scores a genome by repeatedly mixing its limbs.
#[derive(Clone)]
struct SlowChallenge {
    rounds: u32,
}

impl Challenge for SlowChallenge {
    fn score(&self, genome: &Genome) -> f64 {
        let mut acc = 0u64;
        for round in 0..self.rounds {
            for limb in genome.limbs() {
                acc = acc
                    .rotate_left(5)
                    .wrapping_add(limb ^ u64::from(round))
                    .wrapping_mul(0x9e37_79b9_7f4a_7c15);
            }
        }
        (acc.count_ones() + genome.count_ones() as u32) as f64
    }
}

fn bench_fitness_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_evaluation");
    let launcher = EvolutionLauncher::new(OrdinaryStrategy::new(), SlowChallenge { rounds: 200 });
    let mut rng = RandomNumberGenerator::from_seed(3);

    for size in [10, 100, 1000, 10000].iter() {
        let population = random_population(128, *size, &mut rng).unwrap();

        let mut sequential = EvolutionOptions::new(128, *size, 0.08, 1);
        sequential.set_parallel_threshold(usize::MAX);
        let mut parallel = sequential.clone();
        parallel.set_parallel_threshold(1);

        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &population,
            |b, population| {
                b.iter(|| launcher.evaluate(black_box(population), &sequential).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", size),
            &population,
            |b, population| b.iter(|| launcher.evaluate(black_box(population), &parallel).unwrap()),
        );
    }

    group.finish();
}

fn bench_cached_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_evaluation");
    let challenge = SlowChallenge { rounds: 200 };
    let mut rng = RandomNumberGenerator::from_seed(4);

    // A converged population: many copies of a few genomes.
    let distinct = random_population(128, 16, &mut rng).unwrap();
    let population: Vec<Genome> = distinct.iter().cycle().take(2000).cloned().collect();
    let mut options = EvolutionOptions::new(128, 2000, 0.08, 1);
    options.set_parallel_threshold(1);

    let global = EvolutionLauncher::new(
        OrdinaryStrategy::new(),
        CachedChallenge::new(challenge.clone()),
    );
    let thread_local = EvolutionLauncher::new(
        OrdinaryStrategy::new(),
        ThreadLocalCachedChallenge::new(challenge.clone()),
    );
    let uncached = EvolutionLauncher::new(OrdinaryStrategy::new(), challenge);

    group.bench_function("uncached", |b| {
        b.iter(|| uncached.evaluate(black_box(&population), &options).unwrap())
    });
    group.bench_function("global_cache", |b| {
        b.iter(|| global.evaluate(black_box(&population), &options).unwrap())
    });
    group.bench_function("thread_local_cache", |b| {
        b.iter(|| thread_local.evaluate(black_box(&population), &options).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_fitness_evaluation, bench_cached_evaluation);
criterion_main!(benches);
