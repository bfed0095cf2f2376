use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitgenalg::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    evolution::{EvolutionLauncher, EvolutionOptions, SilentHooks},
    genome::Genome,
    population::random_population,
    rng::RandomNumberGenerator,
};

fn popcount(genome: &Genome) -> f64 {
    genome.count_ones() as f64
}

fn bench_ordinary(c: &mut Criterion) {
    let strategy = OrdinaryStrategy::default();
    let launcher = EvolutionLauncher::new(strategy.clone(), popcount);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("ordinary_breeding");
    for size in [10, 100, 1000, 10000].iter() {
        let mut options = EvolutionOptions::new(64, *size, 0.08, 1);
        options.set_parallel_threshold(usize::MAX);
        let population = random_population(64, *size, &mut rng).unwrap();
        let ranked = launcher.evaluate(&population, &options).unwrap();

        group.bench_function(&format!("ordinary_breeding_{}", size), |b| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&ranked),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_genome_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("genome_width");
    group.sample_size(20);
    for width in [8, 64, 256, 1024].iter() {
        let options = EvolutionOptions::new(*width, 64, 0.08, 50);
        group.bench_function(&format!("evolve_{}_bits", width), |b| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                bitgenalg::run(black_box(&options), popcount, &mut SilentHooks, &mut rng)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ordinary, bench_genome_width);
criterion_main!(benches);
