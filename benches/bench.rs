use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use toruslife::World;

fn run_soup(width: usize, height: usize, steps: u32) -> u64 {
    let mut world = World::new(width, height).unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    world.randomize(&mut rng, 2);
    for _ in 0..steps {
        world.step();
    }
    world.population()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random soups");

    group
        .bench_function("80x60", |b| b.iter(|| run_soup(80, 60, 64)))
        .bench_function("256x256", |b| b.iter(|| run_soup(256, 256, 16)))
        .bench_function("1024x1024", |b| b.iter(|| run_soup(1024, 1024, 4)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
