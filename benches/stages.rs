use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use transducer::{Operator, Stages, from_iter, ops};

const DEPTH: usize = 16;

fn stages(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Box<[u64]> = std::iter::repeat_with(|| rng.random_range(0..1_000))
        .take(200_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("stages");

    group.bench_function("then_chain", |bencher| {
        bencher.iter(|| black_box(then_chain(&nums)));
    });

    group.bench_function("stages", |bencher| {
        bencher.iter(|| black_box(runtime_stages(&nums)));
    });

    group.bench_function("boxed_stages", |bencher| {
        bencher.iter(|| black_box(boxed_stages(&nums)));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(100);
    targets = stages
}
criterion_main!(benches);

fn then_chain(nums: &[u64]) -> transducer::Result<Vec<u64>> {
    let inc = || ops::map(|x: u64| x + 1);
    let four = || inc().then(inc()).then(inc()).then(inc());

    from_iter(nums.iter().copied()).run(four().then(four()).then(four()).then(four()))
}

fn runtime_stages(nums: &[u64]) -> transducer::Result<Vec<u64>> {
    let incs = Stages::new((0..DEPTH).map(|_| ops::map(|x: u64| x + 1)));
    from_iter(nums.iter().copied()).run(incs)
}

fn boxed_stages(nums: &[u64]) -> transducer::Result<Vec<u64>> {
    let incs = Stages::new((0..DEPTH).map(|_| ops::map(|x: u64| x + 1).boxed()));
    from_iter(nums.iter().copied()).run(incs)
}
