use std::iter;

use criterion::Criterion;
use seedbloom::{bulk, BloomFilter};

fn key(rng: &fastrand::Rng) -> String {
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter<str>, rng: &fastrand::Rng, n: usize) {
    for _ in 0..n {
        bf.add(&key(rng));
    }
}

fn bench_bloom_filter_add(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(1);

    for (m, k) in [(10_000, 7), (100_000, 10)] {
        c.bench_function(&format!("add-m{}-k{}", m, k), |b| {
            let mut bf = BloomFilter::<str>::with_seed(m, k, 0).unwrap();

            b.iter(|| bf.add(&key(&rng)));
        });
    }
}

fn bench_bloom_filter_contains(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(2);

    for (m, k, n) in [(10_000, 7, 1000), (100_000, 10, 10_000)] {
        c.bench_function(&format!("contains-m{}-k{}", m, k), |b| {
            let mut bf = BloomFilter::<str>::with_seed(m, k, 0).unwrap();
            populate(&mut bf, &rng, n);

            b.iter(|| bf.contains(&key(&rng)));
        });
    }
}

fn bench_bulk_lines(c: &mut Criterion) {
    let rng = fastrand::Rng::with_seed(3);
    let lines: Vec<String> = (0..100)
        .map(|_| (0..10).map(|_| key(&rng)).collect::<Vec<_>>().join(","))
        .collect();

    c.bench_function("bulk-add-test-1000", |b| {
        b.iter(|| {
            let mut bf = BloomFilter::<str>::with_seed(32_000, 10, 0).unwrap();
            bulk::add_lines(&mut bf, &lines);
            bulk::test_lines(&bf, &lines)
        });
    });
}

criterion::criterion_group!(
    benches,
    bench_bloom_filter_add,
    bench_bloom_filter_contains,
    bench_bulk_lines
);
criterion::criterion_main!(benches);
