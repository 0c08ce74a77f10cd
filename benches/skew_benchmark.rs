use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oriscan::{find_minima, most_frequent_kmers, skew_curve, Genome};

/// Deterministic pseudo-random genome, long enough to exercise the hot loops.
fn synthetic_genome(len: usize) -> Genome {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    let raw: String = (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            bases[(state >> 33) as usize % 4] as char
        })
        .collect();
    Genome::from_fasta_text(&raw)
}

fn bench_skew_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("skew_curve");

    for len in [10_000, 100_000, 1_000_000] {
        let genome = synthetic_genome(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &genome, |b, genome| {
            b.iter(|| skew_curve(black_box(genome)));
        });
    }

    group.finish();
}

fn bench_find_minima(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_minima");

    for len in [10_000, 100_000, 1_000_000] {
        let curve = skew_curve(&synthetic_genome(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &curve, |b, curve| {
            b.iter(|| find_minima(black_box(curve)));
        });
    }

    group.finish();
}

fn bench_most_frequent_kmers(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_frequent_kmers");

    let genome = synthetic_genome(10_000);
    for k in [5, 9, 15] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| most_frequent_kmers(black_box(genome.as_str()), k));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_skew_curve,
    bench_find_minima,
    bench_most_frequent_kmers
);
criterion_main!(benches);
