//! Vectorized evaluation benchmarks.
//!
//! Measures batch predicate throughput for:
//! - The integer type's specialized kernel
//! - The generic clone-and-compare kernel
//! - Chunk size effects on the evaluator

use coltype::types::{IntegerValue, INTEGER_WIDTH};
use coltype::vectorized::{encode_integers, PackedBatch};
use coltype::{CompareOp, EvaluatorConfig, VectorizedEvaluator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

/// Generate a column of random integers in `0..domain`
fn random_column(rows: usize, domain: u64) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let values: Vec<u64> = (0..rows).map(|_| rng.gen_range(0..domain)).collect();
    encode_integers(&values)
}

/// Benchmark specialized vs generic kernels
fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorized_equal");

    for rows in &[1024usize, 16_384, 262_144] {
        let column = random_column(*rows, 1000);
        let batch = PackedBatch::new(&column, INTEGER_WIDTH).expect("packed batch");
        let literal = IntegerValue::encode(13);
        let mut out = vec![false; *rows];

        group.throughput(Throughput::Elements(*rows as u64));

        let specialized = VectorizedEvaluator::default();
        group.bench_with_input(BenchmarkId::new("specialized", rows), rows, |b, _| {
            b.iter(|| {
                specialized
                    .equal(&IntegerValue::default(), &batch, &literal, &mut out)
                    .expect("evaluate");
                black_box(&out);
            });
        });

        let generic =
            VectorizedEvaluator::new(EvaluatorConfig::new().with_specialized_kernels(false));
        group.bench_with_input(BenchmarkId::new("generic", rows), rows, |b, _| {
            b.iter(|| {
                generic
                    .equal(&IntegerValue::default(), &batch, &literal, &mut out)
                    .expect("evaluate");
                black_box(&out);
            });
        });
    }

    group.finish();
}

/// Benchmark evaluator chunk sizes
fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorized_chunk_size");
    let rows = 65_536;
    let column = random_column(rows, 1000);
    let batch = PackedBatch::new(&column, INTEGER_WIDTH).expect("packed batch");
    let literal = IntegerValue::encode(500);

    group.throughput(Throughput::Elements(rows as u64));
    for chunk in &[0usize, 256, 2048, 16_384] {
        let evaluator = VectorizedEvaluator::new(EvaluatorConfig::new().with_batch_size(*chunk));
        group.bench_with_input(BenchmarkId::from_parameter(chunk), chunk, |b, _| {
            b.iter(|| {
                let out = evaluator
                    .evaluate_to_vec(&IntegerValue::default(), CompareOp::Lt, &batch, &literal)
                    .expect("evaluate");
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_chunk_sizes);
criterion_main!(benches);
