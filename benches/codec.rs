//! Benchmarks for the sprite animation codec.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use sprite_codec::codec::{
    DecodePolicy, FRAME_PIXELS, decode_baseline, decode_delta, encode_baseline, encode_delta,
};

/// Striped frame: run length controls how many opcodes the encoders emit.
fn striped_frame(run_len: usize) -> Vec<u8> {
    (0..FRAME_PIXELS).map(|i| ((i / run_len) % 14) as u8).collect()
}

fn bench_encode_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_baseline");

    for run_len in [4, 16, 64, 1024] {
        let frame = striped_frame(run_len);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("run{}", run_len)),
            &run_len,
            |b, _| {
                b.iter(|| encode_baseline(black_box(&frame)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_encode_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_delta");

    for changed in [16, 256, 2048] {
        let prev = striped_frame(64);
        let mut curr = prev.clone();
        curr[1000..1000 + changed].fill(13);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("changed{}", changed)),
            &changed,
            |b, _| {
                b.iter(|| encode_delta(black_box(&prev), black_box(&curr)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let frame = striped_frame(16);
    let baseline_stream = encode_baseline(&frame).unwrap();
    group.bench_function("baseline", |b| {
        b.iter(|| decode_baseline(black_box(&baseline_stream), DecodePolicy::Lenient).unwrap());
    });

    let mut curr = frame.clone();
    curr[2000..2100].fill(13);
    let delta_stream = encode_delta(&frame, &curr).unwrap();
    group.bench_function("delta", |b| {
        b.iter(|| {
            decode_delta(
                black_box(&frame),
                black_box(&delta_stream),
                DecodePolicy::Lenient,
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_baseline,
    bench_encode_delta,
    bench_decode
);
criterion_main!(benches);
