//! Criterion micro-benchmarks for the stream codec and bulk copy.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wirebuf::Stream;
use wirebuf_bench::{bench_stream, payload};
use wirebuf_test_utils::NestedRecord;

/// One interleaved group of every fixed-width encoding plus a string
/// and a byte run — 60 bytes per group.
fn write_group(stream: &mut Stream, tags: &[u8]) {
    stream.write_bool(true).unwrap();
    stream.write_i16(10).unwrap();
    stream.write_i32(25).unwrap();
    stream.write_string("Sample string").unwrap();
    stream.write_f64(2598.0).unwrap();
    stream.write_f64(2598.342_537_52).unwrap();
    stream.write_f32(2598.435).unwrap();
    stream.write_bytes(tags).unwrap();
    stream.write_cstring("CString10").unwrap();
}

fn read_group(stream: &mut Stream) {
    black_box(stream.read_bool().unwrap());
    black_box(stream.read_i16().unwrap());
    black_box(stream.read_i32().unwrap());
    black_box(stream.read_string().unwrap());
    black_box(stream.read_f64().unwrap());
    black_box(stream.read_f64().unwrap());
    black_box(stream.read_f32().unwrap());
    black_box(stream.read_bytes().unwrap());
    black_box(stream.read_cstring().unwrap());
}

/// Benchmark: write 500 interleaved value groups.
fn bench_write_groups(c: &mut Criterion) {
    let tags = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut stream = bench_stream();

    c.bench_function("stream_write_groups", |b| {
        b.iter(|| {
            stream.seek(0).unwrap();
            for _ in 0..500 {
                write_group(&mut stream, &tags);
            }
            black_box(stream.position());
        });
    });
}

/// Benchmark: read the same 500 groups back.
fn bench_read_groups(c: &mut Criterion) {
    let tags = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut stream = bench_stream();
    for _ in 0..500 {
        write_group(&mut stream, &tags);
    }

    c.bench_function("stream_read_groups", |b| {
        b.iter(|| {
            stream.seek(0).unwrap();
            for _ in 0..500 {
                read_group(&mut stream);
            }
        });
    });
}

/// Benchmark: bulk byte-run write/read of a 4KiB payload.
fn bench_bulk_bytes(c: &mut Criterion) {
    let data = payload(4096);
    let mut stream = bench_stream();

    c.bench_function("stream_bulk_bytes_4k", |b| {
        b.iter(|| {
            stream.seek(0).unwrap();
            stream.write_bytes(&data).unwrap();
            stream.seek(0).unwrap();
            black_box(stream.read_bytes().unwrap());
        });
    });
}

/// Benchmark: varint encode/decode across the group-length spectrum.
fn bench_varint(c: &mut Criterion) {
    let values = [0i32, 127, 128, 16_383, 16_384, i32::MAX, -1];
    let mut stream = bench_stream();

    c.bench_function("stream_varint_cycle", |b| {
        b.iter(|| {
            stream.seek(0).unwrap();
            for &v in &values {
                stream.write_varint(v).unwrap();
            }
            stream.seek(0).unwrap();
            for _ in &values {
                black_box(stream.read_varint().unwrap());
            }
        });
    });
}

/// Benchmark: nested record through the capability seam.
fn bench_record_seam(c: &mut Criterion) {
    let record = NestedRecord::sample();
    let mut stream = bench_stream();

    c.bench_function("stream_nested_record", |b| {
        b.iter(|| {
            stream.seek(0).unwrap();
            stream.write_value(&record).unwrap();
            stream.seek(0).unwrap();
            black_box(stream.read_value::<NestedRecord>().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_write_groups,
    bench_read_groups,
    bench_bulk_bytes,
    bench_varint,
    bench_record_seam,
);
criterion_main!(benches);
