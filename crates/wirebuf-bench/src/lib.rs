//! Shared fixtures for the wirebuf benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use wirebuf::{Endianness, Stream};

/// Capacity used by the benchmark streams: room for many interleaved
/// value groups without reallocating mid-run.
pub const BENCH_CAPACITY: usize = 64 * 1024;

/// A little-endian stream sized for the benchmark workloads.
pub fn bench_stream() -> Stream {
    Stream::new(BENCH_CAPACITY, Endianness::Little)
}

/// A deterministic payload of `len` bytes.
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
