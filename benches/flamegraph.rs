///
/// Use the pprof-rs profiler to write a flamegraph per benchmark.
///
/// Needs to be called with `--profile-time=<seconds>`, the svgs end up in
/// `target/criterion/<name>/profile/flamegraph.svg`
///

use criterion::{criterion_group, criterion_main, Criterion};
use pprof::criterion::{PProfProfiler, Output};
mod common;

criterion_group!{
    name = benches;
    config = Criterion::default()
    .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    ;
    targets = common::curve::all
}
criterion_main!(benches);
