// Benchmarks for SeqList positional edits
//
// Covers head, middle, tail and random positions for insert and delete,
// for both the Vec and the inline SmallVec backing.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use smallvec::SmallVec;

use seqlist::{Buffer, SeqList};

const SIZES: [usize; 3] = [16, 1_000, 10_000];

// =============================================================================
// Benchmark Helpers
// =============================================================================

#[derive(Clone, Copy)]
enum Position {
    Head,
    Middle,
    Tail,
}

impl Position {
    fn name(self) -> &'static str {
        match self {
            Position::Head => "head",
            Position::Middle => "middle",
            Position::Tail => "tail",
        }
    }

    fn index(self, len: usize) -> usize {
        match self {
            Position::Head => 0,
            Position::Middle => len / 2,
            Position::Tail => len,
        }
    }
}

/// Build a list of `n` elements, inserting each at `pos`
fn fill<B: Buffer<u64>>(n: usize, pos: Position) -> SeqList<u64, B> {
    let mut list = SeqList::new();
    for i in 0..n {
        let index = pos.index(list.len());
        list.insert(index, i as u64).unwrap();
    }
    list
}

/// Delete from `pos` until the list is empty
fn drain<B: Buffer<u64>>(list: &mut SeqList<u64, B>, pos: Position) -> u64 {
    let mut sum = 0;
    while !list.is_empty() {
        let index = pos.index(list.len() - 1);
        sum += list.delete(index).unwrap();
    }
    sum
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in SIZES.iter() {
        group.throughput(Throughput::Elements(n as u64));
        for pos in [Position::Head, Position::Middle, Position::Tail] {
            group.bench_with_input(BenchmarkId::new(pos.name(), n), &n, |b, &n| {
                b.iter(|| black_box(fill::<Vec<u64>>(n, pos)));
            });
        }
        group.bench_with_input(BenchmarkId::new("head_inline", n), &n, |b, &n| {
            b.iter(|| black_box(fill::<SmallVec<[u64; 16]>>(n, Position::Head)));
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for &n in SIZES.iter() {
        group.throughput(Throughput::Elements(n as u64));
        for pos in [Position::Head, Position::Middle, Position::Tail] {
            let base = fill::<Vec<u64>>(n, Position::Tail);
            group.bench_with_input(BenchmarkId::new(pos.name(), n), &n, |b, _| {
                b.iter_batched(
                    || base.clone(),
                    |mut list| black_box(drain(&mut list, pos)),
                    criterion::BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_random_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_edits");
    for &n in SIZES.iter() {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut list: SeqList<u64> = SeqList::new();
                for i in 0..n {
                    let len = list.len();
                    if len > 0 && rng.gen_bool(0.3) {
                        list.delete(rng.gen_range(0..len)).unwrap();
                    } else {
                        list.insert(rng.gen_range(0..=len), i as u64).unwrap();
                    }
                }
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for &n in SIZES.iter() {
        let list = fill::<Vec<u64>>(n, Position::Tail);
        group.bench_with_input(BenchmarkId::new("absent", n), &n, |b, _| {
            b.iter(|| black_box(list.locate(&u64::MAX)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_delete, bench_random_edits, bench_locate);
criterion_main!(benches);
