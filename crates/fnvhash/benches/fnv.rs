use core::hint::black_box;
use std::hash::Hasher as _;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnvhash::{
  FastHash as _, Fnv32, Fnv64, Fnv128, U128,
  mul::{Direct, ShiftAdd, Sparse, Widening},
  order::{Fnv1, Fnv1a},
};

mod common;

fn fnv32(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("fnv/32");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("fnv1a/direct", len), data, |b, d| {
      b.iter(|| black_box(<Fnv32<Fnv1a, Direct>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/shift-add", len), data, |b, d| {
      b.iter(|| black_box(<Fnv32<Fnv1a, ShiftAdd>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1/direct", len), data, |b, d| {
      b.iter(|| black_box(<Fnv32<Fnv1, Direct>>::hash(black_box(d))))
    });
  }

  group.finish();
}

fn fnv64(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("fnv/64");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("fnv1a/direct", len), data, |b, d| {
      b.iter(|| black_box(<Fnv64<Fnv1a, Direct>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/shift-add", len), data, |b, d| {
      b.iter(|| black_box(<Fnv64<Fnv1a, ShiftAdd>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/fnv", len), data, |b, d| {
      b.iter(|| {
        let mut h = fnv::FnvHasher::default();
        h.write(black_box(d));
        black_box(h.finish())
      })
    });
  }

  group.finish();
}

fn fnv128(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("fnv/128");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("fnv1a/native-direct", len), data, |b, d| {
      b.iter(|| black_box(<Fnv128<Fnv1a, Direct, u128>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/native-shift-add", len), data, |b, d| {
      b.iter(|| black_box(<Fnv128<Fnv1a, ShiftAdd, u128>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/limb-sparse", len), data, |b, d| {
      b.iter(|| black_box(<Fnv128<Fnv1a, Sparse, U128>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/limb-widening", len), data, |b, d| {
      b.iter(|| black_box(<Fnv128<Fnv1a, Widening, U128>>::hash(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("fnv1a/limb-shift-add", len), data, |b, d| {
      b.iter(|| black_box(<Fnv128<Fnv1a, ShiftAdd, U128>>::hash(black_box(d))))
    });
  }

  group.finish();
}

criterion_group!(benches, fnv32, fnv64, fnv128);
criterion_main!(benches);
