//! Differential fuzzing of every strategy combination.
//!
//! The bytewise `const fn` references are the oracle. The first byte of the
//! input picks a split point so that reseeding is exercised as well.

#![no_main]

use fnvhash::{
  Endian, FastHash, Fnv32, Fnv64, Fnv128, FnvWord, U128,
  accumulate::accumulate128,
  endian::hash_stored_with,
  mul::{Direct, ShiftAdd, Sparse, Widening},
  order::{Fnv1, Fnv1a},
  reference,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (split, data) = match input.split_first() {
    Some((&s, rest)) => (usize::from(s).min(rest.len()), rest),
    None => (0, input),
  };

  check_32(data, split);
  check_64(data, split);
  check_128(data, split);
  check_stored(data);
});

fn check_32(data: &[u8], split: usize) {
  let basis = u32::OFFSET_BASIS;
  let fnv1a = reference::fnv1a_32(basis, data);
  let fnv1 = reference::fnv1_32(basis, data);

  assert_eq!(<Fnv32<Fnv1a, Direct>>::hash(data), fnv1a, "fnv1a-32/direct len={}", data.len());
  assert_eq!(<Fnv32<Fnv1a, ShiftAdd>>::hash(data), fnv1a, "fnv1a-32/shift-add len={}", data.len());
  assert_eq!(<Fnv32<Fnv1, Direct>>::hash(data), fnv1, "fnv1-32/direct len={}", data.len());
  assert_eq!(<Fnv32<Fnv1, ShiftAdd>>::hash(data), fnv1, "fnv1-32/shift-add len={}", data.len());

  let (head, tail) = data.split_at(split);
  let resumed = <Fnv32<Fnv1a, ShiftAdd>>::hash_with_seed(<Fnv32<Fnv1a, ShiftAdd>>::hash(head), tail);
  assert_eq!(resumed, fnv1a, "fnv1a-32 split={split}");
}

fn check_64(data: &[u8], split: usize) {
  let basis = u64::OFFSET_BASIS;
  let fnv1a = reference::fnv1a_64(basis, data);
  let fnv1 = reference::fnv1_64(basis, data);

  assert_eq!(<Fnv64<Fnv1a, Direct>>::hash(data), fnv1a, "fnv1a-64/direct len={}", data.len());
  assert_eq!(<Fnv64<Fnv1a, ShiftAdd>>::hash(data), fnv1a, "fnv1a-64/shift-add len={}", data.len());
  assert_eq!(<Fnv64<Fnv1, Direct>>::hash(data), fnv1, "fnv1-64/direct len={}", data.len());
  assert_eq!(<Fnv64<Fnv1, ShiftAdd>>::hash(data), fnv1, "fnv1-64/shift-add len={}", data.len());

  let (head, tail) = data.split_at(split);
  let resumed = <Fnv64<Fnv1, Direct>>::hash_with_seed(<Fnv64<Fnv1, Direct>>::hash(head), tail);
  assert_eq!(resumed, fnv1, "fnv1-64 split={split}");
}

fn check_128(data: &[u8], split: usize) {
  let basis = u128::OFFSET_BASIS;
  let fnv1a = U128::from(reference::fnv1a_128(basis, data));
  let fnv1 = U128::from(reference::fnv1_128(basis, data));

  assert_eq!(<Fnv128<Fnv1a, Direct, u128>>::hash(data), fnv1a, "fnv1a-128/native-direct");
  assert_eq!(<Fnv128<Fnv1a, ShiftAdd, u128>>::hash(data), fnv1a, "fnv1a-128/native-shift-add");
  assert_eq!(<Fnv128<Fnv1a, Sparse, U128>>::hash(data), fnv1a, "fnv1a-128/sparse");
  assert_eq!(<Fnv128<Fnv1a, Widening, U128>>::hash(data), fnv1a, "fnv1a-128/widening");
  assert_eq!(<Fnv128<Fnv1a, ShiftAdd, U128>>::hash(data), fnv1a, "fnv1a-128/limb-shift-add");

  assert_eq!(<Fnv128<Fnv1, Direct, u128>>::hash(data), fnv1, "fnv1-128/native-direct");
  assert_eq!(<Fnv128<Fnv1, Sparse, U128>>::hash(data), fnv1, "fnv1-128/sparse");
  assert_eq!(<Fnv128<Fnv1, Widening, U128>>::hash(data), fnv1, "fnv1-128/widening");

  let (head, tail) = data.split_at(split);
  let resumed = <Fnv128<Fnv1, Sparse, U128>>::hash_with_seed(<Fnv128<Fnv1, Sparse, U128>>::hash(head), tail);
  assert_eq!(resumed, fnv1, "fnv1-128 split={split}");
}

fn check_stored(data: &[u8]) {
  let canonical = U128::OFFSET_BASIS.to_le_bytes();

  let mut little = U128::from_le_bytes(canonical);
  hash_stored_with(Endian::Little, data, &mut little, accumulate128::<U128, Fnv1a, Sparse>);
  let mut big = U128::from_be_bytes(canonical);
  hash_stored_with(Endian::Big, data, &mut big, accumulate128::<U128, Fnv1a, Sparse>);

  assert_eq!(little.to_le_bytes(), big.to_be_bytes(), "stored seed diverged, len={}", data.len());
}
