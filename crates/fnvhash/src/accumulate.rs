//! Width-specialized FNV accumulators.
//!
//! Each accumulator folds every byte of `data` into `seed`, left to right,
//! exactly once, and leaves the digest in `seed`. Loops are unrolled by hand:
//! two bytes per iteration for 32/64-bit states, eight for 128-bit states with
//! 4/2/1-byte tails. Unrolling never changes the digest, only the number of
//! loop-carried branches.
//!
//! After the tails the input cursor must be empty. If it is not, the unrolling
//! itself is broken and the call panics instead of returning a digest of a
//! prefix; release builds are configured to abort on panic.

use crate::{mul::PrimeMul, order::Order, word::FnvWord};

/// Fold `data` into `seed`, one byte at a time, with no unrolling.
///
/// Any unroll shape must agree with this loop.
#[inline]
pub fn accumulate<W: FnvWord, O: Order, M: PrimeMul<W>>(data: &[u8], seed: &mut W) {
  let mut s = *seed;
  for &b in data {
    s = O::step::<W, M>(s, b);
  }
  *seed = s;
}

/// 32-bit accumulator: two bytes per iteration, one-byte tail.
#[inline]
pub fn accumulate32<O: Order, M: PrimeMul<u32>>(data: &[u8], seed: &mut u32) {
  accumulate_by_pairs::<u32, O, M>(data, seed);
}

/// 64-bit accumulator: two bytes per iteration, one-byte tail.
#[inline]
pub fn accumulate64<O: Order, M: PrimeMul<u64>>(data: &[u8], seed: &mut u64) {
  accumulate_by_pairs::<u64, O, M>(data, seed);
}

/// 128-bit accumulator: eight bytes per iteration, then 4-, 2-, and 1-byte tails.
///
/// `W` is either native `u128` or the limb type [`U128`](crate::U128).
#[inline]
pub fn accumulate128<W: FnvWord, O: Order, M: PrimeMul<W>>(data: &[u8], seed: &mut W) {
  debug_assert_eq!(W::BITS, 128);

  let mut s = *seed;

  let (blocks, mut rest) = data.as_chunks::<8>();
  for &[b0, b1, b2, b3, b4, b5, b6, b7] in blocks {
    s = O::step::<W, M>(s, b0);
    s = O::step::<W, M>(s, b1);
    s = O::step::<W, M>(s, b2);
    s = O::step::<W, M>(s, b3);
    s = O::step::<W, M>(s, b4);
    s = O::step::<W, M>(s, b5);
    s = O::step::<W, M>(s, b6);
    s = O::step::<W, M>(s, b7);
  }

  if let Some((&[b0, b1, b2, b3], tail)) = rest.split_first_chunk::<4>() {
    s = O::step::<W, M>(s, b0);
    s = O::step::<W, M>(s, b1);
    s = O::step::<W, M>(s, b2);
    s = O::step::<W, M>(s, b3);
    rest = tail;
  }

  if let Some((&[b0, b1], tail)) = rest.split_first_chunk::<2>() {
    s = O::step::<W, M>(s, b0);
    s = O::step::<W, M>(s, b1);
    rest = tail;
  }

  if let Some((&b0, tail)) = rest.split_first() {
    s = O::step::<W, M>(s, b0);
    rest = tail;
  }

  check_cursor(W::BITS, rest);
  *seed = s;
}

#[inline(always)]
fn accumulate_by_pairs<W: FnvWord, O: Order, M: PrimeMul<W>>(data: &[u8], seed: &mut W) {
  let mut s = *seed;

  let (pairs, mut rest) = data.as_chunks::<2>();
  for &[b0, b1] in pairs {
    s = O::step::<W, M>(s, b0);
    s = O::step::<W, M>(s, b1);
  }

  if let Some((&b0, tail)) = rest.split_first() {
    s = O::step::<W, M>(s, b0);
    rest = tail;
  }

  check_cursor(W::BITS, rest);
  *seed = s;
}

/// Panic unless the unrolled loop consumed the whole input.
#[inline(always)]
fn check_cursor(bits: u32, rest: &[u8]) {
  if !rest.is_empty() {
    cursor_overrun(bits, rest.len());
  }
}

#[cold]
#[inline(never)]
fn cursor_overrun(bits: u32, left: usize) -> ! {
  panic!("fnv{bits}: unrolled loop left {left} byte(s) unconsumed");
}
