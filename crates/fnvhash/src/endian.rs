//! Byte-order normalization of stored seeds.
//!
//! The FNV arithmetic always runs on the seed as an integer value. What
//! changes with the target is how a seed that was *stored* (in a buffer, a
//! file, a struct written by another machine) reads back as a native word. The
//! canonical layout of a stored seed is little-endian: on a big-endian target
//! the word loaded from memory is byte-swapped before hashing and swapped back
//! afterwards, so the stored bytes evolve identically on every target.
//!
//! The inner accumulators are never special-cased; normalization only happens
//! here, at the boundary.

use platform::Endian;

use crate::{mul::PrimeMul, order::Order, word::FnvWord};

/// Convert between a word as loaded from memory on an `endian` target and its
/// canonical (little-endian) value. The conversion is its own inverse.
#[inline(always)]
#[must_use]
pub fn normalize<W: FnvWord>(endian: Endian, word: W) -> W {
  match endian {
    Endian::Little => word,
    Endian::Big => word.swap_bytes(),
  }
}

/// Hash `data` into a seed held in stored (memory) form on an `endian` target.
///
/// `accumulate` is one of the width-specialized accumulators, e.g.
/// [`accumulate32::<O, M>`](crate::accumulate::accumulate32).
#[inline]
pub fn hash_stored_with<W: FnvWord>(endian: Endian, data: &[u8], stored: &mut W, accumulate: fn(&[u8], &mut W)) {
  let mut canonical = normalize(endian, *stored);
  accumulate(data, &mut canonical);
  *stored = normalize(endian, canonical);
}

/// [`hash_stored_with`] using the plain bytewise accumulator.
#[inline]
pub fn hash_stored<W: FnvWord, O: Order, M: PrimeMul<W>>(endian: Endian, data: &[u8], stored: &mut W) {
  hash_stored_with(endian, data, stored, crate::accumulate::accumulate::<W, O, M>);
}
