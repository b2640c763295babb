//! FNV-1 and FNV-1a hashes at 32, 64, and 128 bits (**NOT CRYPTO**).
//!
//! FNV folds each input byte into a fixed-width state with one XOR and one
//! multiplication by a sparse prime. The state is the digest: there is no
//! finalization, and a digest can be fed back in as the seed of a later call
//! to continue hashing.
//!
//! # Quick Start
//!
//! ```
//! use fnvhash::{FNV32_OFFSET_BASIS, FNV64_OFFSET_BASIS, hash32, hash64};
//!
//! let mut h = FNV64_OFFSET_BASIS;
//! hash64(b"a", &mut h);
//! # #[cfg(not(feature = "fnv1"))]
//! assert_eq!(h, 0xaf63_dc4c_8601_ec8c);
//!
//! // Continue from a previous digest.
//! let mut split = FNV32_OFFSET_BASIS;
//! hash32(b"hello ", &mut split);
//! hash32(b"world", &mut split);
//! let mut whole = FNV32_OFFSET_BASIS;
//! hash32(b"hello world", &mut whole);
//! assert_eq!(split, whole);
//! ```
//!
//! Typed hashers implement [`FastHash`] and take their policies as type
//! parameters:
//!
//! ```
//! use fnvhash::{FastHash, Fnv128, U128, mul::Sparse, order::Fnv1a};
//!
//! let digest = <Fnv128<Fnv1a, Sparse, U128>>::hash(b"a");
//! assert_eq!(format!("{digest}"), "d228cb696f1a8caf78912b704e4a8964");
//! ```
//!
//! # Strategies
//!
//! | Policy | Choices | Selected by |
//! |--------|---------|-------------|
//! | Ordering | [`Fnv1a`](order::Fnv1a) (default), [`Fnv1`](order::Fnv1) | `fnv1` feature |
//! | Multiply | [`Direct`](mul::Direct) (default), [`ShiftAdd`](mul::ShiftAdd) | `shift-mul` feature |
//! | 128-bit state | `u128` (default), [`U128`] limbs | `limb128` feature |
//! | 128-bit limb multiply | [`Sparse`](mul::Sparse) (default), [`Widening`](mul::Widening) | `full-mul128` feature |
//!
//! All combinations produce identical digests for the same ordering. The
//! choice is fixed at build time; see [`config`].
//!
//! # Byte Order
//!
//! Digests are integer values and do not depend on the target. Seeds stored as
//! bytes use a canonical little-endian layout; [`endian`] converts at that
//! boundary.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod accumulate;
pub mod config;
mod constants;
pub mod endian;
mod hasher;
pub mod mul;
pub mod order;
pub mod reference;
mod wide;
mod word;

pub use constants::{
  FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME, FNV128_OFFSET_BASIS, FNV128_PRIME,
  FNV128_PRIME_LOW, FNV128_PRIME_SHIFT,
};
pub use hasher::{Fnv32, Fnv64, Fnv128};
pub use platform::Endian;
pub use traits::{FastHash, UnknownStrategy};
pub use wide::U128;
pub use word::FnvWord;

use crate::config::{DefaultMul, DefaultMul128, DefaultOrder, State128};

/// Fold `data` into a 32-bit seed using the build's default strategies.
///
/// Start from [`FNV32_OFFSET_BASIS`] for a fresh digest.
#[inline]
pub fn hash32(data: &[u8], seed: &mut u32) {
  accumulate::accumulate32::<DefaultOrder, DefaultMul>(data, seed);
}

/// Fold `data` into a 64-bit seed using the build's default strategies.
///
/// Start from [`FNV64_OFFSET_BASIS`] for a fresh digest.
#[inline]
pub fn hash64(data: &[u8], seed: &mut u64) {
  accumulate::accumulate64::<DefaultOrder, DefaultMul>(data, seed);
}

/// Fold `data` into a 128-bit seed using the build's default strategies.
///
/// Start from [`FNV128_OFFSET_BASIS`] for a fresh digest.
#[inline]
pub fn hash128(data: &[u8], seed: &mut U128) {
  *seed = <Fnv128<DefaultOrder, DefaultMul128, State128>>::hash_with_seed(*seed, data);
}

/// Fold `data` into a 32-bit seed held in memory (stored) form.
///
/// On big-endian targets the seed is byte-swapped in and out of the
/// accumulator, so the seed's bytes in memory evolve identically everywhere.
#[inline]
pub fn hash32_stored(data: &[u8], seed: &mut u32) {
  endian::hash_stored_with(Endian::NATIVE, data, seed, accumulate::accumulate32::<DefaultOrder, DefaultMul>);
}

/// 64-bit counterpart of [`hash32_stored`].
#[inline]
pub fn hash64_stored(data: &[u8], seed: &mut u64) {
  endian::hash_stored_with(Endian::NATIVE, data, seed, accumulate::accumulate64::<DefaultOrder, DefaultMul>);
}

/// 128-bit counterpart of [`hash32_stored`].
#[inline]
pub fn hash128_stored(data: &[u8], seed: &mut U128) {
  endian::hash_stored_with(Endian::NATIVE, data, seed, hash128);
}
