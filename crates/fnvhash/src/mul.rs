//! Prime multiplication strategies.
//!
//! Every strategy computes `x * P mod 2^BITS` and must agree bit-for-bit with
//! every other strategy on every input. Which one runs is fixed when the
//! crate is built; see [`crate::config`].
//!
//! | Strategy | State types | Method |
//! |----------|-------------|--------|
//! | [`Direct`] | `u32`, `u64`, `u128` | one wrapping multiply |
//! | [`ShiftAdd`] | `u32`, `u64`, `u128`, [`U128`] | sum of `x << k` over the prime's set bits |
//! | [`Sparse`] | [`U128`] | `x*K + (lo(x) << 24)·2^64` with 32-bit partial products |
//! | [`Widening`] | [`U128`] | generic 128x128 limb multiply |

use crate::{
  constants::{FNV128_PRIME, FNV128_PRIME_LOW, FNV128_PRIME_SHIFT},
  wide::U128,
  word::FnvWord,
};

/// Multiplication of a state word by its FNV prime.
pub trait PrimeMul<W: FnvWord> {
  /// Name used by configuration introspection.
  const NAME: &'static str;

  /// `x * W::PRIME` modulo `2^W::BITS`.
  #[must_use]
  fn mul_prime(x: W) -> W;
}

/// Wrapping multiply by the prime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direct;

/// Shift-and-add decomposition of the prime.
///
/// Each FNV prime has six or seven set bits, so `x * P` is the wrapping sum of
/// `x` shifted to each of them. Whether this beats a multiply instruction
/// depends on the CPU's multiply latency; on most current cores it does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftAdd;

/// Sparse-prime limb multiply for [`U128`].
///
/// With `P = 2^88 + K`, `K = 0x13B`:
///
/// ```text
/// x * P mod 2^128 = x * K + (lo(x) << 24) * 2^64
/// ```
///
/// `hi(x) * 2^88` vanishes modulo 2^128, so only the low limb feeds the shifted
/// term. `x * K` is a 128x9-bit multiply: the low limb times `K` is widened
/// through two 32-bit partial products whose carry lands in the high limb.
/// No operation wider than 64x64->64 is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sparse;

/// Generic 128x128->128 limb multiply for [`U128`], blind to the prime's shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Widening;

// ─────────────────────────────────────────────────────────────────────────────
// Direct
// ─────────────────────────────────────────────────────────────────────────────

impl PrimeMul<u32> for Direct {
  const NAME: &'static str = "direct";

  #[inline(always)]
  fn mul_prime(x: u32) -> u32 {
    x.wrapping_mul(u32::PRIME)
  }
}

impl PrimeMul<u64> for Direct {
  const NAME: &'static str = "direct";

  #[inline(always)]
  fn mul_prime(x: u64) -> u64 {
    x.wrapping_mul(u64::PRIME)
  }
}

impl PrimeMul<u128> for Direct {
  const NAME: &'static str = "direct";

  #[inline(always)]
  fn mul_prime(x: u128) -> u128 {
    x.wrapping_mul(u128::PRIME)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// ShiftAdd
// ─────────────────────────────────────────────────────────────────────────────

impl PrimeMul<u32> for ShiftAdd {
  const NAME: &'static str = "shift-add";

  #[inline(always)]
  fn mul_prime(x: u32) -> u32 {
    x.wrapping_add(x << 1)
      .wrapping_add(x << 4)
      .wrapping_add(x << 7)
      .wrapping_add(x << 8)
      .wrapping_add(x << 24)
  }
}

impl PrimeMul<u64> for ShiftAdd {
  const NAME: &'static str = "shift-add";

  #[inline(always)]
  fn mul_prime(x: u64) -> u64 {
    x.wrapping_add(x << 1)
      .wrapping_add(x << 4)
      .wrapping_add(x << 5)
      .wrapping_add(x << 7)
      .wrapping_add(x << 8)
      .wrapping_add(x << 40)
  }
}

impl PrimeMul<u128> for ShiftAdd {
  const NAME: &'static str = "shift-add";

  #[inline(always)]
  fn mul_prime(x: u128) -> u128 {
    x.wrapping_add(x << 1)
      .wrapping_add(x << 3)
      .wrapping_add(x << 4)
      .wrapping_add(x << 5)
      .wrapping_add(x << 8)
      .wrapping_add(x << 88)
  }
}

impl PrimeMul<U128> for ShiftAdd {
  const NAME: &'static str = "shift-add";

  #[inline(always)]
  fn mul_prime(x: U128) -> U128 {
    x.wrapping_add(x.wrapping_shl(1))
      .wrapping_add(x.wrapping_shl(3))
      .wrapping_add(x.wrapping_shl(4))
      .wrapping_add(x.wrapping_shl(5))
      .wrapping_add(x.wrapping_shl(8))
      .wrapping_add(x.wrapping_shl(88))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// 128-bit limb strategies
// ─────────────────────────────────────────────────────────────────────────────

const HIGH_TERM_SHIFT: u32 = FNV128_PRIME_SHIFT - 64;

impl PrimeMul<U128> for Sparse {
  const NAME: &'static str = "sparse";

  #[inline(always)]
  fn mul_prime(x: U128) -> U128 {
    const K: u64 = FNV128_PRIME_LOW;

    let lo = x.lo();
    // High 64 bits of lo * K, assembled from 32-bit halves.
    let carry = ((lo & 0xFFFF_FFFF) * K) >> 32;
    let carry = ((lo >> 32) * K + carry) >> 32;

    let hi = x.hi().wrapping_mul(K).wrapping_add(lo << HIGH_TERM_SHIFT).wrapping_add(carry);
    U128::from_halves(hi, lo.wrapping_mul(K))
  }
}

impl PrimeMul<U128> for Widening {
  const NAME: &'static str = "widening";

  #[inline(always)]
  fn mul_prime(x: U128) -> U128 {
    x.wrapping_mul(FNV128_PRIME)
  }
}
