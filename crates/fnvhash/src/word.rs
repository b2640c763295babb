//! Hash state words.
//!
//! An FNV state is a fixed-width unsigned integer that is both the running
//! accumulator and, after the last byte, the digest. [`FnvWord`] abstracts over
//! the four state representations: `u32`, `u64`, native `u128`, and the limb
//! type [`U128`].

use core::fmt::Debug;

use crate::{
  constants::{FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME, FNV128_OFFSET_BASIS, FNV128_PRIME},
  wide::U128,
};

mod sealed {
  pub trait Sealed {}

  impl Sealed for u32 {}
  impl Sealed for u64 {}
  impl Sealed for u128 {}
  impl Sealed for crate::wide::U128 {}
}

/// Fixed-width FNV state.
///
/// Sealed: the set of widths is closed.
pub trait FnvWord: Copy + Eq + Debug + sealed::Sealed {
  /// Width of the state in bits.
  const BITS: u32;
  /// Initial state of a fresh digest.
  const OFFSET_BASIS: Self;
  /// FNV prime for this width.
  const PRIME: Self;

  /// XOR `byte` into the least significant bits.
  #[must_use]
  fn xor_byte(self, byte: u8) -> Self;

  /// Reverse the byte order of the state.
  #[must_use]
  fn swap_bytes(self) -> Self;
}

impl FnvWord for u32 {
  const BITS: u32 = 32;
  const OFFSET_BASIS: Self = FNV32_OFFSET_BASIS;
  const PRIME: Self = FNV32_PRIME;

  #[inline(always)]
  fn xor_byte(self, byte: u8) -> Self {
    self ^ Self::from(byte)
  }

  #[inline(always)]
  fn swap_bytes(self) -> Self {
    u32::swap_bytes(self)
  }
}

impl FnvWord for u64 {
  const BITS: u32 = 64;
  const OFFSET_BASIS: Self = FNV64_OFFSET_BASIS;
  const PRIME: Self = FNV64_PRIME;

  #[inline(always)]
  fn xor_byte(self, byte: u8) -> Self {
    self ^ Self::from(byte)
  }

  #[inline(always)]
  fn swap_bytes(self) -> Self {
    u64::swap_bytes(self)
  }
}

impl FnvWord for u128 {
  const BITS: u32 = 128;
  const OFFSET_BASIS: Self = FNV128_OFFSET_BASIS.to_u128();
  const PRIME: Self = FNV128_PRIME.to_u128();

  #[inline(always)]
  fn xor_byte(self, byte: u8) -> Self {
    self ^ Self::from(byte)
  }

  #[inline(always)]
  fn swap_bytes(self) -> Self {
    u128::swap_bytes(self)
  }
}

impl FnvWord for U128 {
  const BITS: u32 = 128;
  const OFFSET_BASIS: Self = FNV128_OFFSET_BASIS;
  const PRIME: Self = FNV128_PRIME;

  #[inline(always)]
  fn xor_byte(self, byte: u8) -> Self {
    self.xor_low_byte(byte)
  }

  #[inline(always)]
  fn swap_bytes(self) -> Self {
    U128::swap_bytes(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn check_swap_is_involution<W: FnvWord>(samples: &[W]) {
    for &w in samples {
      assert_eq!(w.swap_bytes().swap_bytes(), w);
    }
  }

  #[test]
  fn swap_bytes_is_involution() {
    check_swap_is_involution(&[0u32, 1, u32::OFFSET_BASIS, u32::MAX]);
    check_swap_is_involution(&[0u64, 1, u64::OFFSET_BASIS, u64::MAX]);
    check_swap_is_involution(&[0u128, 1, u128::OFFSET_BASIS, u128::MAX]);
    check_swap_is_involution(&[U128::ZERO, U128::ONE, U128::OFFSET_BASIS, U128::MAX]);
  }

  #[test]
  fn wide_and_native_agree() {
    assert_eq!(U128::OFFSET_BASIS.to_u128(), u128::OFFSET_BASIS);
    assert_eq!(U128::PRIME.to_u128(), u128::PRIME);
    assert_eq!(
      U128::OFFSET_BASIS.xor_byte(0xA5).to_u128(),
      u128::OFFSET_BASIS.xor_byte(0xA5)
    );
    assert_eq!(
      U128::OFFSET_BASIS.swap_bytes().to_u128(),
      u128::OFFSET_BASIS.swap_bytes()
    );
  }

  #[test]
  fn xor_byte_touches_low_byte_only() {
    assert_eq!(0xFFFF_FF00u32.xor_byte(0xFF), u32::MAX);
    assert_eq!(u64::MAX.xor_byte(0x0F), u64::MAX ^ 0x0F);
  }
}
