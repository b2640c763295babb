//! 128-bit integer on 64-bit limbs.
//!
//! [`U128`] is the seed type of the 128-bit hash. It carries its value as two
//! 64-bit limbs so the limb multiply strategies can run on targets whose
//! widest native multiply is 64x64->64, and converts losslessly to and from
//! `u128` where the native type is used instead.

#![allow(clippy::indexing_slicing)] // Fixed-size limb arrays with constant bounds

use core::fmt;

/// Unsigned 128-bit integer stored as high and low 64-bit limbs.
///
/// Arithmetic wraps modulo 2^128.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct U128 {
  // Field order makes the derived `Ord` compare numerically.
  hi: u64,
  lo: u64,
}

impl U128 {
  pub const ZERO: Self = Self::from_halves(0, 0);
  pub const ONE: Self = Self::from_halves(0, 1);
  pub const MAX: Self = Self::from_halves(u64::MAX, u64::MAX);

  /// Build a value from its high and low 64-bit halves.
  #[inline]
  #[must_use]
  pub const fn from_halves(hi: u64, lo: u64) -> Self {
    Self { hi, lo }
  }

  #[inline]
  #[must_use]
  pub const fn hi(self) -> u64 {
    self.hi
  }

  #[inline]
  #[must_use]
  pub const fn lo(self) -> u64 {
    self.lo
  }

  /// Build a value from four 32-bit limbs, least significant first.
  #[inline]
  #[must_use]
  pub const fn from_limbs32(limbs: [u32; 4]) -> Self {
    Self {
      hi: ((limbs[3] as u64) << 32) | limbs[2] as u64,
      lo: ((limbs[1] as u64) << 32) | limbs[0] as u64,
    }
  }

  /// The four 32-bit limbs, least significant first.
  #[inline]
  #[must_use]
  pub const fn limbs32(self) -> [u32; 4] {
    [
      self.lo as u32,
      (self.lo >> 32) as u32,
      self.hi as u32,
      (self.hi >> 32) as u32,
    ]
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(value: u128) -> Self {
    Self {
      hi: (value >> 64) as u64,
      lo: value as u64,
    }
  }

  #[inline]
  #[must_use]
  pub const fn to_u128(self) -> u128 {
    ((self.hi as u128) << 64) | self.lo as u128
  }

  /// XOR a byte into the least significant bits.
  #[inline]
  #[must_use]
  pub const fn xor_low_byte(self, byte: u8) -> Self {
    Self {
      hi: self.hi,
      lo: self.lo ^ byte as u64,
    }
  }

  /// Reverse all 16 bytes.
  #[inline]
  #[must_use]
  pub const fn swap_bytes(self) -> Self {
    Self {
      hi: self.lo.swap_bytes(),
      lo: self.hi.swap_bytes(),
    }
  }

  #[inline]
  #[must_use]
  pub const fn to_le_bytes(self) -> [u8; 16] {
    let lo = self.lo.to_le_bytes();
    let hi = self.hi.to_le_bytes();
    let mut out = [0u8; 16];
    let mut i = 0;
    while i < 8 {
      out[i] = lo[i];
      out[i + 8] = hi[i];
      i += 1;
    }
    out
  }

  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    let mut i = 0;
    while i < 8 {
      lo[i] = bytes[i];
      hi[i] = bytes[i + 8];
      i += 1;
    }
    Self {
      hi: u64::from_le_bytes(hi),
      lo: u64::from_le_bytes(lo),
    }
  }

  #[inline]
  #[must_use]
  pub const fn to_be_bytes(self) -> [u8; 16] {
    self.swap_bytes().to_le_bytes()
  }

  #[inline]
  #[must_use]
  pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
    Self::from_le_bytes(bytes).swap_bytes()
  }

  /// Bytes in the target's native order, as the value would sit in memory.
  #[inline]
  #[must_use]
  pub const fn to_ne_bytes(self) -> [u8; 16] {
    if cfg!(target_endian = "big") { self.to_be_bytes() } else { self.to_le_bytes() }
  }

  #[inline]
  #[must_use]
  pub const fn from_ne_bytes(bytes: [u8; 16]) -> Self {
    if cfg!(target_endian = "big") {
      Self::from_be_bytes(bytes)
    } else {
      Self::from_le_bytes(bytes)
    }
  }

  #[inline]
  #[must_use]
  pub const fn wrapping_add(self, rhs: Self) -> Self {
    let (lo, carry) = self.lo.overflowing_add(rhs.lo);
    Self {
      hi: self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u64),
      lo,
    }
  }

  /// Left shift modulo 2^128. `shift` is taken modulo 128, as for `u128::wrapping_shl`.
  #[inline]
  #[must_use]
  pub const fn wrapping_shl(self, shift: u32) -> Self {
    let shift = shift % 128;
    if shift == 0 {
      self
    } else if shift >= 64 {
      Self {
        hi: self.lo << (shift - 64),
        lo: 0,
      }
    } else {
      Self {
        hi: (self.hi << shift) | (self.lo >> (64 - shift)),
        lo: self.lo << shift,
      }
    }
  }

  /// Generic 128x128->128 multiply.
  ///
  /// Schoolbook multiplication over four 32-bit limbs. Every partial product
  /// and carry fits a `u64`: `(2^32-1)^2 + 2*(2^32-1) = 2^64-1`. Limb pairs whose
  /// product lands at or above bit 128 are skipped.
  #[inline]
  #[must_use]
  pub const fn wrapping_mul(self, rhs: Self) -> Self {
    let a = self.limbs32();
    let b = rhs.limbs32();
    let mut r = [0u32; 4];

    let mut i = 0;
    while i < 4 {
      let mut carry = 0u64;
      let mut j = 0;
      while i + j < 4 {
        let t = (a[i] as u64) * (b[j] as u64) + r[i + j] as u64 + carry;
        r[i + j] = t as u32;
        carry = t >> 32;
        j += 1;
      }
      i += 1;
    }

    Self::from_limbs32(r)
  }
}

impl From<u128> for U128 {
  #[inline]
  fn from(value: u128) -> Self {
    Self::from_u128(value)
  }
}

impl From<U128> for u128 {
  #[inline]
  fn from(value: U128) -> Self {
    value.to_u128()
  }
}

impl fmt::LowerHex for U128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    write!(f, "{:016x}{:016x}", self.hi, self.lo)
  }
}

impl fmt::UpperHex for U128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      f.write_str("0x")?;
    }
    write!(f, "{:016X}{:016X}", self.hi, self.lo)
  }
}

impl fmt::Display for U128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}

impl fmt::Debug for U128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "U128({:#x})", self)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  const SAMPLES: [u128; 8] = [
    0,
    1,
    u128::MAX,
    0x6C62_272E_07BB_0142_62B8_2175_6295_C58D,
    0x0000_0000_0100_0000_0000_0000_0000_013B,
    0xFFFF_FFFF_0000_0000_FFFF_FFFF_0000_0000,
    0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210,
    1 << 127,
  ];

  #[test]
  fn halves_and_limbs() {
    let x = U128::from_halves(0x0011_2233_4455_6677, 0x8899_AABB_CCDD_EEFF);
    assert_eq!(x.hi(), 0x0011_2233_4455_6677);
    assert_eq!(x.lo(), 0x8899_AABB_CCDD_EEFF);
    assert_eq!(x.limbs32(), [0xCCDD_EEFF, 0x8899_AABB, 0x4455_6677, 0x0011_2233]);
    assert_eq!(U128::from_limbs32(x.limbs32()), x);
  }

  #[test]
  fn u128_conversions() {
    for &v in &SAMPLES {
      let x = U128::from(v);
      assert_eq!(u128::from(x), v);
      assert_eq!(x.hi(), (v >> 64) as u64);
      assert_eq!(x.lo(), v as u64);
    }
  }

  #[test]
  fn byte_order_matches_native() {
    for &v in &SAMPLES {
      let x = U128::from(v);
      assert_eq!(x.to_le_bytes(), v.to_le_bytes());
      assert_eq!(x.to_be_bytes(), v.to_be_bytes());
      assert_eq!(x.to_ne_bytes(), v.to_ne_bytes());
      assert_eq!(x.swap_bytes().to_u128(), v.swap_bytes());
      assert_eq!(U128::from_le_bytes(v.to_le_bytes()), x);
      assert_eq!(U128::from_be_bytes(v.to_be_bytes()), x);
      assert_eq!(U128::from_ne_bytes(v.to_ne_bytes()), x);
    }
  }

  #[test]
  fn arithmetic_matches_native() {
    for &a in &SAMPLES {
      for &b in &SAMPLES {
        let (x, y) = (U128::from(a), U128::from(b));
        assert_eq!(x.wrapping_add(y).to_u128(), a.wrapping_add(b), "add {a:#x} {b:#x}");
        assert_eq!(x.wrapping_mul(y).to_u128(), a.wrapping_mul(b), "mul {a:#x} {b:#x}");
      }
      for shift in [0u32, 1, 3, 24, 63, 64, 65, 88, 127, 128, 200] {
        assert_eq!(
          U128::from(a).wrapping_shl(shift).to_u128(),
          a.wrapping_shl(shift),
          "shl {a:#x} by {shift}"
        );
      }
    }
  }

  #[test]
  fn xor_low_byte_only_touches_low_limb() {
    let x = U128::MAX.xor_low_byte(0xFF);
    assert_eq!(x.hi(), u64::MAX);
    assert_eq!(x.lo(), u64::MAX ^ 0xFF);
  }

  #[test]
  fn ordering_is_numeric() {
    assert!(U128::from_halves(1, 0) > U128::from_halves(0, u64::MAX));
    assert!(U128::ZERO < U128::ONE);
  }

  #[test]
  fn formatting() {
    let x = U128::from(0x6C62_272E_07BB_0142_62B8_2175_6295_C58Du128);
    assert_eq!(format!("{x}"), "6c62272e07bb014262b821756295c58d");
    assert_eq!(format!("{x:#x}"), "0x6c62272e07bb014262b821756295c58d");
    assert_eq!(format!("{x:X}"), "6C62272E07BB014262B821756295C58D");
    assert_eq!(format!("{:?}", U128::ONE), "U128(0x00000000000000000000000000000001)");
  }
}
