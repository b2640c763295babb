//! Iteration orderings.
//!
//! FNV-1a XORs the byte in before multiplying, so every input bit is spread
//! over the whole state by the multiply that follows it. FNV-1 multiplies
//! first and XORs last, leaving the final byte unmixed in the low bits. The
//! two are distinct hash functions, not rewrites of each other.

use crate::{mul::PrimeMul, word::FnvWord};

/// Per-byte step of an FNV variant.
pub trait Order {
  /// Name used by configuration introspection.
  const NAME: &'static str;

  /// Fold one byte into `state`.
  #[must_use]
  fn step<W: FnvWord, M: PrimeMul<W>>(state: W, byte: u8) -> W;
}

/// XOR, then multiply (FNV-1a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fnv1a;

/// Multiply, then XOR (FNV-1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fnv1;

impl Order for Fnv1a {
  const NAME: &'static str = "fnv1a";

  #[inline(always)]
  fn step<W: FnvWord, M: PrimeMul<W>>(state: W, byte: u8) -> W {
    M::mul_prime(state.xor_byte(byte))
  }
}

impl Order for Fnv1 {
  const NAME: &'static str = "fnv1";

  #[inline(always)]
  fn step<W: FnvWord, M: PrimeMul<W>>(state: W, byte: u8) -> W {
    M::mul_prime(state).xor_byte(byte)
  }
}
