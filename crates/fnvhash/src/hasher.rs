//! Typed one-shot hashers.
//!
//! [`Fnv32`], [`Fnv64`], and [`Fnv128`] are zero-sized markers carrying the
//! ordering and multiply policies as type parameters. The defaults follow the
//! build configuration, so `Fnv64::hash(data)` is the digest the free
//! functions compute.

use core::marker::PhantomData;

use platform::Endian;
use traits::FastHash;

use crate::{
  accumulate::{accumulate32, accumulate64, accumulate128},
  config::{DefaultMul, DefaultMul128, DefaultOrder, State128},
  endian::hash_stored_with,
  mul::PrimeMul,
  order::Order,
  wide::U128,
  word::FnvWord,
};

/// 32-bit FNV.
pub struct Fnv32<O = DefaultOrder, M = DefaultMul>(PhantomData<(O, M)>);

/// 64-bit FNV.
pub struct Fnv64<O = DefaultOrder, M = DefaultMul>(PhantomData<(O, M)>);

/// 128-bit FNV.
///
/// Seeds and digests are always [`U128`]; `W` is the representation used
/// while hashing (`u128` or [`U128`]) and `M` a multiply strategy for it.
pub struct Fnv128<O = DefaultOrder, M = DefaultMul128, W = State128>(PhantomData<(O, M, W)>);

impl<O: Order, M: PrimeMul<u32>> FastHash for Fnv32<O, M> {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;
  const DEFAULT_SEED: u32 = u32::OFFSET_BASIS;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    let mut s = seed;
    accumulate32::<O, M>(data, &mut s);
    s
  }
}

impl<O: Order, M: PrimeMul<u64>> FastHash for Fnv64<O, M> {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;
  const DEFAULT_SEED: u64 = u64::OFFSET_BASIS;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    let mut s = seed;
    accumulate64::<O, M>(data, &mut s);
    s
  }
}

impl<O, M, W> FastHash for Fnv128<O, M, W>
where
  O: Order,
  M: PrimeMul<W>,
  W: FnvWord + From<U128> + Into<U128>,
{
  const OUTPUT_SIZE: usize = 16;
  type Output = U128;
  type Seed = U128;
  const DEFAULT_SEED: U128 = U128::OFFSET_BASIS;

  #[inline]
  fn hash_with_seed(seed: U128, data: &[u8]) -> U128 {
    let mut s = W::from(seed);
    accumulate128::<W, O, M>(data, &mut s);
    s.into()
  }
}

impl<O: Order, M: PrimeMul<u32>> Fnv32<O, M> {
  /// Hash `data` into a seed given as canonical little-endian bytes.
  ///
  /// The bytes are loaded as a native word, the way a seed persisted in a
  /// buffer would be, and normalized for the target's byte order.
  #[inline]
  #[must_use]
  pub fn digest_le_bytes(seed: [u8; 4], data: &[u8]) -> [u8; 4] {
    let mut stored = u32::from_ne_bytes(seed);
    hash_stored_with(Endian::NATIVE, data, &mut stored, accumulate32::<O, M>);
    stored.to_ne_bytes()
  }
}

impl<O: Order, M: PrimeMul<u64>> Fnv64<O, M> {
  /// Hash `data` into a seed given as canonical little-endian bytes.
  #[inline]
  #[must_use]
  pub fn digest_le_bytes(seed: [u8; 8], data: &[u8]) -> [u8; 8] {
    let mut stored = u64::from_ne_bytes(seed);
    hash_stored_with(Endian::NATIVE, data, &mut stored, accumulate64::<O, M>);
    stored.to_ne_bytes()
  }
}

impl<O, M, W> Fnv128<O, M, W>
where
  O: Order,
  M: PrimeMul<W>,
  W: FnvWord + From<U128> + Into<U128>,
{
  /// Hash `data` into a seed given as canonical little-endian bytes.
  #[inline]
  #[must_use]
  pub fn digest_le_bytes(seed: [u8; 16], data: &[u8]) -> [u8; 16] {
    let mut stored = W::from(U128::from_ne_bytes(seed));
    hash_stored_with(Endian::NATIVE, data, &mut stored, accumulate128::<W, O, M>);
    Into::<U128>::into(stored).to_ne_bytes()
  }
}

// Manual impls: derives would bound `O` and `M` as well.
macro_rules! marker_impls {
  ($name:ident < $($p:ident),+ >) => {
    impl<$($p),+> Clone for $name<$($p),+> {
      #[inline]
      fn clone(&self) -> Self {
        *self
      }
    }

    impl<$($p),+> Copy for $name<$($p),+> {}

    impl<$($p),+> Default for $name<$($p),+> {
      #[inline]
      fn default() -> Self {
        Self(PhantomData)
      }
    }

    impl<$($p),+> core::fmt::Debug for $name<$($p),+> {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(stringify!($name))
      }
    }
  };
}

marker_impls!(Fnv32<O, M>);
marker_impls!(Fnv64<O, M>);
marker_impls!(Fnv128<O, M, W>);
