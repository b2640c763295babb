//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, checksums, content fingerprints,
/// and other non-adversarial settings. They are **not** suitable for
/// signatures, MACs, password hashing, or untrusted inputs where collision
/// attacks matter.
///
/// This trait is intentionally one-shot. Hashes whose state *is* their output
/// (FNV) continue a computation by feeding a previous digest back in as the
/// seed of the next call.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug;

  /// Seed type.
  type Seed: Copy + Debug;

  /// Seed used by [`hash`](Self::hash).
  ///
  /// Algorithms with a published initial value (an FNV offset basis, for
  /// example) use it here rather than `Default::default()`.
  const DEFAULT_SEED: Self::Seed;

  /// Compute the hash of `data` using [`DEFAULT_SEED`](Self::DEFAULT_SEED).
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::DEFAULT_SEED, data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte sum with a non-zero default seed, enough to exercise the provided method.
  struct Sum;

  impl FastHash for Sum {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;
    const DEFAULT_SEED: u64 = 7;

    fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(u64::from(b)))
    }
  }

  #[test]
  fn hash_uses_default_seed() {
    assert_eq!(Sum::hash(b""), 7);
    assert_eq!(Sum::hash(&[1, 2, 3]), 13);
    assert_eq!(Sum::hash(&[1, 2, 3]), Sum::hash_with_seed(Sum::DEFAULT_SEED, &[1, 2, 3]));
  }
}
