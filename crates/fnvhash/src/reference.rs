//! Bytewise reference implementations for all widths.
//!
//! These are the canonical "source of truth" for FNV computation: one byte per
//! iteration, one wrapping multiply by the prime, no unrolling and no strategy
//! parameters. Every optimized path must produce identical results.
//!
//! They are `const fn`, so the standard vectors are checked at compile time
//! below. Use them for:
//! - Correctness verification
//! - Test and fuzz oracles
//! - Computing digests of constant data at compile time

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::{
  FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME, FNV128_OFFSET_BASIS, FNV128_PRIME,
};

// ─────────────────────────────────────────────────────────────────────────────
// FNV-1a
// ─────────────────────────────────────────────────────────────────────────────

#[must_use]
pub const fn fnv1a_32(seed: u32, data: &[u8]) -> u32 {
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s ^= data[i] as u32;
    s = s.wrapping_mul(FNV32_PRIME);
    i += 1;
  }
  s
}

#[must_use]
pub const fn fnv1a_64(seed: u64, data: &[u8]) -> u64 {
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s ^= data[i] as u64;
    s = s.wrapping_mul(FNV64_PRIME);
    i += 1;
  }
  s
}

#[must_use]
pub const fn fnv1a_128(seed: u128, data: &[u8]) -> u128 {
  let prime = FNV128_PRIME.to_u128();
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s ^= data[i] as u128;
    s = s.wrapping_mul(prime);
    i += 1;
  }
  s
}

// ─────────────────────────────────────────────────────────────────────────────
// FNV-1
// ─────────────────────────────────────────────────────────────────────────────

#[must_use]
pub const fn fnv1_32(seed: u32, data: &[u8]) -> u32 {
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s = s.wrapping_mul(FNV32_PRIME);
    s ^= data[i] as u32;
    i += 1;
  }
  s
}

#[must_use]
pub const fn fnv1_64(seed: u64, data: &[u8]) -> u64 {
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s = s.wrapping_mul(FNV64_PRIME);
    s ^= data[i] as u64;
    i += 1;
  }
  s
}

#[must_use]
pub const fn fnv1_128(seed: u128, data: &[u8]) -> u128 {
  let prime = FNV128_PRIME.to_u128();
  let mut s = seed;
  let mut i = 0;
  while i < data.len() {
    s = s.wrapping_mul(prime);
    s ^= data[i] as u128;
    i += 1;
  }
  s
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values
// ─────────────────────────────────────────────────────────────────────────────

const FNV128_BASIS: u128 = FNV128_OFFSET_BASIS.to_u128();

const _: () = assert!(fnv1a_32(FNV32_OFFSET_BASIS, b"") == FNV32_OFFSET_BASIS);
const _: () = assert!(fnv1a_32(FNV32_OFFSET_BASIS, b"a") == 0xE40C_292C);
const _: () = assert!(fnv1a_32(FNV32_OFFSET_BASIS, b"foobar") == 0xBF9C_F968);
const _: () = assert!(fnv1_32(FNV32_OFFSET_BASIS, b"a") == 0x050C_5D7E);
const _: () = assert!(fnv1_32(FNV32_OFFSET_BASIS, b"foobar") == 0x31F0_B262);

const _: () = assert!(fnv1a_64(FNV64_OFFSET_BASIS, b"") == FNV64_OFFSET_BASIS);
const _: () = assert!(fnv1a_64(FNV64_OFFSET_BASIS, b"a") == 0xAF63_DC4C_8601_EC8C);
const _: () = assert!(fnv1a_64(FNV64_OFFSET_BASIS, b"foobar") == 0x8594_4171_F739_67E8);
const _: () = assert!(fnv1_64(FNV64_OFFSET_BASIS, b"a") == 0xAF63_BD4C_8601_B7BE);
const _: () = assert!(fnv1_64(FNV64_OFFSET_BASIS, b"foobar") == 0x340D_8765_A4DD_A9C2);

const _: () = assert!(fnv1a_128(FNV128_BASIS, b"") == FNV128_BASIS);
const _: () = assert!(fnv1a_128(FNV128_BASIS, b"a") == 0xD228_CB69_6F1A_8CAF_7891_2B70_4E4A_8964);
const _: () = assert!(fnv1_128(FNV128_BASIS, b"a") == 0xD228_CB69_101A_8CAF_7891_2B70_4E4A_141E);
