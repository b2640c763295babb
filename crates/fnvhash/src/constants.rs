//! FNV offset bases and primes.
//!
//! | Width | Offset basis | Prime |
//! |-------|--------------|-------|
//! | 32 | `0x811C9DC5` | `0x01000193` = 2^24 + 0x193 |
//! | 64 | `0xCBF29CE484222325` | `0x00000100000001B3` = 2^40 + 0x1B3 |
//! | 128 | `0x6C62272E07BB014262B821756295C58D` | `0x0000000001000000000000000000013B` = 2^88 + 0x13B |

use crate::wide::U128;

pub const FNV32_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV32_PRIME: u32 = 16_777_619;

pub const FNV64_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
pub const FNV64_PRIME: u64 = 1_099_511_628_211;

pub const FNV128_OFFSET_BASIS: U128 = U128::from_halves(0x6C62_272E_07BB_0142, 0x62B8_2175_6295_C58D);
pub const FNV128_PRIME: U128 = U128::from_halves(0x0000_0000_0100_0000, 0x0000_0000_0000_013B);

/// Low term `K` of the 128-bit prime `2^88 + K`.
pub const FNV128_PRIME_LOW: u64 = 0x13B;
/// Exponent of the high term of the 128-bit prime.
pub const FNV128_PRIME_SHIFT: u32 = 88;

/// Bit positions set in each prime, i.e. the shifts of the shift-and-add multiply.
pub(crate) const FNV32_PRIME_SHIFTS: [u32; 6] = [0, 1, 4, 7, 8, 24];
pub(crate) const FNV64_PRIME_SHIFTS: [u32; 7] = [0, 1, 4, 5, 7, 8, 40];
pub(crate) const FNV128_PRIME_SHIFTS: [u32; 7] = [0, 1, 3, 4, 5, 8, 88];

#[allow(clippy::indexing_slicing)] // i < shifts.len()
const fn sum_of_shifts(shifts: &[u32]) -> u128 {
  let mut acc = 0u128;
  let mut i = 0;
  while i < shifts.len() {
    acc |= 1u128 << shifts[i];
    i += 1;
  }
  acc
}

const _: () = assert!(sum_of_shifts(&FNV32_PRIME_SHIFTS) == FNV32_PRIME as u128);
const _: () = assert!(sum_of_shifts(&FNV64_PRIME_SHIFTS) == FNV64_PRIME as u128);
const _: () = assert!(sum_of_shifts(&FNV128_PRIME_SHIFTS) == FNV128_PRIME.to_u128());
const _: () = assert!(FNV128_PRIME.to_u128() == (1u128 << FNV128_PRIME_SHIFT) + FNV128_PRIME_LOW as u128);
