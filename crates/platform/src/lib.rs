//! Compile-target identification for fnvhash.
//!
//! This crate is the **single source of truth** for facts about the
//! compilation target that hashing code is allowed to depend on: the
//! architecture, the byte order of machine words, and the pointer width.
//!
//! # Main Entry Point
//!
//! ```
//! use platform::{Endian, Target};
//!
//! let target = Target::current();
//! if target.endian == Endian::Big {
//!   // byte-swap words at the canonical little-endian boundary
//! }
//! println!("{target}");
//! ```
//!
//! # Design Philosophy
//!
//! 1. **One API**: Algorithms query `platform` instead of sprinkling `cfg!(target_endian)`.
//! 2. **Zero-cost**: Everything is resolved at compile time via `cfg!` and `const fn`.
//! 3. **Both paths testable**: [`Endian`] is a plain value, so code parameterized by it can run the
//!    big-endian path on a little-endian host (and vice versa).

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod target;

pub use target::{Arch, Endian, Target};
