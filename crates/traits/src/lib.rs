//! Core hashing traits for fnvhash.
//!
//! This crate provides the foundational traits that the fnvhash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hashes | FNV-1a 32/64/128 |
//!
//! # Error Types
//!
//! - [`UnknownStrategy`] - A strategy or ordering name that does not exist
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod error;
mod fast_hash;

pub use error::UnknownStrategy;
pub use fast_hash::FastHash;
