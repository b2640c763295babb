//! Error types for the hashing crates.
//!
//! Hashing itself is infallible. The only recoverable errors live at the
//! configuration surface, where strategy names are parsed.

use core::fmt;

/// A strategy, ordering, or state name was not recognized.
///
/// Returned by the `FromStr` implementations of the strategy identifiers.
/// Intentionally opaque: the caller already holds the offending string.
///
/// # Examples
///
/// ```
/// use traits::UnknownStrategy;
///
/// fn parse(name: &str) -> Result<u8, UnknownStrategy> {
///   match name {
///     "direct" => Ok(0),
///     _ => Err(UnknownStrategy::new()),
///   }
/// }
///
/// assert!(parse("direct").is_ok());
/// assert!(parse("karatsuba").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnknownStrategy;

impl UnknownStrategy {
  /// Create a new error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for UnknownStrategy {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for UnknownStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown hashing strategy")
  }
}

impl core::error::Error for UnknownStrategy {}
