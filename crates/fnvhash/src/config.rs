//! Build configuration (orderings and multiply strategies).
//!
//! Every selection knob is a cargo feature, resolved when the crate is
//! compiled. The hot loops are monomorphized over the chosen policy types;
//! nothing here is consulted per call.
//!
//! | Feature | Effect | Default without it |
//! |---------|--------|--------------------|
//! | `fnv1` | [`DefaultOrder`] = [`Fnv1`] | [`Fnv1a`] |
//! | `shift-mul` | [`DefaultMul`] = [`ShiftAdd`] | [`Direct`] |
//! | `full-mul128` | [`DefaultMul128`] = [`Widening`] on the limb state | [`Sparse`] |
//! | `limb128` | [`State128`] = [`U128`] | native `u128` |
//!
//! [`FnvConfig::current()`] reports the resolved choice at runtime.

use core::{fmt, str::FromStr};

use platform::Target;
use traits::UnknownStrategy;

#[allow(unused_imports)] // Which of these are named depends on the enabled features.
use crate::{
  mul::{Direct, PrimeMul, ShiftAdd, Sparse, Widening},
  order::{Fnv1, Fnv1a, Order},
  wide::U128,
};

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Ordering used by [`hash32`](crate::hash32), [`hash64`](crate::hash64), and [`hash128`](crate::hash128).
#[cfg(not(feature = "fnv1"))]
pub type DefaultOrder = Fnv1a;
/// Ordering used by [`hash32`](crate::hash32), [`hash64`](crate::hash64), and [`hash128`](crate::hash128).
#[cfg(feature = "fnv1")]
pub type DefaultOrder = Fnv1;

/// Multiply strategy for native words.
#[cfg(not(feature = "shift-mul"))]
pub type DefaultMul = Direct;
/// Multiply strategy for native words.
#[cfg(feature = "shift-mul")]
pub type DefaultMul = ShiftAdd;

/// Multiply strategy for 128-bit states.
#[cfg(not(feature = "limb128"))]
pub type DefaultMul128 = DefaultMul;
/// Multiply strategy for 128-bit states.
#[cfg(all(feature = "limb128", not(feature = "full-mul128")))]
pub type DefaultMul128 = Sparse;
/// Multiply strategy for 128-bit states.
#[cfg(all(feature = "limb128", feature = "full-mul128"))]
pub type DefaultMul128 = Widening;

/// Representation of 128-bit states while hashing.
#[cfg(not(feature = "limb128"))]
pub type State128 = u128;
/// Representation of 128-bit states while hashing.
#[cfg(feature = "limb128")]
pub type State128 = U128;

// ─────────────────────────────────────────────────────────────────────────────
// Strategy identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Byte ordering identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderId {
  Fnv1a,
  Fnv1,
}

/// Multiply strategy identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulId {
  Direct,
  ShiftAdd,
  Sparse,
  Widening,
}

/// 128-bit state representation identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateId {
  Native,
  Limb,
}

impl OrderId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Fnv1a => Fnv1a::NAME,
      Self::Fnv1 => Fnv1::NAME,
    }
  }
}

impl MulId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Direct => "direct",
      Self::ShiftAdd => "shift-add",
      Self::Sparse => "sparse",
      Self::Widening => "widening",
    }
  }
}

impl StateId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Native => "native",
      Self::Limb => "limb",
    }
  }
}

impl FromStr for OrderId {
  type Err = UnknownStrategy;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("fnv1a") || s.eq_ignore_ascii_case("fnv-1a") {
      Ok(Self::Fnv1a)
    } else if s.eq_ignore_ascii_case("fnv1") || s.eq_ignore_ascii_case("fnv-1") || s.eq_ignore_ascii_case("normal") {
      Ok(Self::Fnv1)
    } else {
      Err(UnknownStrategy::new())
    }
  }
}

impl FromStr for MulId {
  type Err = UnknownStrategy;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("direct") || s.eq_ignore_ascii_case("mul") {
      Ok(Self::Direct)
    } else if s.eq_ignore_ascii_case("shift-add") || s.eq_ignore_ascii_case("shift") || s.eq_ignore_ascii_case("bitshift")
    {
      Ok(Self::ShiftAdd)
    } else if s.eq_ignore_ascii_case("sparse") {
      Ok(Self::Sparse)
    } else if s.eq_ignore_ascii_case("widening") || s.eq_ignore_ascii_case("full") {
      Ok(Self::Widening)
    } else {
      Err(UnknownStrategy::new())
    }
  }
}

impl FromStr for StateId {
  type Err = UnknownStrategy;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("native") || s.eq_ignore_ascii_case("u128") {
      Ok(Self::Native)
    } else if s.eq_ignore_ascii_case("limb") || s.eq_ignore_ascii_case("limbs") {
      Ok(Self::Limb)
    } else {
      Err(UnknownStrategy::new())
    }
  }
}

impl fmt::Display for OrderId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for MulId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for StateId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved configuration
// ─────────────────────────────────────────────────────────────────────────────

/// The configuration this crate was built with.
///
/// # Examples
///
/// ```
/// use fnvhash::config::FnvConfig;
///
/// let cfg = FnvConfig::current();
/// println!("{cfg}");
/// // Example output: "fnv1a/direct, 128: native/direct, x86_64 little-endian 64-bit"
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnvConfig {
  /// Ordering of all widths.
  pub order: OrderId,
  /// Multiply strategy of 32- and 64-bit states.
  pub mul: MulId,
  /// Representation of 128-bit states.
  pub state128: StateId,
  /// Multiply strategy of 128-bit states.
  pub mul128: MulId,
  /// Compilation target.
  pub target: Target,
}

impl FnvConfig {
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    let order = if cfg!(feature = "fnv1") { OrderId::Fnv1 } else { OrderId::Fnv1a };
    let mul = if cfg!(feature = "shift-mul") { MulId::ShiftAdd } else { MulId::Direct };
    let (state128, mul128) = if !cfg!(feature = "limb128") {
      (StateId::Native, mul)
    } else if cfg!(feature = "full-mul128") {
      (StateId::Limb, MulId::Widening)
    } else {
      (StateId::Limb, MulId::Sparse)
    };

    Self {
      order,
      mul,
      state128,
      mul128,
      target: Target::current(),
    }
  }

  /// Emit the active configuration as a `debug` log record.
  #[cfg(feature = "log")]
  pub fn log_active() {
    log::debug!(target: "fnvhash", "active configuration: {}", Self::current());
  }
}

impl fmt::Display for FnvConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}/{}, 128: {}/{}, {}",
      self.order, self.mul, self.state128, self.mul128, self.target
    )
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn ids_round_trip_through_names() {
    for id in [OrderId::Fnv1a, OrderId::Fnv1] {
      assert_eq!(id.as_str().parse::<OrderId>(), Ok(id));
    }
    for id in [MulId::Direct, MulId::ShiftAdd, MulId::Sparse, MulId::Widening] {
      assert_eq!(id.as_str().parse::<MulId>(), Ok(id));
    }
    for id in [StateId::Native, StateId::Limb] {
      assert_eq!(id.as_str().parse::<StateId>(), Ok(id));
    }
  }

  #[test]
  fn ids_match_policy_names() {
    assert_eq!(OrderId::Fnv1a.as_str(), Fnv1a::NAME);
    assert_eq!(OrderId::Fnv1.as_str(), Fnv1::NAME);
    assert_eq!(MulId::Direct.as_str(), <Direct as PrimeMul<u64>>::NAME);
    assert_eq!(MulId::ShiftAdd.as_str(), <ShiftAdd as PrimeMul<u64>>::NAME);
    assert_eq!(MulId::Sparse.as_str(), <Sparse as PrimeMul<U128>>::NAME);
    assert_eq!(MulId::Widening.as_str(), <Widening as PrimeMul<U128>>::NAME);
  }

  #[test]
  fn parsing_is_lenient_about_case_and_aliases() {
    assert_eq!(" FNV-1A ".parse::<OrderId>(), Ok(OrderId::Fnv1a));
    assert_eq!("normal".parse::<OrderId>(), Ok(OrderId::Fnv1));
    assert_eq!("bitshift".parse::<MulId>(), Ok(MulId::ShiftAdd));
    assert_eq!("Full".parse::<MulId>(), Ok(MulId::Widening));
    assert_eq!("u128".parse::<StateId>(), Ok(StateId::Native));
  }

  #[test]
  fn unknown_names_are_rejected() {
    assert_eq!("fnv0".parse::<OrderId>(), Err(UnknownStrategy::new()));
    assert_eq!("karatsuba".parse::<MulId>(), Err(UnknownStrategy::new()));
    assert_eq!("".parse::<StateId>(), Err(UnknownStrategy::new()));
  }

  #[test]
  fn current_matches_default_types() {
    let cfg = FnvConfig::current();
    assert_eq!(cfg.order.as_str(), DefaultOrder::NAME);
    assert_eq!(cfg.mul.as_str(), <DefaultMul as PrimeMul<u64>>::NAME);
    assert_eq!(cfg.mul128.as_str(), <DefaultMul128 as PrimeMul<State128>>::NAME);
    assert_eq!(cfg.target, Target::current());
  }

  #[test]
  fn display_lists_every_choice() {
    let cfg = FnvConfig {
      order: OrderId::Fnv1,
      mul: MulId::ShiftAdd,
      state128: StateId::Limb,
      mul128: MulId::Sparse,
      target: Target {
        arch: platform::Arch::S390x,
        endian: platform::Endian::Big,
        pointer_width: 64,
      },
    };
    assert_eq!(cfg.to_string(), "fnv1/shift-add, 128: limb/sparse, s390x big-endian 64-bit");
  }
}
