//! Architecture, byte order, and pointer width of the compilation target.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  Arm,
  Riscv64,
  Riscv32,
  Powerpc64,
  S390x,
  Wasm32,
  #[default]
  Other,
}

impl Arch {
  /// Get the architecture for the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else if cfg!(target_arch = "arm") {
      Self::Arm
    } else if cfg!(target_arch = "riscv64") {
      Self::Riscv64
    } else if cfg!(target_arch = "riscv32") {
      Self::Riscv32
    } else if cfg!(target_arch = "powerpc64") {
      Self::Powerpc64
    } else if cfg!(target_arch = "s390x") {
      Self::S390x
    } else if cfg!(target_arch = "wasm32") {
      Self::Wasm32
    } else {
      Self::Other
    }
  }

  /// Returns the human-readable name for this architecture.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Arm => "arm",
      Self::Riscv64 => "riscv64",
      Self::Riscv32 => "riscv32",
      Self::Powerpc64 => "powerpc64",
      Self::S390x => "s390x",
      Self::Wasm32 => "wasm32",
      Self::Other => "other",
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte Order
// ─────────────────────────────────────────────────────────────────────────────

/// Byte order of multi-byte machine words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
  /// Least significant byte at the lowest address.
  Little,
  /// Most significant byte at the lowest address (s390x, some PowerPC and MIPS).
  Big,
}

impl Endian {
  /// Byte order of the compilation target.
  pub const NATIVE: Self = if cfg!(target_endian = "big") { Self::Big } else { Self::Little };

  #[inline]
  #[must_use]
  pub const fn is_native(self) -> bool {
    matches!((self, Self::NATIVE), (Self::Little, Self::Little) | (Self::Big, Self::Big))
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Little => "little-endian",
      Self::Big => "big-endian",
    }
  }
}

impl Default for Endian {
  #[inline]
  fn default() -> Self {
    Self::NATIVE
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Target Description
// ─────────────────────────────────────────────────────────────────────────────

/// Everything hashing code may know about the compilation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
  pub arch: Arch,
  pub endian: Endian,
  /// Width of `usize` in bits.
  pub pointer_width: u32,
}

impl Target {
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    Self {
      arch: Arch::current(),
      endian: Endian::NATIVE,
      pointer_width: usize::BITS,
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {} {}-bit",
      self.arch.name(),
      self.endian.as_str(),
      self.pointer_width
    )
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn native_endian_matches_cfg() {
    #[cfg(target_endian = "little")]
    assert_eq!(Endian::NATIVE, Endian::Little);
    #[cfg(target_endian = "big")]
    assert_eq!(Endian::NATIVE, Endian::Big);

    assert!(Endian::NATIVE.is_native());
    assert_eq!(Endian::default(), Endian::NATIVE);
  }

  #[test]
  fn exactly_one_endian_is_native() {
    assert_ne!(Endian::Little.is_native(), Endian::Big.is_native());
  }

  #[test]
  fn native_endian_agrees_with_word_layout() {
    let probe = 0x0102_0304u32.to_ne_bytes();
    let expected = if probe == [4, 3, 2, 1] { Endian::Little } else { Endian::Big };
    assert_eq!(Endian::NATIVE, expected);
  }

  #[test]
  fn arch_current_matches_cfg() {
    #[cfg(target_arch = "x86_64")]
    assert_eq!(Arch::current(), Arch::X86_64);
    #[cfg(target_arch = "aarch64")]
    assert_eq!(Arch::current(), Arch::Aarch64);
    assert!(!Arch::current().name().is_empty());
  }

  #[test]
  fn target_display() {
    let target = Target {
      arch: Arch::S390x,
      endian: Endian::Big,
      pointer_width: 64,
    };
    assert_eq!(target.to_string(), "s390x big-endian 64-bit");
  }

  #[test]
  fn current_pointer_width() {
    assert_eq!(Target::current().pointer_width, usize::BITS);
  }
}
