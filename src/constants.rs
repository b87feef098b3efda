//! Raw architecture identifiers.
//!
//! The values are stable and may be stored or sent over the wire by callers.

/// No architecture; never present in the table.
pub const ARCH_UNKNOWN: u32 = 0;
/// 32-bit Intel x86 (i686).
pub const ARCH_32BIT_INTEL_X86: u32 = 1;
/// 64-bit Intel x86 (x86_64).
pub const ARCH_64BIT_INTEL_X86: u32 = 2;
/// ARMv7, little endian.
pub const ARCH_ARMV7_LITTLE_ENDIAN: u32 = 3;
/// ARMv8 64-bit, little endian.
pub const ARCH_64BIT_ARMV8_LITTLE_ENDIAN: u32 = 4;
/// 32-bit PowerPC, big endian.
pub const ARCH_32BIT_POWERPC_BIG_ENDIAN: u32 = 5;
/// 64-bit PowerPC, big endian.
pub const ARCH_64BIT_POWERPC_BIG_ENDIAN: u32 = 6;
/// 64-bit PowerPC, little endian.
pub const ARCH_64BIT_POWERPC_LITTLE_ENDIAN: u32 = 7;

/// Personality tag for 32-bit execution mode.
pub const PER_LINUX32: &str = "linux32";
/// Personality tag for 64-bit execution mode.
pub const PER_LINUX64: &str = "linux64";

/// Convert an architecture id to its name, or `"unknown"`.
///
/// Use [`crate::arch::name_of`] when an unsupported id must be an error.
#[inline]
pub fn arch_to_str(arch: u32) -> &'static str {
    match arch {
        ARCH_32BIT_INTEL_X86 => "i686",
        ARCH_64BIT_INTEL_X86 => "x86_64",
        ARCH_ARMV7_LITTLE_ENDIAN => "armv7l",
        ARCH_64BIT_ARMV8_LITTLE_ENDIAN => "aarch64",
        ARCH_32BIT_POWERPC_BIG_ENDIAN => "ppc",
        ARCH_64BIT_POWERPC_BIG_ENDIAN => "ppc64",
        ARCH_64BIT_POWERPC_LITTLE_ENDIAN => "ppc64le",
        _ => "unknown",
    }
}
