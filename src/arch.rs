//! The architecture registry.
//!
//! A closed table of the architectures we know how to run, keyed by the raw
//! ids in [`crate::constants`]. Every row has a canonical name (as printed by
//! `uname -m`) and the Linux personality that selects its execution mode.
//!
//! ```rust
//! use archtab::arch::{self, Architecture, Personality};
//!
//! assert_eq!(arch::name_of(2).unwrap(), "x86_64");
//! assert_eq!(arch::id_of("aarch64").unwrap(), 4);
//! assert_eq!(arch::personality_of(5).unwrap(), "linux32");
//!
//! let ppc: Architecture = "ppc".parse().unwrap();
//! assert_eq!(ppc.personality(), Personality::Linux32);
//! ```

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::options::LookupOptions;

/// The execution-mode class of an architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Personality {
    /// `linux32`
    Linux32,
    /// `linux64`
    Linux64,
}

impl Personality {
    /// The personality tag, `linux32` or `linux64`
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Linux32 => PER_LINUX32,
            Personality::Linux64 => PER_LINUX64,
        }
    }

    pub fn is_64bit(&self) -> bool {
        matches!(self, Personality::Linux64)
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

/// A known architecture. The discriminant is the raw architecture id.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Architecture {
    /// 32-bit Intel x86
    X86 = ARCH_32BIT_INTEL_X86,
    /// 64-bit Intel x86
    X86_64 = ARCH_64BIT_INTEL_X86,
    /// ARMv7 little endian
    Armv7 = ARCH_ARMV7_LITTLE_ENDIAN,
    /// ARMv8 64-bit little endian
    Aarch64 = ARCH_64BIT_ARMV8_LITTLE_ENDIAN,
    /// 32-bit PowerPC big endian
    Ppc = ARCH_32BIT_POWERPC_BIG_ENDIAN,
    /// 64-bit PowerPC big endian
    Ppc64 = ARCH_64BIT_POWERPC_BIG_ENDIAN,
    /// 64-bit PowerPC little endian
    Ppc64le = ARCH_64BIT_POWERPC_LITTLE_ENDIAN,
}

struct Entry {
    arch: Architecture,
    name: &'static str,
    personality: Personality,
    endianness: Endianness,
    /// Extra spellings accepted by permissive lookups
    aliases: &'static [&'static str],
}

/// Ordered by id, starting at 1
const ARCHITECTURES: &[Entry] = &[
    Entry {
        arch: Architecture::X86,
        name: "i686",
        personality: Personality::Linux32,
        endianness: Endianness::Little,
        aliases: &["i386", "i486", "i586", "386", "x86"],
    },
    Entry {
        arch: Architecture::X86_64,
        name: "x86_64",
        personality: Personality::Linux64,
        endianness: Endianness::Little,
        aliases: &["amd64", "x64"],
    },
    Entry {
        arch: Architecture::Armv7,
        name: "armv7l",
        personality: Personality::Linux32,
        endianness: Endianness::Little,
        aliases: &["arm", "armv7", "armhf"],
    },
    Entry {
        arch: Architecture::Aarch64,
        name: "aarch64",
        personality: Personality::Linux64,
        endianness: Endianness::Little,
        aliases: &["arm64"],
    },
    Entry {
        arch: Architecture::Ppc,
        name: "ppc",
        personality: Personality::Linux32,
        endianness: Endianness::Big,
        aliases: &["powerpc"],
    },
    Entry {
        arch: Architecture::Ppc64,
        name: "ppc64",
        personality: Personality::Linux64,
        endianness: Endianness::Big,
        aliases: &["powerpc64"],
    },
    Entry {
        arch: Architecture::Ppc64le,
        name: "ppc64le",
        personality: Personality::Linux64,
        endianness: Endianness::Little,
        aliases: &["ppc64el", "powerpc64le"],
    },
];

const _: () = {
    let mut i = 0;
    while i < ARCHITECTURES.len() {
        assert!(ARCHITECTURES[i].arch as u32 == i as u32 + 1);
        i += 1;
    }
};

impl Entry {
    fn matches(&self, name: &str, opts: &LookupOptions) -> bool {
        if opts.match_mode.is_permissive() {
            let name = name.trim();
            self.name.eq_ignore_ascii_case(name)
                || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
        } else {
            self.name == name
        }
    }
}

fn find_by_id(id: u32) -> Result<&'static Entry> {
    match ARCHITECTURES.iter().find(|entry| entry.arch as u32 == id) {
        Some(entry) => Ok(entry),
        None => {
            debug!("no architecture with id {}", id);
            Err(Error::unsupported_id(id))
        }
    }
}

fn find_by_name(name: &str, opts: &LookupOptions) -> Result<&'static Entry> {
    match ARCHITECTURES.iter().find(|entry| entry.matches(name, opts)) {
        Some(entry) => Ok(entry),
        None => {
            debug!("no architecture named {:?} ({:?})", name, opts.match_mode);
            Err(Error::unsupported_name(name))
        }
    }
}

impl Architecture {
    /// Look up an architecture by its raw id
    pub fn from_id(id: u32) -> Result<Self> {
        find_by_id(id).map(|entry| entry.arch)
    }

    /// Look up an architecture by its canonical name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_with(name, &LookupOptions::default())
    }

    /// Look up an architecture by name, matching according to `opts`
    pub fn from_name_with(name: &str, opts: &LookupOptions) -> Result<Self> {
        find_by_name(name, opts).map(|entry| entry.arch)
    }

    /// Every known architecture, in id order
    pub fn all() -> impl ExactSizeIterator<Item = Architecture> + Clone {
        ARCHITECTURES.iter().map(|entry| entry.arch)
    }

    /// The architecture this crate was compiled for, if it is in the table
    pub fn host() -> Option<Self> {
        if cfg!(target_arch = "x86") {
            Some(Architecture::X86)
        } else if cfg!(target_arch = "x86_64") {
            Some(Architecture::X86_64)
        } else if cfg!(all(target_arch = "arm", target_endian = "little")) {
            Some(Architecture::Armv7)
        } else if cfg!(all(target_arch = "aarch64", target_endian = "little")) {
            Some(Architecture::Aarch64)
        } else if cfg!(all(target_arch = "powerpc", target_endian = "big")) {
            Some(Architecture::Ppc)
        } else if cfg!(all(target_arch = "powerpc64", target_endian = "big")) {
            Some(Architecture::Ppc64)
        } else if cfg!(all(target_arch = "powerpc64", target_endian = "little")) {
            Some(Architecture::Ppc64le)
        } else {
            None
        }
    }

    #[inline]
    fn entry(self) -> &'static Entry {
        &ARCHITECTURES[self as usize - 1]
    }

    /// The raw architecture id
    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }

    /// The canonical name, e.g. `x86_64`
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    #[inline]
    pub fn personality(self) -> Personality {
        self.entry().personality
    }

    #[inline]
    pub fn endianness(self) -> Endianness {
        self.entry().endianness
    }

    #[inline]
    pub fn is_64bit(self) -> bool {
        self.personality().is_64bit()
    }
}

impl TryFrom<u32> for Architecture {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        Architecture::from_id(id)
    }
}

impl From<Architecture> for u32 {
    fn from(arch: Architecture) -> u32 {
        arch.id()
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Architecture::from_name(name)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the canonical name of the architecture with raw id `arch`
pub fn name_of(arch: u32) -> Result<&'static str> {
    find_by_id(arch).map(|entry| entry.name)
}

/// Returns the raw id of the architecture with canonical name `name`
pub fn id_of(name: &str) -> Result<u32> {
    id_of_with(name, &LookupOptions::default())
}

/// Like [`id_of`], matching `name` according to `opts`
pub fn id_of_with(name: &str, opts: &LookupOptions) -> Result<u32> {
    find_by_name(name, opts).map(|entry| entry.arch.id())
}

/// Returns the personality tag (`linux32` or `linux64`) of the architecture
/// with raw id `arch`
pub fn personality_of(arch: u32) -> Result<&'static str> {
    find_by_id(arch).map(|entry| entry.personality.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Key;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn names_are_unique_and_non_empty() {
        let names: Vec<_> = Architecture::all().map(|a| a.name()).collect();
        assert_eq!(names.len(), 7);
        for (i, name) in names.iter().enumerate() {
            assert!(!name.is_empty());
            assert!(!names[i + 1..].contains(name), "duplicate name {}", name);
        }
    }

    #[test]
    fn aliases_do_not_shadow_other_names() {
        for entry in ARCHITECTURES {
            for alias in entry.aliases {
                for other in ARCHITECTURES {
                    assert!(!other.name.eq_ignore_ascii_case(alias), "{} shadows {}", alias, other.name);
                }
            }
        }
    }

    #[test]
    fn raw_lookups() {
        assert_eq!(name_of(ARCH_64BIT_INTEL_X86), Ok("x86_64"));
        assert_eq!(personality_of(ARCH_64BIT_INTEL_X86), Ok("linux64"));
        assert_eq!(id_of("aarch64"), Ok(ARCH_64BIT_ARMV8_LITTLE_ENDIAN));
        assert_eq!(personality_of(ARCH_64BIT_ARMV8_LITTLE_ENDIAN), Ok("linux64"));
        assert_eq!(name_of(ARCH_32BIT_POWERPC_BIG_ENDIAN), Ok("ppc"));
        assert_eq!(personality_of(ARCH_32BIT_POWERPC_BIG_ENDIAN), Ok("linux32"));
        assert_eq!(name_of(ARCH_32BIT_INTEL_X86), Ok("i686"));
        assert_eq!(name_of(ARCH_ARMV7_LITTLE_ENDIAN), Ok("armv7l"));
        assert_eq!(id_of("ppc64le"), Ok(ARCH_64BIT_POWERPC_LITTLE_ENDIAN));
    }

    #[test]
    fn unknown_id() {
        assert_eq!(name_of(ARCH_UNKNOWN), Err(Error::NotSupported(Key::Id(0))));
        assert_eq!(personality_of(ARCH_UNKNOWN), Err(Error::NotSupported(Key::Id(0))));
        assert_eq!(
            name_of(8).unwrap_err().to_string(),
            "Architecture isn't supported: 8"
        );
        assert!(Architecture::try_from(u32::MAX).is_err());
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            id_of("bogus"),
            Err(Error::NotSupported(Key::Name("bogus".into())))
        );
        assert!(id_of("").is_err());
        assert!(id_of("unknown").is_err());
    }

    #[test]
    fn strict_is_exact() {
        assert!(id_of("X86_64").is_err());
        assert!(id_of(" x86_64").is_err());
        assert!(id_of("amd64").is_err());
        assert!("arm64".parse::<Architecture>().is_err());
    }

    #[test]
    fn permissive_accepts_aliases() {
        let opts = LookupOptions::permissive();
        assert_eq!(id_of_with("X86_64", &opts), Ok(ARCH_64BIT_INTEL_X86));
        assert_eq!(id_of_with(" amd64 \n", &opts), Ok(ARCH_64BIT_INTEL_X86));
        assert_eq!(id_of_with("arm64", &opts), Ok(ARCH_64BIT_ARMV8_LITTLE_ENDIAN));
        assert_eq!(id_of_with("i386", &opts), Ok(ARCH_32BIT_INTEL_X86));
        assert_eq!(id_of_with("armhf", &opts), Ok(ARCH_ARMV7_LITTLE_ENDIAN));
        assert_eq!(
            Architecture::from_name_with("PPC64EL", &opts),
            Ok(Architecture::Ppc64le)
        );
        let err = id_of_with("sparc64", &opts).unwrap_err();
        assert_eq!(err.key(), &Key::Name("sparc64".into()));
    }

    #[test]
    fn typed_properties() {
        assert_eq!(Architecture::Ppc64.endianness(), Endianness::Big);
        assert_eq!(Architecture::Ppc64le.endianness(), Endianness::Little);
        assert!(Architecture::Aarch64.is_64bit());
        assert!(!Architecture::Armv7.is_64bit());
        assert_eq!(Architecture::X86.to_string(), "i686");
        assert_eq!(Personality::Linux64.to_string(), "linux64");
        assert_eq!(u32::from(Architecture::Ppc64le), 7);
    }

    #[test]
    fn personality_matches_width() {
        for arch in Architecture::all() {
            let personality = arch.personality();
            assert_eq!(personality_of(arch.id()), Ok(personality.as_str()));
            assert_eq!(personality.as_str() == PER_LINUX64, arch.is_64bit());
        }
    }

    #[test]
    fn host_is_consistent() {
        if let Some(host) = Architecture::host() {
            assert_eq!(Architecture::from_id(host.id()), Ok(host));
            #[cfg(target_arch = "x86_64")]
            assert_eq!(host, Architecture::X86_64);
            #[cfg(target_arch = "aarch64")]
            assert_eq!(host, Architecture::Aarch64);
        }
    }
}
