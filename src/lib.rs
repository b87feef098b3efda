//! # archtab
//!
//! A closed, process-wide table of the CPU architectures a Linux host may be
//! asked to run, with their canonical names and execution-mode personalities.
//!
//! Lookups work either on the raw `u32` ids in [`constants`] or on the typed
//! [`Architecture`]. Every miss is an [`error::Error::NotSupported`] carrying
//! the key that was asked for.
//!
//! # Example
//!
//! ```rust
//! use archtab::{arch, Architecture, LookupOptions};
//!
//! assert_eq!(arch::name_of(archtab::constants::ARCH_64BIT_INTEL_X86).unwrap(), "x86_64");
//! assert!(arch::name_of(archtab::constants::ARCH_UNKNOWN).is_err());
//!
//! // `uname -m` on a Raspberry Pi, a Debian architecture name
//! let pi = Architecture::from_name("armv7l").unwrap();
//! let deb = Architecture::from_name_with("armhf", &LookupOptions::permissive()).unwrap();
//! assert_eq!(pi, deb);
//! assert_eq!(pi.personality().as_str(), "linux32");
//! ```
//!
//! # Feature Usage
//!
//! `archtab` is engineered to be `no_std` compatible; it only needs `alloc`
//! to carry the offending name inside an error. The `std` feature (on by
//! default) adds the `std::error::Error` impl.
//!
//! Failed lookups are reported through the [`log`](https://docs.rs/log) facade
//! at debug level.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod arch;
pub mod constants;
pub mod error;
pub mod options;

pub use arch::{Architecture, Endianness, Personality};
pub use error::{Error, Result};
pub use options::{LookupOptions, MatchMode};
