//! Lookup options for name resolution
//!
//! Names coming out of `uname -m`, package managers and container manifests do
//! not always agree with the canonical table names. These options control how
//! forgiving a name lookup is.

/// Name matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only the canonical, case-sensitive name matches
    #[default]
    Strict,
    /// Case-insensitive, trims whitespace and accepts common aliases
    Permissive,
}

impl MatchMode {
    /// Check if this is permissive mode
    pub(crate) fn is_permissive(&self) -> bool {
        matches!(self, MatchMode::Permissive)
    }
}

/// Common lookup options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupOptions {
    /// The matching mode to use
    pub match_mode: MatchMode,
}

impl LookupOptions {
    /// Create new LookupOptions with default settings
    pub fn new() -> Self {
        Default::default()
    }

    /// Create LookupOptions with permissive mode enabled
    pub fn permissive() -> Self {
        LookupOptions {
            match_mode: MatchMode::Permissive,
        }
    }

    /// Set the matching mode
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}
