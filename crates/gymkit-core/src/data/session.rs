//! Session mode enumeration.
//!
//! A single mode drives the whole client; scanner and summary visibility
//! are derived from it rather than tracked as independent flags, so
//! impossible combinations (scanner and summary shown at once) cannot be
//! represented.

use serde::{Deserialize, Serialize};

/// Top-level mode of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Landing screen with plan selection
    Home,
    /// Interactive facility map
    Map,
    /// Scan overlay is active, session progress is suspended
    AwaitingScan,
    /// An exercise session is running (or ready for the next scan)
    Training,
    /// End-of-route summary
    Summary,
}

impl Mode {
    /// Whether the scan overlay is visible in this mode.
    pub fn scanner_visible(&self) -> bool {
        matches!(self, Mode::AwaitingScan)
    }

    /// Whether the summary sheet is visible in this mode.
    pub fn summary_visible(&self) -> bool {
        matches!(self, Mode::Summary)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Home
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Home => write!(f, "Home"),
            Mode::Map => write!(f, "Map"),
            Mode::AwaitingScan => write!(f, "AwaitingScan"),
            Mode::Training => write!(f, "Training"),
            Mode::Summary => write!(f, "Summary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_visibility_is_exclusive() {
        for mode in [
            Mode::Home,
            Mode::Map,
            Mode::AwaitingScan,
            Mode::Training,
            Mode::Summary,
        ] {
            assert!(!(mode.scanner_visible() && mode.summary_visible()));
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Mode::default(), Mode::Home);
    }
}
