//! Run mode
//!
//! Development builds attach the diagnostics overlay; production builds
//! never draw it. The default follows the build profile and can be
//! overridden at startup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl Default for RunMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl RunMode {
    /// Parse a mode name. Returns None for anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn diagnostics_enabled(&self) -> bool {
        *self == Self::Development
    }
}
