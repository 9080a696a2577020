//! The closed set of platforms and their root rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A platform whose root syntax is known.
///
/// # Examples
///
/// ```
/// use safepath::spec::Platform;
///
/// let platform: Platform = "Windows".parse().unwrap();
/// assert_eq!(platform, Platform::Windows);
/// assert_eq!(platform.to_string(), "windows");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Absolute paths start with the separator; the root marker is empty.
    Unix,
    /// Absolute paths start with a drive letter followed by `:`.
    Windows,
}

impl Platform {
    /// Returns the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Validates a root marker.
    ///
    /// Unix accepts only the empty marker. Windows accepts a single ASCII
    /// letter in either case followed by `:`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] when the marker does not follow the
    /// platform rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::spec::Platform;
    ///
    /// assert!(Platform::Unix.validate_root("").is_ok());
    /// assert!(Platform::Unix.validate_root("C:").is_err());
    /// assert!(Platform::Windows.validate_root("d:").is_ok());
    /// assert!(Platform::Windows.validate_root("CD:").is_err());
    /// ```
    pub fn validate_root(self, candidate: &str) -> Result<()> {
        match self {
            Self::Unix if candidate.is_empty() => Ok(()),
            Self::Unix => Err(invalid_root(candidate, "unix root marker must be empty")),
            Self::Windows => match candidate.as_bytes() {
                [drive, b':'] if drive.is_ascii_alphabetic() => Ok(()),
                _ => Err(invalid_root(
                    candidate,
                    "windows root marker must be a drive letter followed by ':'",
                )),
            },
        }
    }

    /// Renders a root marker as the prefix of an absolute path.
    #[must_use]
    pub fn render_root(self, root: &str) -> &str {
        match self {
            Self::Unix => "",
            Self::Windows => root,
        }
    }
}

fn invalid_root(candidate: &str, reason: &str) -> Error {
    log::debug!("rejected root marker {candidate:?}: {reason}");
    Error::InvalidRoot {
        root: candidate.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unix" | "posix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::UnknownPlatform {
                value: s.to_string(),
            }),
        }
    }
}
