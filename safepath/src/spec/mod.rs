//! Per-platform path syntax.
//!
//! A [`PathSpec`] describes everything a [`Path`](crate::Path) needs to know
//! about a platform's path syntax: the separator, which characters may appear
//! in an element, how the relative tokens are spelled and which root markers
//! are accepted.
//!
//! Two built-in specs are provided as process-wide constants, [`UNIX`] and
//! [`WINDOWS`]. Custom specs can be derived from either one with
//! [`PathSpecBuilder`].
//!
//! # Examples
//!
//! ```
//! use safepath::spec::{PathSpec, Platform, UNIX, WINDOWS};
//!
//! assert_eq!(UNIX.separator(), '/');
//! assert_eq!(WINDOWS.separator(), '\\');
//!
//! assert!(WINDOWS.validate_root("x:").is_ok());
//! assert!(UNIX.validate_root("x:").is_err());
//!
//! let spec = PathSpec::for_platform(Platform::Windows);
//! assert_eq!(spec.default_root(), "C:");
//! ```

mod builder;
mod platform;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;

pub use builder::PathSpecBuilder;
pub use platform::Platform;

/// The element character class shared by both built-in specs.
///
/// Accepts ASCII alphanumerics, `-`, `_` and `.`.
#[must_use]
pub fn is_portable_element_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

const PARENT_TOKENS: &[&str] = &[".."];
const CURRENT_TOKENS: &[&str] = &[".", ""];

/// Unix path syntax: `/` separator, empty root marker.
pub static UNIX: PathSpec = PathSpec {
    name: "unix",
    platform: Platform::Unix,
    separator: '/',
    element_char: is_portable_element_char,
    parent_tokens: PARENT_TOKENS,
    current_tokens: CURRENT_TOKENS,
    default_root: "",
};

/// Windows path syntax: `\` separator, drive letter root marker.
pub static WINDOWS: PathSpec = PathSpec {
    name: "windows",
    platform: Platform::Windows,
    separator: '\\',
    element_char: is_portable_element_char,
    parent_tokens: PARENT_TOKENS,
    current_tokens: CURRENT_TOKENS,
    default_root: "C:",
};

/// An immutable description of a platform's path syntax.
///
/// Specs are always handled as `&'static PathSpec`. Two specs are the same
/// spec only if they are the same instance; paths built with different
/// instances cannot be mixed.
pub struct PathSpec {
    pub(crate) name: &'static str,
    pub(crate) platform: Platform,
    pub(crate) separator: char,
    pub(crate) element_char: fn(char) -> bool,
    pub(crate) parent_tokens: &'static [&'static str],
    pub(crate) current_tokens: &'static [&'static str],
    pub(crate) default_root: &'static str,
}

impl PathSpec {
    /// Returns the built-in spec for `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> &'static PathSpec {
        match platform {
            Platform::Unix => &UNIX,
            Platform::Windows => &WINDOWS,
        }
    }

    /// Returns the spec matching the platform this crate was compiled for.
    #[must_use]
    pub fn native() -> &'static PathSpec {
        Self::for_platform(Platform::native())
    }

    /// A short name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The platform whose root rules this spec follows.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The character used to split and join elements.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The spellings meaning "go up one level".
    #[must_use]
    pub fn parent_tokens(&self) -> &'static [&'static str] {
        self.parent_tokens
    }

    /// The spellings meaning "stay at the current level".
    #[must_use]
    pub fn current_tokens(&self) -> &'static [&'static str] {
        self.current_tokens
    }

    /// The root marker used when a path is made absolute without naming one.
    #[must_use]
    pub fn default_root(&self) -> &'static str {
        self.default_root
    }

    /// Returns `true` if `element` fully matches the element character class.
    ///
    /// The empty string never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::spec::UNIX;
    ///
    /// assert!(UNIX.matches_element("sshd_config"));
    /// assert!(UNIX.matches_element(".."));
    /// assert!(!UNIX.matches_element(""));
    /// assert!(!UNIX.matches_element("a b"));
    /// ```
    #[must_use]
    pub fn matches_element(&self, element: &str) -> bool {
        !element.is_empty() && element.chars().all(self.element_char)
    }

    /// Returns `true` if `element` is a parent token such as `..`.
    #[must_use]
    pub fn is_parent_token(&self, element: &str) -> bool {
        self.parent_tokens.contains(&element)
    }

    /// Returns `true` if `element` is a current token such as `.` or the
    /// empty string.
    #[must_use]
    pub fn is_current_token(&self, element: &str) -> bool {
        self.current_tokens.contains(&element)
    }

    /// Validates a root marker against the platform rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`](crate::Error::InvalidRoot) if the
    /// marker is not acceptable for this platform.
    pub fn validate_root(&self, candidate: &str) -> Result<()> {
        self.platform.validate_root(candidate)
    }

    /// Renders a validated root marker as the prefix of an absolute path.
    #[must_use]
    pub fn render_root<'a>(&self, root: &'a str) -> &'a str {
        self.platform.render_root(root)
    }

    /// Splits `text` into raw elements.
    pub(crate) fn split<'a>(&self, text: &'a str) -> std::str::Split<'a, char> {
        text.split(self.separator)
    }
}

impl PartialEq for PathSpec {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for PathSpec {}

impl Hash for PathSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

impl fmt::Debug for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSpec")
            .field("name", &self.name)
            .field("platform", &self.platform)
            .field("separator", &self.separator)
            .field("parent_tokens", &self.parent_tokens)
            .field("current_tokens", &self.current_tokens)
            .field("default_root", &self.default_root)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
