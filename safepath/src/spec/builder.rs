//! Builder for custom path specs.

use crate::error::{Error, Result};
use crate::spec::{PathSpec, Platform};

/// Builds a custom [`PathSpec`] starting from a platform's defaults.
///
/// Built specs live for the rest of the process, so a builder is meant to run
/// once per configuration (typically at startup), not per path.
///
/// # Examples
///
/// ```
/// use safepath::spec::{PathSpecBuilder, Platform};
/// use safepath::Path;
///
/// let spec = PathSpecBuilder::new(Platform::Unix)
///     .name("uploads")
///     .element_chars(|c| c.is_ascii_lowercase() || c == '.')
///     .build()
///     .unwrap();
///
/// let mut path = Path::with_default_root(spec);
/// assert!(path.append("avatars/me.png").is_ok());
/// assert!(path.append("Me.png").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathSpecBuilder {
    platform: Platform,
    name: String,
    separator: char,
    element_char: fn(char) -> bool,
    parent_tokens: Vec<String>,
    current_tokens: Vec<String>,
    default_root: String,
}

impl PathSpecBuilder {
    /// Creates a builder seeded with the built-in spec for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let base = PathSpec::for_platform(platform);
        Self {
            platform,
            name: format!("custom-{}", base.name),
            separator: base.separator,
            element_char: base.element_char,
            parent_tokens: base.parent_tokens.iter().map(|t| (*t).to_string()).collect(),
            current_tokens: base.current_tokens.iter().map(|t| (*t).to_string()).collect(),
            default_root: base.default_root.to_string(),
        }
    }

    /// Sets the name used in diagnostics.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the element separator.
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the predicate every character of a literal element must satisfy.
    #[must_use]
    pub fn element_chars(mut self, predicate: fn(char) -> bool) -> Self {
        self.element_char = predicate;
        self
    }

    /// Replaces the parent token spellings.
    #[must_use]
    pub fn parent_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the current token spellings.
    ///
    /// Leave the empty string in the set unless leading and doubled
    /// separators should be rejected during resolution.
    #[must_use]
    pub fn current_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the root marker used by [`Path::with_default_root`](crate::Path::with_default_root).
    #[must_use]
    pub fn default_root(mut self, root: impl Into<String>) -> Self {
        self.default_root = root.into();
        self
    }

    /// Validates the configuration and builds the spec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] if the separator is itself a valid
    /// element character, if a token contains the separator, if a token is
    /// both a parent and a current token, if `.` or `..` would pass as a
    /// literal element without being a token, or if the default root fails
    /// the platform's root rule.
    pub fn build(self) -> Result<&'static PathSpec> {
        self.validate()?;

        let spec = PathSpec {
            name: leak_str(self.name),
            platform: self.platform,
            separator: self.separator,
            element_char: self.element_char,
            parent_tokens: leak_tokens(self.parent_tokens),
            current_tokens: leak_tokens(self.current_tokens),
            default_root: leak_str(self.default_root),
        };
        log::debug!("built path spec {spec:?}");
        Ok(Box::leak(Box::new(spec)))
    }

    fn validate(&self) -> Result<()> {
        if (self.element_char)(self.separator) {
            return Err(invalid_spec(format!(
                "separator {:?} is also a valid element character",
                self.separator
            )));
        }

        for token in self.parent_tokens.iter().chain(&self.current_tokens) {
            if token.contains(self.separator) {
                return Err(invalid_spec(format!(
                    "token {token:?} contains the separator {:?}",
                    self.separator
                )));
            }
        }

        if let Some(token) = self
            .parent_tokens
            .iter()
            .find(|t| self.current_tokens.contains(*t))
        {
            return Err(invalid_spec(format!(
                "token {token:?} is both a parent and a current token"
            )));
        }

        // "." and ".." must never be storable as literal elements
        for spelling in ["..", "."] {
            let is_token = self
                .parent_tokens
                .iter()
                .chain(&self.current_tokens)
                .any(|t| t == spelling);
            if !is_token && spelling.chars().all(self.element_char) {
                return Err(invalid_spec(format!(
                    "{spelling:?} would be accepted as a literal element"
                )));
            }
        }

        self.platform
            .validate_root(&self.default_root)
            .map_err(|e| invalid_spec(format!("default root rejected: {e}")))
    }
}

fn invalid_spec(reason: String) -> Error {
    Error::InvalidSpec { reason }
}

fn leak_str(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn leak_tokens(tokens: Vec<String>) -> &'static [&'static str] {
    let tokens: Vec<&'static str> = tokens.into_iter().map(leak_str).collect();
    Box::leak(tokens.into_boxed_slice())
}
