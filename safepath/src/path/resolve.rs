//! Bounded resolution of untrusted relative strings.
//!
//! An untrusted string may contain `..` and `.` tokens. They are applied to a
//! scratch copy of the path's elements, and the copy is committed only if it
//! still lies inside the caller's base path. A string that climbs above the
//! base, even if it later descends back into it, is judged by where it ends.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::path::element::{classify, validate_relative, ElementKind};
use crate::path::relationship::is_prefix;
use crate::path::Path;

/// The boundary a relative resolution must stay inside.
#[derive(Debug, Clone, Copy)]
pub enum Base<'a> {
    /// An absolute path string, parsed with the receiver's spec.
    Text(&'a str),
    /// An already constructed path; must share the receiver's spec.
    Path(&'a Path),
}

impl<'a> From<&'a str> for Base<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Base<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Path> for Base<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl Path {
    /// Applies an untrusted relative string to this path, refusing any result
    /// outside `base`.
    ///
    /// `text` is split on the separator. Parent tokens remove the last
    /// element, current tokens (including the empty string) are skipped and
    /// everything else is appended. The result must have `base`'s elements as
    /// a prefix. The root of the path is never changed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidElement`] if a token contains an illegal character.
    /// - [`Error::PathTraversal`] if a parent token would remove an element
    ///   from an empty path, or if the result is outside `base`.
    /// - [`Error::PathTraversal`] if `base` is a relative path.
    /// - [`Error::IncompatibleSpec`] if `base` is a path built with another
    ///   spec.
    /// - [`Error::InvalidRoot`] or [`Error::InvalidElement`] if `base` is a
    ///   string that does not parse.
    ///
    /// The path is unchanged whenever an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::UNIX;
    ///
    /// let base = "/var/www/app/upload/user1";
    /// let mut path = Path::parse("/var/www/app/upload/user1/obj1", &UNIX)?;
    ///
    /// path.resolve_relative("../obj2", base)?;
    /// assert_eq!(path.to_string(), "/var/www/app/upload/user1/obj2");
    ///
    /// let err = path.resolve_relative("../../obj2", base).unwrap_err();
    /// assert!(err.is_traversal());
    /// assert_eq!(path.to_string(), "/var/www/app/upload/user1/obj2");
    /// # Ok::<(), safepath::Error>(())
    /// ```
    pub fn resolve_relative<'a>(
        &mut self,
        text: &str,
        base: impl Into<Base<'a>>,
    ) -> Result<&mut Self> {
        let base = match base.into() {
            Base::Text(text) => Cow::Owned(Path::parse(text, self.spec)?),
            Base::Path(path) => {
                self.ensure_same_spec(path)?;
                if !path.is_absolute() {
                    let details = format!("base path {:?} is not absolute", path.to_string());
                    return Err(traversal(text, details));
                }
                Cow::Borrowed(path)
            }
        };

        let tokens: Vec<&str> = self.spec.split(text).collect();
        for token in &tokens {
            validate_relative(token, self.spec)?;
        }

        let mut working = self.elements.clone();
        for token in tokens {
            match classify(token, self.spec) {
                ElementKind::Parent => {
                    if working.pop().is_none() {
                        return Err(traversal(
                            text,
                            "parent token applied to an empty path".to_string(),
                        ));
                    }
                }
                ElementKind::Current => {}
                ElementKind::Literal => working.push(token.to_string()),
            }
        }

        if !is_prefix(&base.elements, &working) {
            return Err(traversal(text, format!("result escapes base path {base}")));
        }

        log::trace!("resolved {text:?} against {base}");
        self.elements = working;
        Ok(self)
    }
}

fn traversal(text: &str, details: String) -> Error {
    log::debug!("rejected relative path {text:?}: {details}");
    Error::PathTraversal {
        details: format!("{text:?}: {details}"),
    }
}
