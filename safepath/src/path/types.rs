//! The [`Path`] value type: construction, appending, truncation and rendering.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::element;
use crate::spec::PathSpec;

/// A path built from validated literal elements.
///
/// A `Path` is an ordered list of elements plus an optional root marker. When
/// the root is set the path is absolute. Every stored element fully matches
/// the spec's element class and is never a relative token, so a rendered
/// `Path` can not contain `..` or `.` components.
///
/// Mutating operations change the path in place and return `&mut Self` so
/// calls can be chained. Use [`Clone`] or [`Path::join`] when an independent
/// copy is needed.
///
/// # Examples
///
/// ```
/// use safepath::Path;
/// use safepath::spec::UNIX;
///
/// let mut path = Path::with_default_root(&UNIX);
/// path.append("etc")?.append("ssh/sshd_config")?;
/// assert_eq!(path.to_string(), "/etc/ssh/sshd_config");
///
/// assert!(path.append("../shadow").is_err());
/// assert_eq!(path.to_string(), "/etc/ssh/sshd_config");
/// # Ok::<(), safepath::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    pub(crate) elements: Vec<String>,
    root: Option<String>,
    pub(crate) spec: &'static PathSpec,
}

/// Something that can be appended to a [`Path`].
///
/// Strings are split on the spec's separator; element lists are taken as
/// already split; paths contribute their elements and never their root.
#[derive(Debug, Clone)]
pub enum Segment<'a> {
    /// A separator-delimited string.
    Text(&'a str),
    /// A list of individual elements.
    Elements(Vec<&'a str>),
    /// Another path built with the same spec.
    Path(&'a Path),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [&'a str]> for Segment<'a> {
    fn from(elements: &'a [&'a str]) -> Self {
        Self::Elements(elements.to_vec())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Segment<'a> {
    fn from(elements: &'a [&'a str; N]) -> Self {
        Self::Elements(elements.to_vec())
    }
}

impl<'a> From<&'a [String]> for Segment<'a> {
    fn from(elements: &'a [String]) -> Self {
        Self::Elements(elements.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Segment<'a> {
    fn from(elements: &'a Vec<String>) -> Self {
        Self::from(elements.as_slice())
    }
}

impl<'a> From<&'a Path> for Segment<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl Path {
    /// Creates an empty relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::WINDOWS;
    ///
    /// let path = Path::new(&WINDOWS);
    /// assert!(!path.is_absolute());
    /// assert!(path.is_empty());
    /// assert_eq!(path.to_string(), "");
    /// ```
    #[must_use]
    pub fn new(spec: &'static PathSpec) -> Self {
        Self {
            elements: Vec::new(),
            root: None,
            spec,
        }
    }

    /// Creates an empty absolute path at the spec's default root.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::{UNIX, WINDOWS};
    ///
    /// assert_eq!(Path::with_default_root(&UNIX).to_string(), "/");
    /// assert_eq!(Path::with_default_root(&WINDOWS).to_string(), "C:\\");
    /// ```
    #[must_use]
    pub fn with_default_root(spec: &'static PathSpec) -> Self {
        Self {
            elements: Vec::new(),
            root: Some(spec.default_root().to_string()),
            spec,
        }
    }

    /// Parses a full absolute path string.
    ///
    /// The text before the first separator is the root marker; every later
    /// segment must be a literal element. A text consisting of the root marker
    /// and a single separator is the bare root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if the root marker is rejected by the
    /// spec, or [`Error::InvalidElement`] if any element is malformed or is a
    /// relative token.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::{UNIX, WINDOWS};
    ///
    /// let path = Path::parse("/var/www", &UNIX).unwrap();
    /// assert_eq!(path.elements(), ["var", "www"]);
    ///
    /// let path = Path::parse("D:\\Users", &WINDOWS).unwrap();
    /// assert_eq!(path.root(), Some("D:"));
    ///
    /// assert!(Path::parse("/var/../etc", &UNIX).is_err());
    /// assert!(Path::parse("var/www", &UNIX).is_err());
    /// ```
    pub fn parse(text: &str, spec: &'static PathSpec) -> Result<Self> {
        let mut parts = spec.split(text);
        let root = parts.next().unwrap_or_default();
        spec.validate_root(root)?;

        let rest: Vec<&str> = parts.collect();
        let elements = if rest == [""] {
            Vec::new()
        } else {
            element::validate_all(rest, spec)?
        };

        Ok(Self {
            elements,
            root: Some(root.to_string()),
            spec,
        })
    }

    /// Parses a relative path string made only of literal elements.
    ///
    /// The empty string is the empty relative path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] if any element is malformed or is a
    /// relative token.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::UNIX;
    ///
    /// let path = Path::parse_relative("ssh/sshd_config", &UNIX).unwrap();
    /// assert!(!path.is_absolute());
    /// assert_eq!(path.len(), 2);
    /// ```
    pub fn parse_relative(text: &str, spec: &'static PathSpec) -> Result<Self> {
        let mut path = Self::new(spec);
        path.append_segment(text)?;
        Ok(path)
    }

    /// The spec governing this path.
    #[must_use]
    pub fn spec(&self) -> &'static PathSpec {
        self.spec
    }

    /// The stored elements, in order.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The root marker, if the path is absolute.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if a root marker is set.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// Makes the path absolute at `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if the spec rejects the marker. The path
    /// keeps its previous root in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::{UNIX, WINDOWS};
    ///
    /// let mut path = Path::new(&WINDOWS);
    /// path.set_absolute("X:")?.append("Windows")?;
    /// assert_eq!(path.to_string(), "X:\\Windows");
    ///
    /// assert!(Path::new(&UNIX).set_absolute("X:").is_err());
    /// # Ok::<(), safepath::Error>(())
    /// ```
    pub fn set_absolute(&mut self, marker: &str) -> Result<&mut Self> {
        self.spec.validate_root(marker)?;
        self.root = Some(marker.to_string());
        Ok(self)
    }

    /// Makes the path relative by clearing the root marker.
    pub fn set_relative(&mut self) -> &mut Self {
        self.root = None;
        self
    }

    /// Appends a string, an element list or another path.
    ///
    /// Dispatches to [`append_segment`](Self::append_segment),
    /// [`append_elements`](Self::append_elements) or
    /// [`append_path`](Self::append_path).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] if any element is rejected, or
    /// [`Error::IncompatibleSpec`] when appending a path built with another
    /// spec. Nothing is appended on error.
    pub fn append<'a>(&mut self, segment: impl Into<Segment<'a>>) -> Result<&mut Self> {
        match segment.into() {
            Segment::Text(text) => self.append_segment(text),
            Segment::Elements(elements) => self.append_elements(elements),
            Segment::Path(other) => self.append_path(other),
        }
    }

    /// Splits `text` on the separator and appends every element.
    ///
    /// Appending the empty string leaves the path unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] on the first rejected element. No
    /// element of `text` is appended in that case.
    pub fn append_segment(&mut self, text: &str) -> Result<&mut Self> {
        if text.is_empty() {
            return Ok(self);
        }
        let validated = element::validate_all(self.spec.split(text), self.spec)?;
        self.elements.extend(validated);
        Ok(self)
    }

    /// Appends already-split elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] on the first rejected element. No
    /// element of the list is appended in that case.
    pub fn append_elements<I, S>(&mut self, elements: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validated = element::validate_all(elements, self.spec)?;
        self.elements.extend(validated);
        Ok(self)
    }

    /// Appends the elements of `other`, ignoring its root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSpec`] if `other` was built with a
    /// different spec.
    pub fn append_path(&mut self, other: &Path) -> Result<&mut Self> {
        self.ensure_same_spec(other)?;
        self.elements.extend(other.elements.iter().cloned());
        Ok(self)
    }

    /// Removes `levels` elements from the end of the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTraversal`] if `levels` exceeds the number of
    /// elements. The path is left unchanged; truncation never clamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::UNIX;
    ///
    /// let mut path = Path::parse("/etc/ssh/sshd_config", &UNIX)?;
    /// path.truncate(2)?;
    /// assert_eq!(path.to_string(), "/etc");
    ///
    /// assert!(path.truncate(2).is_err());
    /// assert_eq!(path.to_string(), "/etc");
    /// # Ok::<(), safepath::Error>(())
    /// ```
    pub fn truncate(&mut self, levels: usize) -> Result<&mut Self> {
        let len = self.elements.len();
        if levels > len {
            log::debug!("rejected truncation of {levels} levels from {self}");
            return Err(Error::PathTraversal {
                details: format!(
                    "cannot remove {levels} levels from a path with {len} elements"
                ),
            });
        }
        self.elements.truncate(len - levels);
        Ok(self)
    }

    /// Returns a copy of this path with `segment` appended.
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append). `self` is never modified.
    pub fn join<'a>(&self, segment: impl Into<Segment<'a>>) -> Result<Path> {
        let mut joined = self.clone();
        joined.append(segment)?;
        Ok(joined)
    }

    /// Returns a copy of this path without its last element, or `None` if the
    /// path has no elements.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        let mut parent = self.clone();
        parent.truncate(1).ok()?;
        Some(parent)
    }

    /// The last element, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.elements.last().map(String::as_str)
    }

    pub(crate) fn ensure_same_spec(&self, other: &Path) -> Result<()> {
        if self.spec == other.spec {
            return Ok(());
        }
        log::debug!(
            "rejected mixing specs {} and {}",
            self.spec.name(),
            other.spec.name()
        );
        Err(Error::IncompatibleSpec {
            expected: self.spec.name().to_string(),
            found: other.spec.name().to_string(),
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = [0; 4];
        let separator: &str = self.spec.separator().encode_utf8(&mut separator);

        if let Some(root) = &self.root {
            f.write_str(self.spec.render_root(root))?;
            f.write_str(separator)?;
        }
        f.write_str(&self.elements.join(separator))
    }
}

impl AsRef<[String]> for Path {
    fn as_ref(&self) -> &[String] {
        &self.elements
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
