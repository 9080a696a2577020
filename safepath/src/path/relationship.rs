//! Path containment and relationship checking.
//!
//! Relationships are decided purely by comparing element sequences position by
//! position. Roots are not compared, so `/etc` on Unix and the relative path
//! `etc` have the same elements.

use crate::error::Result;
use crate::path::Path;

/// Returns `true` if `prefix` is a position-wise prefix of `elements`.
pub(crate) fn is_prefix(prefix: &[String], elements: &[String]) -> bool {
    prefix.len() <= elements.len() && prefix.iter().zip(elements).all(|(a, b)| a == b)
}

impl Path {
    /// Returns `true` if `candidate` is this path or lies beneath it.
    ///
    /// Only elements are compared. Paths built with different specs are never
    /// contained in each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Path;
    /// use safepath::spec::UNIX;
    ///
    /// let ssh = Path::parse("/etc/ssh", &UNIX)?;
    /// let config = Path::parse("/etc/ssh/sshd_config", &UNIX)?;
    /// assert!(ssh.contains(&config));
    /// assert!(!config.contains(&ssh));
    ///
    /// let etc = Path::parse("/etc", &UNIX)?;
    /// let var_etc = Path::parse("/var/etc", &UNIX)?;
    /// assert!(!etc.contains(&var_etc));
    /// # Ok::<(), safepath::Error>(())
    /// ```
    #[must_use]
    pub fn contains(&self, candidate: &Path) -> bool {
        self.spec == candidate.spec && is_prefix(&self.elements, &candidate.elements)
    }
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use safepath::path::PathRelationship;
/// use safepath::Path;
/// use safepath::spec::UNIX;
///
/// let parent = Path::parse("/home/user", &UNIX)?;
/// let child = Path::parse("/home/user/project", &UNIX)?;
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child)?,
///     PathRelationship::Ancestor
/// );
/// # Ok::<(), safepath::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths have the same elements.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSpec`](crate::Error::IncompatibleSpec) if
    /// the paths were built with different specs.
    pub fn between(path1: &Path, path2: &Path) -> Result<Self> {
        path1.ensure_same_spec(path2)?;

        let (e1, e2) = (path1.elements(), path2.elements());
        Ok(if e1 == e2 {
            Self::Same
        } else if is_prefix(e1, e2) {
            Self::Ancestor
        } else if is_prefix(e2, e1) {
            Self::Descendant
        } else {
            Self::Unrelated
        })
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSpec`](crate::Error::IncompatibleSpec) if
    /// the paths were built with different specs.
    pub fn is_within(path: &Path, directory: &Path) -> Result<bool> {
        let rel = Self::between(path, directory)?;
        Ok(matches!(rel, Self::Descendant | Self::Same))
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
