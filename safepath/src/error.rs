//! Error types for the safepath library.
//!
//! Every fallible path operation reports one of these variants to its
//! immediate caller. Validation always happens before a path is mutated, so
//! receiving an error means the receiver is unchanged.

use thiserror::Error;

/// Result type alias for operations that may fail with a safepath error.
///
/// # Examples
///
/// ```
/// use safepath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the safepath library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A path element failed the character-class check, or a relative token
    /// was supplied where only literal elements are allowed.
    #[error("invalid path element '{element}': {reason}")]
    InvalidElement {
        /// The rejected element.
        element: String,
        /// The reason the element was rejected.
        reason: String,
    },

    /// A root marker failed the platform's root rule.
    #[error("invalid root '{root}': {reason}")]
    InvalidRoot {
        /// The rejected root marker.
        root: String,
        /// The reason the root was rejected.
        reason: String,
    },

    /// An operation would move above the structural root or outside a base
    /// boundary.
    #[error("path traversal rejected: {details}")]
    PathTraversal {
        /// Details about the rejected traversal.
        details: String,
    },

    /// Two paths built with different specs were mixed.
    #[error("incompatible path specs: expected {expected}, found {found}")]
    IncompatibleSpec {
        /// The spec of the receiver.
        expected: String,
        /// The spec of the other operand.
        found: String,
    },

    /// A custom path spec would break the path invariants.
    #[error("invalid path spec: {reason}")]
    InvalidSpec {
        /// The reason the spec was rejected.
        reason: String,
    },

    /// A platform name was not recognized.
    #[error("unknown platform: {value}")]
    UnknownPlatform {
        /// The unrecognized value.
        value: String,
    },
}

impl Error {
    /// Check if error is a rejected traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use safepath::Error;
    ///
    /// let err = Error::PathTraversal { details: "escapes base".to_string() };
    /// assert!(err.is_traversal());
    /// ```
    #[must_use]
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Check if error is a rejected element.
    #[must_use]
    pub fn is_invalid_element(&self) -> bool {
        matches!(self, Self::InvalidElement { .. })
    }

    /// Check if error is a rejected root marker.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::InvalidRoot { .. })
    }

    /// Check if error comes from mixing specs.
    #[must_use]
    pub fn is_incompatible_spec(&self) -> bool {
        matches!(self, Self::IncompatibleSpec { .. })
    }
}
