//! Single-element validation and classification.
//!
//! Two validators exist because elements reach a [`Path`](super::Path) in two
//! ways. Literal elements are committed to stored state and must never be a
//! relative token. Elements of an untrusted relative string may be tokens;
//! they are only checked for illegal characters before being classified.

use crate::error::{Error, Result};
use crate::spec::PathSpec;

/// How an element participates in relative resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A plain name that is pushed onto the path.
    Literal,
    /// A token that removes the last element, such as `..`.
    Parent,
    /// A token that leaves the path unchanged, such as `.` or the empty string.
    Current,
}

/// Validates an element that is about to be stored.
///
/// # Errors
///
/// Returns [`Error::InvalidElement`] if the element contains a character
/// outside the spec's element class, or if it is a parent or current token.
///
/// # Examples
///
/// ```
/// use safepath::path::element::validate_literal;
/// use safepath::spec::UNIX;
///
/// assert!(validate_literal("sshd_config", &UNIX).is_ok());
/// assert!(validate_literal("..", &UNIX).is_err());
/// assert!(validate_literal("?", &UNIX).is_err());
/// ```
pub fn validate_literal(element: &str, spec: &PathSpec) -> Result<()> {
    if spec.is_parent_token(element) || spec.is_current_token(element) {
        return Err(invalid_element(element, "relative elements are not allowed"));
    }
    if !spec.matches_element(element) {
        return Err(invalid_element(element, "invalid character in element name"));
    }
    Ok(())
}

/// Validates an element of an untrusted relative string.
///
/// Parent and current tokens are accepted; anything else must match the
/// element character class.
///
/// # Errors
///
/// Returns [`Error::InvalidElement`] on a character-class mismatch.
pub fn validate_relative(element: &str, spec: &PathSpec) -> Result<()> {
    if spec.matches_element(element)
        || spec.is_parent_token(element)
        || spec.is_current_token(element)
    {
        Ok(())
    } else {
        Err(invalid_element(element, "invalid character in element name"))
    }
}

/// Classifies an element that already passed [`validate_relative`].
///
/// # Examples
///
/// ```
/// use safepath::path::element::{classify, ElementKind};
/// use safepath::spec::WINDOWS;
///
/// assert_eq!(classify("..", &WINDOWS), ElementKind::Parent);
/// assert_eq!(classify("", &WINDOWS), ElementKind::Current);
/// assert_eq!(classify("cmd.exe", &WINDOWS), ElementKind::Literal);
/// ```
#[must_use]
pub fn classify(element: &str, spec: &PathSpec) -> ElementKind {
    if spec.is_parent_token(element) {
        ElementKind::Parent
    } else if spec.is_current_token(element) {
        ElementKind::Current
    } else {
        ElementKind::Literal
    }
}

/// Validates every element of `elements` as a literal, returning owned copies
/// only if all of them pass.
pub(crate) fn validate_all<I, S>(elements: I, spec: &PathSpec) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    elements
        .into_iter()
        .map(|e| {
            let e = e.as_ref();
            validate_literal(e, spec).map(|()| e.to_string())
        })
        .collect()
}

fn invalid_element(element: &str, reason: &str) -> Error {
    log::debug!("rejected path element {element:?}: {reason}");
    Error::InvalidElement {
        element: element.to_string(),
        reason: reason.to_string(),
    }
}
