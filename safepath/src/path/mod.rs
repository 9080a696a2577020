//! Traversal-safe path values.
//!
//! This module provides the [`Path`] type and the algorithms that keep it
//! safe to build from partially trusted input.
//!
//! # Key Concepts
//!
//! ## Literal elements
//!
//! Everything stored in a [`Path`] is a literal element: it matches the spec's
//! element character class and is not a relative token. Literal elements are
//! added with [`Path::append`] and friends, which reject `..`, `.` and any
//! illegal character.
//!
//! ## Bounded resolution
//!
//! Untrusted strings that may legitimately contain `..` go through
//! [`Path::resolve_relative`]. The tokens are applied to a scratch copy and
//! the copy is committed only if it stays inside a caller-supplied base path.
//!
//! ## Containment
//!
//! [`Path::contains`] and [`PathRelationship`] compare element sequences
//! position by position.
//!
//! # Examples
//!
//! ```
//! use safepath::Path;
//! use safepath::spec::UNIX;
//!
//! let uploads = Path::parse("/var/www/uploads", &UNIX)?;
//! let mut target = uploads.clone();
//! target.append("user1")?;
//!
//! // user-supplied, may contain relative tokens
//! target.resolve_relative("docs/../avatar.png", &uploads)?;
//! assert_eq!(target.to_string(), "/var/www/uploads/user1/avatar.png");
//!
//! assert!(target.resolve_relative("../../../../etc/passwd", &uploads).is_err());
//! # Ok::<(), safepath::Error>(())
//! ```

pub mod element;
pub mod relationship;
mod resolve;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use element::ElementKind;
pub use relationship::PathRelationship;
pub use resolve::Base;
pub use types::{Path, Segment};
