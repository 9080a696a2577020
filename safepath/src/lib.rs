#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # safepath
//!
//! Traversal-safe, platform-aware path construction.
//!
//! A [`Path`] is built element by element from partially trusted input and
//! refuses anything that could escape an intended directory: relative tokens
//! in literal segments, illegal characters, malformed roots, truncation past
//! the root, and relative strings that resolve outside a caller-supplied base.
//!
//! No filesystem access happens here. The rendered string is meant to be
//! handed to whatever performs the I/O.
//!
//! ## Core Types
//!
//! - [`Path`]: the path value
//! - [`PathSpec`] and [`Platform`]: per-platform path syntax
//! - [`PathRelationship`]: containment between two paths
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use safepath::Path;
//! use safepath::spec::{UNIX, WINDOWS};
//!
//! let mut path = Path::with_default_root(&UNIX);
//! path.append("etc")?.append("ssh/sshd_config")?;
//! assert_eq!(path.to_string(), "/etc/ssh/sshd_config");
//!
//! let mut path = Path::new(&WINDOWS);
//! path.set_absolute("X:")?.append(&["Windows", "system32", "cmd.exe"])?;
//! assert_eq!(path.to_string(), "X:\\Windows\\system32\\cmd.exe");
//!
//! let mut upload = Path::parse("/var/www/app/upload/user1/obj1", &UNIX)?;
//! assert!(upload.resolve_relative("../../obj2", "/var/www/app/upload/user1").is_err());
//! # Ok::<(), safepath::Error>(())
//! ```

pub mod error;
pub mod path;
pub mod spec;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use path::{Base, ElementKind, Path, PathRelationship, Segment};
pub use spec::{PathSpec, PathSpecBuilder, Platform};
