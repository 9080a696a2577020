//! Shared helpers for integration tests.

#![allow(dead_code)]

use safepath::spec::{UNIX, WINDOWS};
use safepath::Path;

/// Parse an absolute Unix path, panicking on invalid input.
pub fn unix(text: &str) -> Path {
    Path::parse(text, &UNIX).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
}

/// Parse an absolute Windows path, panicking on invalid input.
pub fn windows(text: &str) -> Path {
    Path::parse(text, &WINDOWS).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
}

/// Inputs commonly seen in path injection attempts.
pub const HOSTILE_SEGMENTS: &[&str] = &[
    "..",
    ".",
    "../etc/passwd",
    "..\\..\\Windows",
    "~root",
    "$HOME",
    "a b",
    "a\0b",
    "a;rm -rf",
    "%2e%2e",
    "file?.txt",
    "*",
    "C:",
    "con|nul",
    "\u{202e}gpj.exe",
];
