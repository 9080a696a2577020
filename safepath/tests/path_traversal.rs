//! Integration tests for bounded relative resolution.
//!
//! These tests drive `resolve_relative` with the kind of input an attacker
//! would send through an upload form or an API parameter, and verify that:
//! - results never leave the base path
//! - rejected input never mutates the path
//! - mixing specs is refused

mod common;

use common::{unix, windows};
use safepath::path::PathRelationship;
use safepath::spec::{PathSpecBuilder, Platform, UNIX};
use safepath::{Error, Path};

const UPLOADS: &str = "/var/www/app/upload/user1";

// =============================================================================
// Allowed resolutions
// =============================================================================

#[test]
fn test_sibling_object() {
    let mut p = unix("/var/www/app/upload/user1/obj1");
    p.resolve_relative("../obj2", UPLOADS).unwrap();
    assert_eq!(p.to_string(), "/var/www/app/upload/user1/obj2");
}

#[test]
fn test_noise_tokens_are_ignored() {
    let mut p = unix(UPLOADS);
    p.resolve_relative(".//./a/./b//", UPLOADS).unwrap();
    assert_eq!(p.to_string(), "/var/www/app/upload/user1/a/b");
}

#[test]
fn test_resolution_result_is_contained() {
    let base = unix(UPLOADS);
    let mut p = base.clone();
    p.resolve_relative("a/b/../c/./d", &base).unwrap();
    assert_eq!(
        PathRelationship::between(&base, &p).unwrap(),
        PathRelationship::Ancestor
    );
}

// =============================================================================
// Rejected resolutions
// =============================================================================

#[test]
fn test_escape_from_base() {
    let mut p = unix("/var/www/app/upload/user1/obj1");
    let err = p.resolve_relative("../../obj2", UPLOADS).unwrap_err();
    assert!(matches!(err, Error::PathTraversal { .. }));
    assert_eq!(p.to_string(), "/var/www/app/upload/user1/obj1");
}

#[test]
fn test_no_room_to_go_up() {
    let mut p = unix(UPLOADS);
    let err = p.resolve_relative("../x", UPLOADS).unwrap_err();
    assert!(matches!(err, Error::PathTraversal { .. }));
}

#[test]
fn test_classic_passwd_attack() {
    let mut p = unix(UPLOADS);
    for attack in [
        "../../../../../etc/passwd",
        "../../../../../../../../../../etc/passwd",
        "a/../../user2/secret",
        "./../user1x",
    ] {
        let err = p.resolve_relative(attack, UPLOADS).unwrap_err();
        assert!(err.is_traversal(), "{attack:?} gave {err:?}");
        assert_eq!(p.to_string(), UPLOADS);
    }
}

#[test]
fn test_encoded_and_illegal_input() {
    let mut p = unix(UPLOADS);
    for attack in ["..%2f..%2fetc", "..\\..\\etc", "~/.ssh", "a\0/../b", "a b"] {
        let err = p.resolve_relative(attack, UPLOADS).unwrap_err();
        assert!(err.is_invalid_element(), "{attack:?} gave {err:?}");
        assert_eq!(p.to_string(), UPLOADS);
    }
}

#[test]
fn test_base_from_another_spec() {
    let mut p = unix(UPLOADS);
    let err = p.resolve_relative("x", &windows("C:\\upload")).unwrap_err();
    assert!(matches!(err, Error::IncompatibleSpec { .. }));
}

#[test]
fn test_base_from_custom_spec() {
    let custom = PathSpecBuilder::new(Platform::Unix).build().unwrap();
    let base = Path::parse(UPLOADS, custom).unwrap();
    let mut p = Path::parse(UPLOADS, &UNIX).unwrap();
    assert!(p.resolve_relative("x", &base).unwrap_err().is_incompatible_spec());
}
