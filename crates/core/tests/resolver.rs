use std::fs;

use glyph_core::cid::derive_cid;
use glyph_core::glyph::{glyph_path, Glyph};
use glyph_core::registry::{build_registry, RegistryError, StoreLayout};
use glyph_core::resolver::{Resolution, Resolver, VerifyOutcome};
use tempfile::tempdir;

const MIT_TEXT: &str = "MIT License\n\nPermission is hereby granted.\n";
const APACHE_TEXT: &str = "Apache License\nVersion 2.0\n";

/// Build a store with MIT and Apache-2.0 canonical texts and open a
/// resolver over its registry.
fn open_test_resolver() -> (tempfile::TempDir, Resolver) {
    let dir = tempdir().expect("tempdir");
    let layout = StoreLayout::new(dir.path());
    fs::create_dir_all(&layout.licenses_dir).expect("create licenses dir");
    fs::write(layout.licenses_dir.join("MIT.txt"), MIT_TEXT).expect("write MIT");
    fs::write(layout.licenses_dir.join("Apache-2.0.txt"), APACHE_TEXT).expect("write Apache");
    build_registry(&layout).expect("build");

    let resolver = Resolver::open(layout).expect("open resolver");
    (dir, resolver)
}

fn glyph_for_cid(cid: &str) -> Glyph {
    Glyph::parse(&format!("protocol: ipfs\ncid: {cid}\n"))
}

#[test]
fn resolves_registered_identifier_to_canonical_text() {
    let (_dir, resolver) = open_test_resolver();
    assert_eq!(resolver.registry().len(), 2);

    let glyph = glyph_for_cid(&derive_cid(MIT_TEXT.as_bytes()));
    let resolution = resolver.resolve(&glyph).expect("resolve");

    match resolution {
        Resolution::Verified { name, cid, protocol, text } => {
            assert_eq!(name, "MIT");
            assert_eq!(cid, derive_cid(MIT_TEXT.as_bytes()));
            assert_eq!(protocol, "ipfs");
            assert_eq!(text, MIT_TEXT);
        }
        other => panic!("expected verified resolution, got {other:?}"),
    }
}

#[test]
fn unknown_identifier_resolves_unverified_with_error() {
    let (_dir, resolver) = open_test_resolver();
    let glyph = glyph_for_cid("nonexistent-id");

    let resolution = resolver.resolve(&glyph).expect("resolve");

    assert!(!resolution.verified());
    match resolution {
        Resolution::Unverified { error, cid } => {
            assert_eq!(error, "License not found in registry");
            assert_eq!(cid, "nonexistent-id");
        }
        other => panic!("expected unverified resolution, got {other:?}"),
    }
}

/// A glyph with no cid field naturally resolves to nothing.
#[test]
fn glyph_without_identifier_resolves_unverified() {
    let (_dir, resolver) = open_test_resolver();
    let glyph = Glyph::parse("protocol: ipfs\n");

    let resolution = resolver.resolve(&glyph).expect("resolve");
    assert!(!resolution.verified());
}

/// A registered name whose canonical text disappeared is store corruption,
/// not an unverified resolution.
#[test]
fn missing_canonical_text_is_a_hard_error() {
    let dir = tempdir().expect("tempdir");
    let layout = StoreLayout::new(dir.path());
    fs::create_dir_all(&layout.licenses_dir).expect("create licenses dir");
    fs::write(layout.licenses_dir.join("MIT.txt"), MIT_TEXT).expect("write MIT");
    build_registry(&layout).expect("build");
    fs::remove_file(layout.licenses_dir.join("MIT.txt")).expect("remove text");

    let resolver = Resolver::open(layout).expect("open resolver");
    let glyph = glyph_for_cid(&derive_cid(MIT_TEXT.as_bytes()));

    assert!(resolver.resolve(&glyph).is_err());
}

#[test]
fn open_fails_without_registry_document() {
    let dir = tempdir().expect("tempdir");
    let layout = StoreLayout::new(dir.path());

    let err = Resolver::open(layout).expect_err("should fail");
    assert!(matches!(err, RegistryError::Missing { .. }), "unexpected error: {err:?}");
}

#[test]
fn verify_returns_false_without_glyph_file() {
    let (_dir, resolver) = open_test_resolver();
    let project = tempdir().expect("tempdir");

    let outcome = resolver.verify(project.path()).expect("verify");

    assert!(!outcome.verified());
    assert!(matches!(outcome, VerifyOutcome::MissingGlyph { .. }));
}

#[test]
fn verify_succeeds_for_valid_glyph() {
    let (_dir, resolver) = open_test_resolver();
    let project = tempdir().expect("tempdir");
    let cid = derive_cid(APACHE_TEXT.as_bytes());
    fs::write(glyph_path(project.path()), format!("protocol: ipfs\ncid: {cid}\nname: Apache-2.0\n"))
        .expect("write glyph");

    let outcome = resolver.verify(project.path()).expect("verify");

    assert!(outcome.verified());
    match outcome {
        VerifyOutcome::Resolved { resolution: Resolution::Verified { name, text, .. }, .. } => {
            assert_eq!(name, "Apache-2.0");
            assert_eq!(text, APACHE_TEXT);
        }
        other => panic!("expected verified outcome, got {other:?}"),
    }
}

#[test]
fn verify_reports_unverified_for_unknown_identifier() {
    let (_dir, resolver) = open_test_resolver();
    let project = tempdir().expect("tempdir");
    fs::write(glyph_path(project.path()), "protocol: ipfs\ncid: bafkreinotreal\n")
        .expect("write glyph");

    let outcome = resolver.verify(project.path()).expect("verify");

    assert!(!outcome.verified());
    assert!(matches!(
        outcome,
        VerifyOutcome::Resolved { resolution: Resolution::Unverified { .. }, .. }
    ));
}
