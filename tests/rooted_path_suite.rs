//! Behaviour of root-marker normalization across the input shapes seen in
//! stored paths: relative, absolute, dotted, doubled slashes and repeated
//! markers.

use tidbits::{ensure_root, remove_root, RootMarker, RootPrefix};

fn assert_all_ensure(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(ensure_root(input), *expected, "ensure_root({:?})", input);
    }
}

#[test]
fn leaves_absolute_rooted_paths_unchanged() {
    assert_all_ensure(&[("/efs/asdf/123", "/efs/asdf/123")]);
}

#[test]
fn adds_slash_to_marker_relative_paths() {
    assert_all_ensure(&[
        ("efs/asdf/123", "/efs/asdf/123"),
        ("./efs/asdf/123", "/efs/asdf/123"),
    ]);
}

#[test]
fn bare_roots_become_marker() {
    assert_all_ensure(&[
        ("", "/efs"),
        ("/", "/efs"),
        ("./", "/efs"),
        (".", "/efs"),
        ("/efs", "/efs"),
        ("/efs/", "/efs"),
        ("./efs/", "/efs"),
        ("efs", "/efs"),
    ]);
}

#[test]
fn prefixes_relative_and_seemingly_absolute_paths() {
    assert_all_ensure(&[
        ("asdf/123", "/efs/asdf/123"),
        ("/asdf/123/afa", "/efs/asdf/123/afa"),
        ("/efs/asdf/123/", "/efs/asdf/123"),
    ]);
}

#[test]
fn collapses_slash_runs_anywhere() {
    assert_all_ensure(&[
        ("/efs/asdf/123//afa", "/efs/asdf/123/afa"),
        ("/efs/asdf//123/afa", "/efs/asdf/123/afa"),
        ("//efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("/efs/asdf/123/afa//", "/efs/asdf/123/afa"),
        ("efs/asdf/123/afa//", "/efs/asdf/123/afa"),
        ("efs//asdf/123/afa/", "/efs/asdf/123/afa"),
        ("/efs//asdf//123//afa//", "/efs/asdf/123/afa"),
        ("//efs//asdf//123//afa//", "/efs/asdf/123/afa"),
        ("efs//asdf//123//afa//", "/efs/asdf/123/afa"),
        ("///efs///asdf///123///afa///", "/efs/asdf/123/afa"),
        ("//////////efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("/efs/asdf/123/afa//////////", "/efs/asdf/123/afa"),
        ("/efs/////asdf///123//afa//////////", "/efs/asdf/123/afa"),
        ("////efs//asdf/123/////afa////", "/efs/asdf/123/afa"),
    ]);
}

#[test]
fn removes_duplicate_leading_markers() {
    assert_all_ensure(&[
        ("/efs/efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("efs/efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("efs/efs/efs/efs/efs/efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("/efs/efs/efs/efs/efs/efs/asdf/123/afa", "/efs/asdf/123/afa"),
        ("efs//efs///efs/asdf", "/efs/asdf"),
    ]);
}

#[test]
fn leaves_later_marker_segments_alone() {
    assert_all_ensure(&[
        ("/efs/asdf/123/efs/afa", "/efs/asdf/123/efs/afa"),
        ("/efs/asdf/123/efsafa", "/efs/asdf/123/efsafa"),
        ("/efs/asdf/123/efsafa/zzz", "/efs/asdf/123/efsafa/zzz"),
        ("efsafa/zzz", "/efs/efsafa/zzz"),
    ]);
}

#[test]
fn ensure_output_is_canonical() {
    let inputs = [
        "", "/", "./", "a", "a/", "//a//b//", "./efs//efs/x/", "efs.txt", ".hidden/x",
    ];
    for input in inputs {
        let once = ensure_root(input);
        assert!(once.starts_with("/efs"), "{:?} -> {:?}", input, once);
        assert!(!once.contains("//"), "{:?} -> {:?}", input, once);
        assert!(once == "/efs" || !once.ends_with('/'), "{:?} -> {:?}", input, once);
        assert_eq!(ensure_root(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn remove_root_inverts_ensure_root() {
    for rest in ["a", "a/1/b", "efsafa/x", "x/efs/y"] {
        let rooted = ensure_root(rest);
        assert_eq!(remove_root(&rooted, RootPrefix::None), rest);
        assert_eq!(remove_root(&rooted, RootPrefix::Slash), format!("/{}", rest));
    }
}

#[test]
fn remove_root_examples() {
    let cases = [
        ("/", ""),
        ("./", ""),
        ("/efs", ""),
        ("efs/efs/a/1", "a/1"),
        ("/a/1/b", "a/1/b"),
        ("a/b/", "a/b/"),
        ("//efs//a//b", "a/b"),
        ("efs.txt", ".txt"),
        ("/efs.d/x", ".d/x"),
        (" /efs/a", "a"),
        ("/efs-d/x", "efs-d/x"),
    ];
    for (input, expected) in cases {
        assert_eq!(remove_root(input, RootPrefix::None), expected, "remove_root({:?})", input);
    }
}

#[test]
fn custom_marker_round_trip() {
    let marker = RootMarker::new("data").unwrap();
    assert_eq!(marker.ensure_root("./data//data/x/"), "/data/x");
    assert_eq!(marker.ensure_root("efs/x"), "/data/efs/x");
    assert_eq!(marker.remove_root("/data/x", RootPrefix::Slash), "/x");
}
