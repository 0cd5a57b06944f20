//! Registration-time grammar and conflict-detection scenarios.

use trieroute::{InsertError, NodeKind, Router};

struct InsertTest(Vec<(&'static str, &'static str)>);

impl InsertTest {
    /// Registers every `(method, pattern)` pair in order under a fresh
    /// router, asserting each one succeeds.
    fn all_ok(patterns: &[&'static str]) {
        let mut router = Router::new();
        for pattern in patterns {
            router
                .insert("GET", *pattern, *pattern)
                .unwrap_or_else(|e| panic!("{pattern}: {e}"));
        }
    }
}

#[test]
fn mixed_static_parameter_and_catch_all() {
    InsertTest::all_ok(&[
        "/users",
        "/users/:id",
        "/users/:id/edit",
        "/static/*path",
        "/",
    ]);
}

#[test]
fn edge_splitting_on_partial_prefix_match() {
    // "/ab" and "/abc" share the prefix "/ab"; the second insertion
    // must split the existing "/ab" label without disturbing it.
    InsertTest::all_ok(&["/abc/def", "/abc/xyz", "/ab/def", "/ab/d", "/abx"]);
}

#[test]
fn parameter_round_trip_after_split() {
    let mut router = Router::new();
    router.insert("GET", "/a/:id", "show").unwrap();
    router.insert("GET", "/a/:id/edit", "edit").unwrap();
    router.insert("GET", "/ab/:id", "other_show").unwrap();

    assert_eq!(router.lookup_without_params("GET", "/a/7"), Some(&"show"));
    assert_eq!(router.lookup_without_params("GET", "/a/7/edit"), Some(&"edit"));
    assert_eq!(router.lookup_without_params("GET", "/ab/7"), Some(&"other_show"));
}

#[test]
fn re_registering_under_an_existing_catch_all_conflicts() {
    // "/a/*rest/more" re-descends into the already-registered "/*rest"
    // child (its label matches exactly), then tries to add a static
    // edge off of a catch-all node — a `Conflict`, not a malformed
    // pattern.
    let mut router = Router::new();
    router.insert("GET", "/a/*rest", "handler").unwrap();

    let err = router.insert("GET", "/a/*rest/more", "other").unwrap_err();
    match err {
        InsertError::Conflict(c) => assert_eq!(c.new_kind, NodeKind::Static),
        other => panic!("expected Conflict, got {other}"),
    }
}

#[test]
fn catch_all_with_trailing_segment_is_bad_pattern() {
    let mut router = Router::new();

    let err = router.insert("GET", "/a/*rest/more", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)), "{err}");
}

#[test]
fn static_sibling_of_catch_all_conflicts() {
    let mut router = Router::new();
    router.insert("GET", "/a/*rest", "handler").unwrap();

    let err = router.insert("GET", "/a/b", "other").unwrap_err();
    match err {
        InsertError::Conflict(c) => assert_eq!(c.new_kind, NodeKind::Static),
        other => panic!("expected Conflict, got {other}"),
    }
}

#[test]
fn parameter_sibling_of_catch_all_conflicts() {
    let mut router = Router::new();
    router.insert("GET", "/a/*rest", "handler").unwrap();

    let err = router.insert("GET", "/a/:id", "other").unwrap_err();
    match err {
        InsertError::Conflict(c) => assert_eq!(c.new_kind, NodeKind::Parameter),
        other => panic!("expected Conflict, got {other}"),
    }
}

#[test]
fn catch_all_sibling_of_static_conflicts() {
    // registered the other way around from the previous two tests.
    let mut router = Router::new();
    router.insert("GET", "/a/b", "handler").unwrap();

    let err = router.insert("GET", "/a/*rest", "other").unwrap_err();
    match err {
        InsertError::Conflict(c) => assert_eq!(c.new_kind, NodeKind::CatchAll),
        other => panic!("expected Conflict, got {other}"),
    }
}

#[test]
fn second_parameter_name_at_same_position_conflicts() {
    let mut router = Router::new();
    router.insert("GET", "/users/:id", "one").unwrap();

    let err = router.insert("GET", "/users/:name", "two").unwrap_err();
    match err {
        InsertError::Conflict(c) => assert_eq!(c.new_kind, NodeKind::Parameter),
        other => panic!("expected Conflict, got {other}"),
    }
}

#[test]
fn duplicate_pattern_conflicts() {
    let mut router = Router::new();
    router.insert("GET", "/a/b", "one").unwrap();

    let err = router.insert("GET", "/a/b", "two").unwrap_err();
    assert!(matches!(err, InsertError::Conflict(_)));
}

#[test]
fn empty_method_is_rejected() {
    let mut router = Router::new();
    let err = router.insert("", "/a", "handler").unwrap_err();
    assert!(matches!(err, InsertError::EmptyMethod));
}

#[test]
fn pattern_without_leading_slash_is_bad() {
    let mut router = Router::new();
    let err = router.insert("GET", "users", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)));
}

#[test]
fn unnamed_parameter_is_bad() {
    let mut router = Router::new();
    let err = router.insert("GET", "/users/:", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)));

    let err = router.insert("GET", "/users/:/", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)));
}

#[test]
fn unnamed_catch_all_is_bad() {
    let mut router = Router::new();
    let err = router.insert("GET", "/static/*", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)));
}

#[test]
fn second_wildcard_in_one_segment_is_bad() {
    let mut router = Router::new();
    let err = router.insert("GET", "/:a:b", "handler").unwrap_err();
    assert!(matches!(err, InsertError::BadPattern(_)));
}

#[test]
fn wildcard_embedded_mid_segment_is_allowed() {
    // `:`/`*` may appear anywhere in a pattern, not just right after a
    // `/` — so these must succeed and remain distinguishable.
    InsertTest::all_ok(&["/xy:id", "/xy:id/n"]);
}

#[test]
fn methods_are_independent_trees() {
    let mut router = Router::new();
    router.insert("GET", "/a", "get_a").unwrap();
    router.insert("POST", "/a", "post_a").unwrap();

    assert_eq!(router.lookup_without_params("GET", "/a"), Some(&"get_a"));
    assert_eq!(router.lookup_without_params("POST", "/a"), Some(&"post_a"));
}

#[test]
fn parameter_may_branch_on_a_following_slash() {
    InsertTest::all_ok(&["/a/:id", "/a/:id/edit", "/a/:id/delete"]);
}

#[test]
fn degenerate_root_parameter_pattern() {
    let mut router = Router::new();
    router.insert("GET", ":page", "handler").unwrap();
    assert_eq!(router.lookup_without_params("GET", "about"), Some(&"handler"));
}
