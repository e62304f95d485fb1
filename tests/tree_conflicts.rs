use bunner_radix_tree::{PatternError, RadixError, SyntaxViolation, Tree, TreeError};

#[test]
fn tree_when_duplicate_static_pattern_registered_then_returns_exists_error() {
    let mut tree = Tree::new();
    tree.put("/a/b", 1).expect("first pattern should register");

    let err = tree.put("/a/b", 2).expect_err("expected duplicate error");
    assert!(err.is_conflict());
    assert_eq!(err.to_string(), "pattern already exists");
    match err {
        TreeError::Radix(RadixError::PatternExists { pattern }) => assert_eq!(pattern, "/a/b"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(tree.get("/a/b"), Some(&1));
    assert_eq!(tree.size(), 1);
}

#[test]
fn tree_when_duplicate_wildcard_registered_then_returns_exists_error() {
    let mut tree = Tree::new();
    tree.put("/wild/*", 1).expect("first wildcard should register");

    match tree.put("/wild/*", 2).expect_err("expected duplicate error") {
        TreeError::Radix(RadixError::PatternExists { .. }) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tree_when_sibling_parameter_is_leaf_then_returns_similar_error() {
    let mut tree = Tree::new();
    tree.put("/user/{id}", 1).expect("pattern should register");
    tree.put("/user/{id}/*", 2).expect("pattern should register");
    let nodes_before = tree.node_count();

    let err = tree.put("/user/{type}", 3).expect_err("expected similar error");
    assert_eq!(err.to_string(), "a similar pattern already exists.");
    match err {
        TreeError::Radix(RadixError::SimilarPatternExists { pattern }) => {
            assert_eq!(pattern, "/user/{type}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(tree.size(), 2);
    assert_eq!(tree.node_count(), nodes_before);
    assert!(!tree.contains("/user/{type}"));
}

#[test]
fn tree_when_parameter_differs_only_by_constraint_then_returns_similar_error() {
    let mut tree = Tree::new();
    tree.put("/a/{id<int>}", 1).expect("pattern should register");

    match tree.put("/a/{id<uuid>}", 2).expect_err("expected similar error") {
        TreeError::Radix(RadixError::SimilarPatternExists { .. }) => {}
        other => panic!("unexpected error: {other:?}"),
    }
    match tree.put("/a/*", 3).expect_err("expected similar error") {
        TreeError::Radix(RadixError::SimilarPatternExists { .. }) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tree_when_sibling_parameter_is_not_leaf_then_registration_succeeds() {
    let mut tree = Tree::new();
    tree.put("/user/{id}/posts", 1).expect("pattern should register");
    tree.put("/user/{name}", 2).expect("non-leaf sibling does not conflict");
    tree.put("/user/{id}/likes", 3).expect("pattern should register");
    assert_eq!(tree.size(), 3);
}

#[test]
fn tree_when_adjacent_parameters_then_returns_syntax_error() {
    let mut tree: Tree<u8> = Tree::new();
    let err = tree.put("/at/{year}{month}", 1).expect_err("expected syntax error");
    assert!(err.is_syntax());
    match &err {
        TreeError::Pattern(PatternError::InvalidSyntax {
            pattern,
            position,
            reason,
        }) => {
            assert_eq!(pattern, "/at/{year}{month}");
            assert_eq!(*position, 10);
            assert_eq!(*reason, SyntaxViolation::ParameterNotDelimited);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Invalid pattern syntax in pattern '/at/{year}{month}'. The 10th character is incorrect; Named parameters must be separated by \"-\", \".\", \"/\"."
    );
    assert!(tree.is_empty());
}

#[test]
fn tree_when_parameter_followed_by_escaped_delimiter_then_returns_syntax_error() {
    let mut tree: Tree<u8> = Tree::new();
    match tree
        .put("/v1/{name}\\-\\.js", 1)
        .expect_err("expected syntax error")
    {
        TreeError::Pattern(err) => {
            assert_eq!(err.position(), 10);
            assert_eq!(err.reason(), SyntaxViolation::ParameterNotDelimited);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tree_when_wildcard_is_not_last_then_returns_syntax_error() {
    let mut tree: Tree<u8> = Tree::new();
    let err = tree.put("/user/*/avatar", 1).expect_err("expected syntax error");
    assert_eq!(
        err.to_string(),
        "Invalid pattern syntax in pattern '/user/*/avatar'. The 7th character is incorrect; a '*' must be the last character."
    );
    match err {
        TreeError::Pattern(err) => assert_eq!(err.reason(), SyntaxViolation::WildcardNotLast),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tree_when_put_fails_then_malformed_pattern_is_never_found() {
    let mut tree: Tree<u8> = Tree::new();
    tree.put("/ok", 1).expect("pattern should register");
    let nodes_before = tree.node_count();

    assert!(tree.put("/ok/*/x", 2).is_err());
    assert!(!tree.remove("/ok/*/x"));
    assert!(!tree.contains("/ok/*/x"));
    assert_eq!(tree.node_count(), nodes_before);
    assert_eq!(tree.size(), 1);
}
