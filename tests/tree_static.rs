use bunner_radix_tree::{NodeKind, Tree};

fn child_prefixes<T>(tree: &Tree<T>) -> Vec<String> {
    tree.root()
        .children()
        .map(|child| child.prefix().to_string())
        .collect()
}

#[test]
fn tree_when_static_patterns_share_prefix_then_splits_and_matches_each() {
    let mut tree = Tree::new();
    tree.put("water", 1).expect("water should register");
    tree.put("slow", 2).expect("slow should register");
    tree.put("slower", 3).expect("slower should register");

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.find("water").map(|m| *m.value), Some(1));
    assert_eq!(tree.find("slow").map(|m| *m.value), Some(2));
    assert_eq!(tree.find("slower").map(|m| *m.value), Some(3));
    assert!(tree.find("slowe").is_none());
    assert!(tree.find("wat").is_none());
    assert!(tree.find("slowest").is_none());

    // "slow" carries two leaves and sorts ahead of "water"
    assert_eq!(child_prefixes(&tree), vec!["slow", "water"]);
    let slow = tree.root().child(0).expect("slow node");
    assert_eq!(slow.priority(), 2);
    assert_eq!(
        slow.children().map(|c| c.prefix().to_string()).collect::<Vec<_>>(),
        vec!["er"]
    );
}

#[test]
fn tree_when_literal_diverges_midway_then_creates_branch_node() {
    let mut tree = Tree::new();
    tree.put("water", "water").expect("water should register");
    tree.put("waste", "waste").expect("waste should register");

    assert_eq!(child_prefixes(&tree), vec!["wa"]);
    let branch = tree.root().child(0).expect("branch node");
    assert!(!branch.is_leaf());
    assert_eq!(branch.priority(), 2);
    let mut tails: Vec<String> = branch.children().map(|c| c.prefix().to_string()).collect();
    tails.sort();
    assert_eq!(tails, vec!["ste", "ter"]);
    assert!(tree.find("wa").is_none());
}

#[test]
fn tree_when_literal_is_prefix_of_existing_node_then_node_becomes_leaf_branch() {
    let mut tree = Tree::new();
    tree.put("/users/list", 1).expect("long pattern should register");
    tree.put("/users", 2).expect("short pattern should register");

    assert_eq!(child_prefixes(&tree), vec!["/users"]);
    let users = tree.root().child(0).expect("users node");
    assert!(users.is_leaf());
    assert_eq!(users.priority(), 2);
    assert_eq!(tree.find("/users").map(|m| *m.value), Some(2));
    assert_eq!(tree.find("/users/list").map(|m| *m.value), Some(1));
}

#[test]
fn tree_when_static_siblings_gain_leaves_then_higher_priority_sorts_first() {
    let mut tree = Tree::new();
    for pattern in ["/abc/1", "/abc/2", "/abc/3", "/edf/1", "/edf/2"] {
        tree.put(pattern, pattern).expect("pattern should register");
    }

    let slash = tree.root().child(0).expect("shared slash node");
    assert_eq!(slash.prefix(), "/");
    let order: Vec<(String, usize)> = slash
        .children()
        .map(|c| (c.prefix().to_string(), c.priority()))
        .collect();
    assert_eq!(order, vec![("abc/".to_string(), 3), ("edf/".to_string(), 2)]);

    tree.put("/edf/3", "/edf/3").expect("pattern should register");
    tree.put("/edf/4", "/edf/4").expect("pattern should register");

    let slash = tree.root().child(0).expect("shared slash node");
    let order: Vec<&str> = slash.children().map(|c| c.prefix()).collect();
    assert_eq!(order, vec!["edf/", "abc/"]);
    assert_eq!(slash.priority(), 7);
}

#[test]
fn tree_when_static_and_parameter_siblings_then_static_is_tried_first() {
    let mut tree = Tree::new();
    tree.put("/v1/{id}", "param").expect("param should register");
    tree.put("/v1/id", "static").expect("static should register");

    let v1 = tree.root().child(0).expect("v1 node");
    let kinds: Vec<NodeKind> = v1.children().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![NodeKind::Static, NodeKind::Parameter]);

    let found = tree.find("/v1/id").expect("static should match");
    assert_eq!(*found.value, "static");
    assert!(found.params.is_empty());

    let found = tree.find("/v1/42").expect("param should match");
    assert_eq!(*found.value, "param");
    assert_eq!(found.param("id"), Some("42"));
}

#[test]
fn tree_when_static_branch_fails_then_falls_back_to_parameter_sibling() {
    let mut tree = Tree::new();
    tree.put("/v1/{id}", "param").expect("param should register");
    tree.put("/v1/id", "static").expect("static should register");

    let found = tree.find("/v1/idx").expect("param should take over");
    assert_eq!(*found.value, "param");
    assert_eq!(found.param("id"), Some("idx"));
}

#[test]
fn tree_when_empty_pattern_registered_then_root_holds_value() {
    let mut tree = Tree::new();
    tree.put("", "root").expect("empty pattern should register");
    tree.put("/a", "a").expect("pattern should register");

    assert!(tree.root().is_leaf());
    assert_eq!(tree.find("").map(|m| *m.value), Some("root"));
    assert_eq!(tree.find("/a").map(|m| *m.value), Some("a"));
    assert!(tree.contains(""));

    assert!(tree.remove(""));
    assert!(tree.find("").is_none());
    assert_eq!(tree.size(), 1);
}

#[test]
fn tree_when_escaped_boundaries_registered_then_stored_literally() {
    let mut tree = Tree::new();
    tree.put("/v1/\\{id}", 1).expect("escaped brace should register");
    tree.put("/v1/\\*", 2).expect("escaped star should register");

    assert_eq!(tree.find("/v1/{id}").map(|m| *m.value), Some(1));
    assert_eq!(tree.find("/v1/*").map(|m| *m.value), Some(2));
    assert!(tree.find("/v1/42").is_none());
    assert!(tree.contains("/v1/\\{id}"));
}

#[test]
fn tree_when_get_mut_used_then_value_updated_in_place() {
    let mut tree = Tree::new();
    tree.put("/counter", 1).expect("pattern should register");

    *tree.get_mut("/counter").expect("registered") += 41;
    assert_eq!(tree.get("/counter"), Some(&42));
    assert!(tree.get("/count").is_none());
    assert!(tree.get("/{broken}x").is_none());
}

#[test]
fn tree_when_unicode_literals_share_lead_byte_then_split_on_char_boundary() {
    let mut tree = Tree::new();
    tree.put("/café", 1).expect("pattern should register");
    tree.put("/cafè", 2).expect("pattern should register");

    assert_eq!(tree.find("/café").map(|m| *m.value), Some(1));
    assert_eq!(tree.find("/cafè").map(|m| *m.value), Some(2));
    assert_eq!(child_prefixes(&tree), vec!["/caf"]);
}
