use super::priority::{PriorityList, Rank};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Static = 0,
    Parameter = 1,
    Wildcard = 2,
}

/// Stable handle of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) kind: NodeKind,
    // static nodes only
    pub(crate) prefix: String,
    // parameter name, or the positional key of a wildcard
    pub(crate) param_name: String,
    pub(crate) constraint: String,
    // `Some` exactly when a pattern ends here
    pub(crate) value: Option<T>,
    // leaves in this subtree, this node included
    pub(crate) priority: usize,
    pub(crate) children: PriorityList<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new_static(prefix: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Static, prefix.into(), String::new(), String::new())
    }

    pub(crate) fn new_dynamic(kind: NodeKind, name: &str, constraint: &str) -> Self {
        Self::with_kind(kind, String::new(), name.to_string(), constraint.to_string())
    }

    fn with_kind(kind: NodeKind, prefix: String, param_name: String, constraint: String) -> Self {
        Self {
            kind,
            prefix,
            param_name,
            constraint,
            value: None,
            priority: 0,
            children: PriorityList::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    #[inline(always)]
    pub(crate) fn is_static(&self) -> bool {
        self.kind == NodeKind::Static
    }

    #[inline(always)]
    pub(crate) fn rank(&self) -> Rank {
        Rank::new(self.kind, self.priority)
    }

    pub(crate) fn first_char(&self) -> Option<char> {
        self.prefix.chars().next()
    }

    pub(crate) fn is_dynamic_match(&self, kind: NodeKind, name: &str, constraint: &str) -> bool {
        self.kind == kind && self.param_name == name && self.constraint == constraint
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new_static(String::new())
    }
}

/// Byte length of the longest common prefix of `a` and `b`, on a char boundary of both.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, left), right)| left != right)
        .map(|((index, _), _)| index)
        .unwrap_or_else(|| a.len().min(b.len()))
}
