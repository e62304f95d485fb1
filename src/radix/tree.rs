use smallvec::SmallVec;

use super::alloc::Arena;
use super::node::{Node, NodeId, NodeKind, common_prefix_len};
use super::traversal::NodeRef;
use crate::pattern::{CompiledPattern, Segment};

/// Root-first node path collected while descending.
pub(crate) type Chain = SmallVec<[NodeId; 16]>;

#[derive(Debug)]
pub struct RadixTree<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: NodeId,
}

impl<T> Default for RadixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RadixTree<T> {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::default());
        Self { arena, root }
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(&self.arena, self.root)
    }

    /// Live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// The Static child whose prefix starts with the first character of `literal`.
    pub(crate) fn find_static_child(&self, parent: NodeId, literal: &str) -> Option<(usize, NodeId)> {
        let first = literal.chars().next()?;
        self.arena[parent]
            .children
            .iter()
            .enumerate()
            .take_while(|&(_, id)| self.arena[id].is_static())
            .find(|&(_, id)| self.arena[id].first_char() == Some(first))
    }

    pub(crate) fn find_dynamic_child(
        &self,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        constraint: &str,
    ) -> Option<NodeId> {
        self.arena[parent]
            .children
            .iter()
            .find(|&id| self.arena[id].is_dynamic_match(kind, name, constraint))
    }

    /// Follows `literal` along existing Static nodes without splitting anything.
    /// Returns the node where the literal ends exactly on a node boundary.
    pub(crate) fn locate_static(&self, from: NodeId, literal: &str, chain: &mut Chain) -> Option<NodeId> {
        let mut current = from;
        let mut rest = literal;
        while !rest.is_empty() {
            let (_, child) = self.find_static_child(current, rest)?;
            let prefix = self.arena[child].prefix.as_str();
            if common_prefix_len(prefix, rest) < prefix.len() {
                return None;
            }
            rest = &rest[prefix.len()..];
            chain.push(child);
            current = child;
        }
        Some(current)
    }

    /// Resolves the exact node chain a compiled pattern was (or would be) stored under.
    pub(crate) fn resolve_chain(&self, pattern: &CompiledPattern) -> Option<Chain> {
        let mut chain = Chain::new();
        chain.push(self.root);
        let mut current = self.root;
        for segment in pattern.segments() {
            current = match segment {
                Segment::Static(literal) => self.locate_static(current, literal, &mut chain)?,
                Segment::Parameter { name, constraint } => {
                    let id = self.find_dynamic_child(current, NodeKind::Parameter, name, constraint)?;
                    chain.push(id);
                    id
                }
                Segment::Wildcard { key } => {
                    let id = self.find_dynamic_child(current, NodeKind::Wildcard, key, "")?;
                    chain.push(id);
                    id
                }
            };
        }
        Some(chain)
    }

    pub(crate) fn lookup(&self, pattern: &CompiledPattern) -> Option<NodeId> {
        let chain = self.resolve_chain(pattern)?;
        let target = *chain.last()?;
        self.arena[target].is_leaf().then_some(target)
    }

    pub fn get(&self, pattern: &CompiledPattern) -> Option<&T> {
        let target = self.lookup(pattern)?;
        self.arena[target].value.as_ref()
    }

    pub fn get_mut(&mut self, pattern: &CompiledPattern) -> Option<&mut T> {
        let target = self.lookup(pattern)?;
        self.arena[target].value.as_mut()
    }

    pub fn contains(&self, pattern: &CompiledPattern) -> bool {
        self.lookup(pattern).is_some()
    }
}
