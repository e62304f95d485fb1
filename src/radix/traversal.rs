use super::alloc::Arena;
use super::node::{NodeId, NodeKind};

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Read-only view of a node and, through [`NodeRef::children`], of its subtree.
#[derive(Debug)]
pub struct NodeRef<'t, T> {
    arena: &'t Arena<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'t, T> NodeRef<'t, T> {
    pub(crate) fn new(arena: &'t Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub fn kind(&self) -> NodeKind {
        self.arena[self.id].kind
    }

    /// Stored literal of a Static node; empty for the root and dynamic nodes.
    pub fn prefix(&self) -> &'t str {
        &self.arena[self.id].prefix
    }

    pub fn param_name(&self) -> &'t str {
        &self.arena[self.id].param_name
    }

    pub fn constraint(&self) -> &'t str {
        &self.arena[self.id].constraint
    }

    pub fn priority(&self) -> usize {
        self.arena[self.id].priority
    }

    pub fn is_leaf(&self) -> bool {
        self.arena[self.id].is_leaf()
    }

    pub fn value(&self) -> Option<&'t T> {
        self.arena[self.id].value.as_ref()
    }

    /// Children in matching order.
    pub fn children(self) -> impl ExactSizeIterator<Item = NodeRef<'t, T>> + 't {
        let arena = self.arena;
        arena[self.id]
            .children
            .iter()
            .map(move |id| NodeRef::new(arena, id))
    }

    pub fn child(self, index: usize) -> Option<NodeRef<'t, T>> {
        let id = self.arena[self.id].children.get(index)?;
        Some(NodeRef::new(self.arena, id))
    }

    /// Pre-order depth-first visit of this subtree, siblings in matching order.
    /// Uses an explicit stack to avoid recursion on deep trees.
    pub fn walk<F>(&self, mut action: F)
    where
        F: FnMut(NodeRef<'t, T>, usize),
    {
        let mut stack: Vec<(NodeId, usize)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push((self.id, 0));

        while let Some((id, depth)) = stack.pop() {
            action(NodeRef::new(self.arena, id), depth);
            for child in self.arena[id].children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
}
