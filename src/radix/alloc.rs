use std::ops::{Index, IndexMut};

use super::NodeId;
use super::node::Node;
use super::priority::Rank;

/// Index-addressed node storage. Released slots are recycled by later allocations.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(16),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.vacant.pop() {
            self.nodes[id.index()] = node;
            return id;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Resets the slot of a node that is no longer linked anywhere.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let node = std::mem::take(&mut self.nodes[id.index()]);
        self.vacant.push(id);
        node
    }

    #[inline]
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.vacant.len()
    }

    #[inline(always)]
    pub(crate) fn rank(&self, id: NodeId) -> Rank {
        self.nodes[id.index()].rank()
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        let mut children = std::mem::take(&mut self[parent].children);
        children.append([child], |id| self.rank(id));
        self[parent].children = children;
    }

    pub(crate) fn replace_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        let mut children = std::mem::take(&mut self[parent].children);
        children.replace(index, child, |id| self.rank(id));
        self[parent].children = children;
    }

    pub(crate) fn detach(&mut self, parent: NodeId, child: NodeId) -> bool {
        self[parent].children.remove(child)
    }

    pub(crate) fn resort_children(&mut self, parent: NodeId) {
        if self[parent].children.len() < 2 {
            return;
        }
        let mut children = std::mem::take(&mut self[parent].children);
        children.sort(|id| self.rank(id));
        self[parent].children = children;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}
