use super::node::NodeId;
use super::tree::RadixTree;
use crate::pattern::CompiledPattern;

impl<T> RadixTree<T> {
    /// Unregisters `pattern` and returns its value, pruning and folding the nodes
    /// that no longer carry anything.
    pub fn remove(&mut self, pattern: &CompiledPattern) -> Option<T> {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "remove",
            pattern = %pattern.source()
        );

        let chain = self.resolve_chain(pattern)?;
        let target = *chain.last()?;
        let value = self.arena[target].value.take()?;

        for &id in chain.iter() {
            let node = &mut self.arena[id];
            node.priority = node.priority.saturating_sub(1);
        }
        for &id in chain.iter().rev() {
            self.arena.resort_children(id);
        }

        // the root is never pruned, so walk (parent, node) pairs upward
        for pair in chain.windows(2).rev() {
            if !self.collapse(pair[0], pair[1]) {
                break;
            }
        }
        Some(value)
    }

    /// Prunes or folds `node`. Returns whether the parent should be examined next.
    fn collapse(&mut self, parent: NodeId, node: NodeId) -> bool {
        if self.arena[node].is_leaf() {
            return false;
        }

        match self.arena[node].children.len() {
            0 => {
                self.arena.detach(parent, node);
                self.arena.release(node);
                true
            }
            1 => {
                let Some(child) = self.arena[node].children.first() else {
                    return false;
                };
                if !self.arena[node].is_static() || !self.arena[child].is_static() {
                    return false;
                }
                let Some(index) = self.arena[parent].children.position(node) else {
                    return false;
                };
                let folded = self.arena.release(node);
                self.arena[child].prefix.insert_str(0, &folded.prefix);
                self.arena.replace_child(parent, index, child);
                false
            }
            _ => false,
        }
    }
}
