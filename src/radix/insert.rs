use super::node::{Node, NodeId, NodeKind, common_prefix_len};
use super::tree::{Chain, RadixTree};
use super::{RadixError, RadixResult};
use crate::pattern::{CompiledPattern, Segment};

impl<T> RadixTree<T> {
    /// Registers `value` under `pattern`.
    ///
    /// Conflicts are detected by a read-only probe before any node is created or split,
    /// so an error leaves the tree untouched.
    pub fn insert(&mut self, pattern: &CompiledPattern, value: T) -> RadixResult<()> {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            pattern = %pattern.source(),
            segments = pattern.segments().len()
        );

        if let Err(err) = self.probe(pattern) {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "insert",
                pattern = %pattern.source(),
                error = %err,
                "registration rejected"
            );
            return Err(err);
        }

        self.commit(pattern, value);
        Ok(())
    }

    fn probe(&self, pattern: &CompiledPattern) -> RadixResult<()> {
        let mut scratch = Chain::new();
        let mut current = self.root;
        let last = pattern.segments().len().saturating_sub(1);

        for (index, segment) in pattern.segments().iter().enumerate() {
            let (kind, name, constraint) = match segment {
                Segment::Static(literal) => {
                    match self.locate_static(current, literal, &mut scratch) {
                        Some(id) => current = id,
                        // a split or a fresh node is needed, nothing below can collide
                        None => return Ok(()),
                    }
                    continue;
                }
                Segment::Parameter { name, constraint } => {
                    (NodeKind::Parameter, name.as_str(), constraint.as_str())
                }
                Segment::Wildcard { key } => (NodeKind::Wildcard, key.as_str(), ""),
            };

            let found = self.find_dynamic_child(current, kind, name, constraint);
            if index == last {
                return self.check_target(current, found, pattern);
            }
            match found {
                Some(id) => current = id,
                None => return Ok(()),
            }
        }

        if self.arena[current].is_leaf() {
            return Err(RadixError::PatternExists {
                pattern: pattern.source().to_string(),
            });
        }
        Ok(())
    }

    /// Duplicate and similarity checks for a dynamic terminal under `parent`.
    fn check_target(
        &self,
        parent: NodeId,
        found: Option<NodeId>,
        pattern: &CompiledPattern,
    ) -> RadixResult<()> {
        if let Some(id) = found
            && self.arena[id].is_leaf()
        {
            return Err(RadixError::PatternExists {
                pattern: pattern.source().to_string(),
            });
        }

        let similar = self.arena[parent].children.iter().any(|sibling| {
            Some(sibling) != found && !self.arena[sibling].is_static() && self.arena[sibling].is_leaf()
        });
        if similar {
            return Err(RadixError::SimilarPatternExists {
                pattern: pattern.source().to_string(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, pattern: &CompiledPattern, value: T) {
        let mut chain = Chain::new();
        chain.push(self.root);
        let mut current = self.root;

        for segment in pattern.segments() {
            current = match segment {
                Segment::Static(literal) => self.insert_static(current, literal, &mut chain),
                Segment::Parameter { name, constraint } => {
                    self.attach_dynamic(current, NodeKind::Parameter, name, constraint, &mut chain)
                }
                Segment::Wildcard { key } => {
                    self.attach_dynamic(current, NodeKind::Wildcard, key, "", &mut chain)
                }
            };
        }

        self.arena[current].value = Some(value);
        for &id in chain.iter() {
            self.arena[id].priority += 1;
        }
        for &id in chain.iter().rev() {
            self.arena.resort_children(id);
        }
    }

    fn insert_static(&mut self, from: NodeId, literal: &str, chain: &mut Chain) -> NodeId {
        let mut current = from;
        let mut rest = literal;

        loop {
            let Some((index, child)) = self.find_static_child(current, rest) else {
                let id = self.arena.alloc(Node::new_static(rest));
                self.arena.attach(current, id);
                chain.push(id);
                return id;
            };

            let shared = common_prefix_len(&self.arena[child].prefix, rest);
            current = if shared < self.arena[child].prefix.len() {
                self.split_static(current, index, child, shared)
            } else {
                child
            };
            chain.push(current);

            rest = &rest[shared..];
            if rest.is_empty() {
                return current;
            }
        }
    }

    /// Cuts `child` at byte offset `at`; the shared head becomes a new branch node in its slot.
    fn split_static(&mut self, parent: NodeId, index: usize, child: NodeId, at: usize) -> NodeId {
        let tail = self.arena[child].prefix.split_off(at);
        let head = std::mem::replace(&mut self.arena[child].prefix, tail);

        let mut branch = Node::new_static(head);
        branch.priority = self.arena[child].priority;
        let branch = self.arena.alloc(branch);

        self.arena.attach(branch, child);
        self.arena.replace_child(parent, index, branch);
        branch
    }

    fn attach_dynamic(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        constraint: &str,
        chain: &mut Chain,
    ) -> NodeId {
        let id = match self.find_dynamic_child(parent, kind, name, constraint) {
            Some(id) => id,
            None => {
                let id = self.arena.alloc(Node::new_dynamic(kind, name, constraint));
                self.arena.attach(parent, id);
                id
            }
        };
        chain.push(id);
        id
    }
}
