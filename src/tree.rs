use crate::errors::TreeResult;
use crate::matcher::find_route;
use crate::pattern::compile_pattern;
use crate::radix::{NodeRef, RadixTree};
use crate::types::Match;

/// Pattern store with a registered-pattern counter.
///
/// ```
/// use bunner_radix_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.put("/user/{id<number>}/profile", "profile").expect("valid pattern");
///
/// let found = tree.find("/user/42/profile").expect("registered");
/// assert_eq!(*found.value, "profile");
/// assert_eq!(found.param("id"), Some("42"));
/// assert_eq!(found.constraint("id"), Some("number"));
/// ```
#[derive(Debug)]
pub struct Tree<T> {
    radix: RadixTree<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            radix: RadixTree::new(),
            size: 0,
        }
    }

    /// Registers `value` under `pattern`. A rejected pattern leaves the tree unchanged.
    pub fn put(&mut self, pattern: &str, value: T) -> TreeResult<()> {
        let compiled = compile_pattern(pattern)?;
        self.radix.insert(&compiled, value)?;
        self.size += 1;
        Ok(())
    }

    #[doc(alias = "match")]
    pub fn find(&self, path: &str) -> Option<Match<'_, T>> {
        find_route(&self.radix, path)
    }

    /// Unregisters `pattern`. Unknown or malformed patterns remove nothing.
    pub fn remove(&mut self, pattern: &str) -> bool {
        self.take(pattern).is_some()
    }

    /// Unregisters `pattern` and hands back its value.
    pub fn take(&mut self, pattern: &str) -> Option<T> {
        let compiled = compile_pattern(pattern).ok()?;
        let value = self.radix.remove(&compiled)?;
        self.size -= 1;
        Some(value)
    }

    #[doc(alias = "has")]
    pub fn contains(&self, pattern: &str) -> bool {
        compile_pattern(pattern).is_ok_and(|compiled| self.radix.contains(&compiled))
    }

    pub fn get(&self, pattern: &str) -> Option<&T> {
        let compiled = compile_pattern(pattern).ok()?;
        self.radix.get(&compiled)
    }

    pub fn get_mut(&mut self, pattern: &str) -> Option<&mut T> {
        let compiled = compile_pattern(pattern).ok()?;
        self.radix.get_mut(&compiled)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        tracing::event!(tracing::Level::TRACE, operation = "clear", size = self.size);
        self.radix = RadixTree::new();
        self.size = 0;
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        self.radix.root()
    }

    /// Live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.radix.node_count()
    }
}
