use std::borrow::Cow;

use parking_lot::RwLock;

use crate::errors::TreeResult;
use crate::path::{normalize_path, normalize_pattern};
use crate::pattern::PatternResult;
use crate::router::RouterOptions;
use crate::tree::Tree;
use crate::types::RouteMatch;

/// A [`Tree`] shared between threads: one writer at a time, concurrent readers.
#[derive(Debug)]
pub struct Router<T> {
    inner: RwLock<Tree<T>>,
    options: RouterOptions,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Router<T> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(Tree::new()),
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn add(&self, pattern: &str, value: T) -> TreeResult<()> {
        let pattern = self.prepare_pattern(pattern)?;
        let mut guard = self.inner.write();
        guard.put(&pattern, value)
    }

    pub fn remove(&self, pattern: &str) -> bool {
        let Ok(pattern) = self.prepare_pattern(pattern) else {
            return false;
        };
        let mut guard = self.inner.write();
        guard.remove(&pattern)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        let Ok(pattern) = self.prepare_pattern(pattern) else {
            return false;
        };
        self.inner.read().contains(&pattern)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Runs `f` against the tree under the read lock.
    pub fn with_tree<R>(&self, f: impl FnOnce(&Tree<T>) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    fn prepare_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self.options.normalization.as_ref() {
            Some(normalization) => Cow::Owned(normalize_path(path, normalization)),
            None => Cow::Borrowed(path),
        }
    }

    /// Normalizes literal runs only; parameter names and constraints pass through.
    fn prepare_pattern<'a>(&self, pattern: &'a str) -> PatternResult<Cow<'a, str>> {
        match self.options.normalization.as_ref() {
            Some(normalization) => Ok(Cow::Owned(normalize_pattern(pattern, normalization)?)),
            None => Ok(Cow::Borrowed(pattern)),
        }
    }
}

impl<T: Clone> Router<T> {
    #[doc(alias = "match")]
    pub fn find(&self, path: &str) -> Option<RouteMatch<T>> {
        let path = self.prepare_path(path);
        let guard = self.inner.read();
        guard.find(&path).map(RouteMatch::cloned)
    }
}
