use hashbrown::HashMap as FastHashMap;

/// Captured parameter values keyed by parameter name.
pub type Params = FastHashMap<String, String>;

/// Constraint tags keyed by parameter name, present only for constrained parameters.
pub type Constraints = FastHashMap<String, String>;

/// Result of a successful lookup.
///
/// The trailing wildcard capture lives in `wildcard`; it is never mixed into `params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<V> {
    pub value: V,
    pub params: Params,
    pub constraints: Constraints,
    pub wildcard: Option<String>,
}

/// A lookup result borrowing its value from the tree.
pub type Match<'t, T> = RouteMatch<&'t T>;

impl<V> RouteMatch<V> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn constraint(&self, name: &str) -> Option<&str> {
        self.constraints.get(name).map(String::as_str)
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> RouteMatch<U> {
        RouteMatch {
            value: f(self.value),
            params: self.params,
            constraints: self.constraints,
            wildcard: self.wildcard,
        }
    }
}

impl<T: Clone> RouteMatch<&T> {
    pub fn cloned(self) -> RouteMatch<T> {
        self.map(T::clone)
    }
}
