//! Route table
//!
//! Routes are matched in registration order; the first matching pattern wins.
//! A fallback view is required at construction time, so resolution is total:
//! every path selects exactly one view.

use crate::views::Page;

/// A view is a pure function from no input to a fixed page.
pub type ViewFn = fn() -> Page;

/// Path matching rule for a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches the path exactly. `/about` does not match `/about/`.
    Exact(String),
    /// Matches the prefix itself and any descendant path.
    Prefix(String),
    /// Matches every path.
    Wildcard,
}

impl PathPattern {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    pub fn prefix(path: impl Into<String>) -> Self {
        Self::Prefix(path.into())
    }

    /// Check whether `path` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Wildcard => true,
        }
    }
}

struct Route {
    pattern: PathPattern,
    view: ViewFn,
}

/// Ordered set of `(pattern, view)` pairs with a mandatory trailing wildcard
/// default.
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: ViewFn,
}

impl RouteTable {
    /// Create an empty table. `fallback` renders for any unmatched path.
    #[must_use]
    pub const fn new(fallback: ViewFn) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Append a route. Earlier registrations take precedence.
    #[must_use]
    pub fn route(mut self, pattern: PathPattern, view: ViewFn) -> Self {
        self.routes.push(Route { pattern, view });
        self
    }

    /// Number of registered routes, not counting the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Select the view for `path`: the first matching route in registration
    /// order, or the fallback when nothing matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> ViewFn {
        self.routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .map_or(self.fallback, |route| route.view)
    }
}
