//! Routing module
//!
//! Maps request paths to views through an explicit, ordered route table with
//! a mandatory catch-all fallback.

mod table;

pub use table::{PathPattern, RouteTable, ViewFn};

use crate::views;

/// Route table for the application listener.
///
/// `/` renders the landing page; every other path falls through to the
/// `Page not found` view.
pub fn app_routes() -> RouteTable {
    RouteTable::new(views::not_found).route(PathPattern::exact("/"), views::landing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_landing() {
        let table = app_routes();
        let page = (table.resolve("/"))();
        assert_eq!(page.status, 200);
        assert!(page.body.contains("Likha Licensing Platform"));
    }

    #[test]
    fn test_other_paths_resolve_to_fallback() {
        let table = app_routes();
        for path in ["/pricing", "/xyz", "/a/b/c", "/index.html"] {
            let page = (table.resolve(path))();
            assert_eq!(page.status, 404, "path {path} should fall through");
            assert_eq!(page.body, "Page not found");
        }
    }

    #[test]
    fn test_resolution_carries_no_state() {
        let table = app_routes();
        let first = (table.resolve("/"))();
        let missed = (table.resolve("/pricing"))();
        let second = (table.resolve("/"))();
        assert_eq!(first, second);
        assert_eq!(missed.body, "Page not found");
    }
}
