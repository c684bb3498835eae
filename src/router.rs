// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

//! In-memory router for the installer views.
//!
//! Navigation is programmatic only: there is no address bar, so the history
//! is a plain stack with a cursor (abstract mode).

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Install,
    Uninstall,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Install, Route::Uninstall];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Install => "/install",
            Route::Uninstall => "/uninstall",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Install => "Install",
            Route::Uninstall => "Uninstall",
        }
    }

    fn from_path(path: &str) -> Option<Route> {
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    fn from_name(name: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

#[derive(Debug, Default)]
pub struct Router {
    stack: Vec<Route>,
    index: Option<usize>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a path ("/install") or a route name ("Install")
    pub fn resolve(&self, target: &str) -> Result<Route, RouteError> {
        let target = target.trim();
        let route = if target.starts_with('/') {
            Route::from_path(target)
        } else {
            Route::from_name(target)
        };
        route.ok_or_else(|| RouteError::Unknown(target.to_string()))
    }

    pub fn current(&self) -> Option<Route> {
        self.index.and_then(|i| self.stack.get(i).copied())
    }

    /// Number of entries in the history stack
    pub fn history_len(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, target: &str) -> Result<Route, RouteError> {
        let route = self.resolve(target)?;
        if self.current() == Some(route) {
            return Ok(route);
        }

        let next = self.index.map_or(0, |i| i + 1);
        self.stack.truncate(next);
        self.stack.push(route);
        self.index = Some(next);

        crate::debug::log(&format!("Router: push {} (history: {})", route.path(), self.history_len()));
        Ok(route)
    }

    pub fn replace(&mut self, target: &str) -> Result<Route, RouteError> {
        let route = self.resolve(target)?;
        if self.current() == Some(route) {
            return Ok(route);
        }

        match self.index {
            Some(i) => {
                self.stack.truncate(i);
                self.stack.push(route);
            }
            None => {
                self.stack.clear();
                self.stack.push(route);
                self.index = Some(0);
            }
        }

        crate::debug::log(&format!("Router: replace {}", route.path()));
        Ok(route)
    }

    /// Move `n` entries through history. Out-of-range moves are ignored.
    pub fn go(&mut self, n: isize) -> Option<Route> {
        let Some(i) = self.index else {
            return None;
        };
        let target = i.checked_add_signed(n).filter(|t| *t < self.stack.len())?;
        self.index = Some(target);
        self.current()
    }

    pub fn back(&mut self) -> Option<Route> {
        self.go(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_declared_paths() {
        let router = Router::new();
        assert_eq!(router.resolve("/"), Ok(Route::Home));
        assert_eq!(router.resolve("/install"), Ok(Route::Install));
        assert_eq!(router.resolve("/uninstall"), Ok(Route::Uninstall));
        assert_eq!(router.resolve("/install/"), Ok(Route::Install));
    }

    #[test]
    fn test_resolves_route_names() {
        let router = Router::new();
        assert_eq!(router.resolve("Home"), Ok(Route::Home));
        assert_eq!(router.resolve("Install"), Ok(Route::Install));
        assert_eq!(router.resolve("Uninstall"), Ok(Route::Uninstall));
    }

    #[test]
    fn test_unknown_route_leaves_history_untouched() {
        let mut router = Router::new();
        router.replace("/").unwrap();

        assert_eq!(
            router.push("/settings"),
            Err(RouteError::Unknown("/settings".to_string()))
        );
        assert_eq!(router.replace("install"), Err(RouteError::Unknown("install".to_string())));
        assert_eq!(router.current(), Some(Route::Home));
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn test_startup_replace_keeps_no_history() {
        let mut router = Router::new();
        assert_eq!(router.current(), None);

        router.replace("/").unwrap();
        assert_eq!(router.current(), Some(Route::Home));
        assert_eq!(router.history_len(), 1);
        assert_eq!(router.back(), None);
        assert_eq!(router.current(), Some(Route::Home));
    }

    #[test]
    fn test_push_then_back() {
        let mut router = Router::new();
        router.replace("/").unwrap();
        router.push("/install").unwrap();
        assert_eq!(router.history_len(), 2);

        assert_eq!(router.back(), Some(Route::Home));
        // Pushing from the middle of history drops forward entries
        router.push("Uninstall").unwrap();
        assert_eq!(router.history_len(), 2);
        assert_eq!(router.back(), Some(Route::Home));
        assert_eq!(router.go(1), Some(Route::Uninstall));
        assert_eq!(router.go(5), None);
    }

    #[test]
    fn test_replace_overwrites_current_entry() {
        let mut router = Router::new();
        router.replace("/").unwrap();
        router.push("/install").unwrap();
        router.replace("/uninstall").unwrap();

        assert_eq!(router.current(), Some(Route::Uninstall));
        assert_eq!(router.history_len(), 2);
        assert_eq!(router.back(), Some(Route::Home));
    }

    #[test]
    fn test_go_far_out_of_range_is_ignored() {
        let mut router = Router::new();
        router.replace("/").unwrap();
        router.push("/install").unwrap();

        assert_eq!(router.go(isize::MAX), None);
        assert_eq!(router.go(isize::MIN), None);
        assert_eq!(router.go(-2), None);
        assert_eq!(router.current(), Some(Route::Install));
        assert_eq!(router.go(-1), Some(Route::Home));
    }

    #[test]
    fn test_duplicate_navigation_is_noop() {
        let mut router = Router::new();
        router.replace("/").unwrap();
        router.push("/").unwrap();
        assert_eq!(router.history_len(), 1);
    }
}
