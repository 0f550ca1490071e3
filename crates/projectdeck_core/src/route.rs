//! Route table and navigation contract.
//!
//! # Responsibility
//! - Map URL-like paths to the pages this session can mount.
//! - Provide the `Navigator` seam used by the form after submission.
//!
//! # Invariants
//! - `Route::parse(route.path())` yields `route` for every known route.
//! - Unknown paths resolve to `NotFound`, never to an error.

use log::debug;
use std::fmt::{Display, Formatter};

/// Pages mountable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Dashboard landing page.
    Home,
    /// Project list.
    Projects,
    /// Project creation form.
    CreateProject,
    /// Any other path, including links with no page behind them yet
    /// (`/tasks`, `/reports`, `/login`, `/register`).
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" => Self::Home,
            "/projects" => Self::Projects,
            "/create-project" => Self::CreateProject,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::CreateProject => "/create-project",
            Self::NotFound(path) => path.as_str(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Navigation collaborator.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// History-keeping router for a single session.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    /// Starts at the dashboard.
    pub fn new() -> Self {
        Self::starting_at(Route::Home)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: route,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Returns to the previous route. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        debug!(
            "event=navigate module=route status=ok from={} to={}",
            self.current, route
        );
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Route, Router};

    #[test]
    fn parse_known_paths_and_trailing_slash() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(Route::parse("/create-project"), Route::CreateProject);
    }

    #[test]
    fn navbar_links_without_pages_are_not_found() {
        for path in ["/tasks", "/reports", "/login", "/register"] {
            assert_eq!(Route::parse(path), Route::NotFound(path.to_string()));
        }
    }

    #[test]
    fn router_tracks_history_and_skips_self_navigation() {
        let mut router = Router::new();
        router.navigate(Route::CreateProject);
        router.navigate(Route::CreateProject);
        router.navigate(Route::Projects);

        assert_eq!(router.current(), &Route::Projects);
        assert_eq!(router.history_len(), 2);
        assert!(router.back());
        assert_eq!(router.current(), &Route::CreateProject);
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current(), &Route::Home);
    }
}
