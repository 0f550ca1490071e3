//! Dashboard landing page model.

use crate::model::project::Project;
use crate::route::Route;
use std::fmt::{Display, Formatter};

pub const DASHBOARD_TITLE: &str = "Welcome to TaskNest";
pub const DASHBOARD_TAGLINE: &str =
    "The smart way to manage projects and collaborate with your team";

/// Labelled link to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardAction {
    pub label: String,
    pub route: Route,
}

/// Rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub create: DashboardAction,
    pub browse: DashboardAction,
}

/// Renders the dashboard. The project count is shown only when non-zero.
pub fn render_dashboard(projects: &[Project]) -> DashboardView {
    let browse_label = match projects.len() {
        0 => "View Projects".to_string(),
        count => format!("View Projects ({count})"),
    };
    DashboardView {
        title: DASHBOARD_TITLE,
        tagline: DASHBOARD_TAGLINE,
        create: DashboardAction {
            label: "Create New Project".to_string(),
            route: Route::CreateProject,
        },
        browse: DashboardAction {
            label: browse_label,
            route: Route::Projects,
        },
    }
}

impl Display for DashboardView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        for action in [&self.create, &self.browse] {
            writeln!(f, "  [{}] -> {}", action.label, action.route)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::render_dashboard;
    use crate::model::project::NewProject;
    use crate::route::Route;
    use crate::store::ProjectStore;

    #[test]
    fn count_hidden_while_no_projects() {
        let view = render_dashboard(&[]);
        assert_eq!(view.browse.label, "View Projects");
        assert_eq!(view.browse.route, Route::Projects);
        assert_eq!(view.create.label, "Create New Project");
        assert_eq!(view.create.route, Route::CreateProject);
    }

    #[test]
    fn count_shown_once_projects_exist() {
        let mut store = ProjectStore::new();
        store.add_project(NewProject::named("one"));
        store.add_project(NewProject::named("two"));

        let view = render_dashboard(store.projects());
        assert_eq!(view.browse.label, "View Projects (2)");
        assert!(view.to_string().contains("[View Projects (2)] -> /projects"));
    }
}
