//! Core logic for ProjectDeck.
//! This crate owns the project store and every rule applied to its data.

pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod route;
pub mod session;
pub mod store;
pub mod view;

pub use form::{FormError, FormField, PendingReset, ProjectDraft, ProjectForm};
pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_status, LogSettings,
};
pub use model::project::{NewProject, ParseOptionError, Priority, Project, ProjectId, Team};
pub use notify::{LogNotifier, Notifier, Toast, ToastQueue, ToastVariant};
pub use route::{Navigator, Route, Router};
pub use session::{Session, SessionConfig};
pub use store::{ProjectStore, SubscriptionId};
pub use view::dashboard::{render_dashboard, DashboardAction, DashboardView};
pub use view::format::BadgeTone;
pub use view::project_list::{
    render_project_list, LiveProjectList, PriorityBadge, ProjectCard, ProjectListView,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
