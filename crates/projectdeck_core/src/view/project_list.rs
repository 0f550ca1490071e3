//! Project list page model.
//!
//! # Responsibility
//! - Turn the store's project slice into presentation-ready cards.
//! - Keep a live rendering bound to store updates.
//!
//! # Invariants
//! - Cards appear in store order; no sorting is applied.
//! - Rendering reads projects only; it never holds a mutable copy.

use crate::model::project::{Project, ProjectId};
use crate::route::Route;
use crate::store::{ProjectStore, SubscriptionId};
use crate::view::format::{
    capitalize_first, format_long_date, format_short_date, preview_description, BadgeTone,
};
use log::warn;
use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub const EMPTY_HEADING: &str = "No projects yet";
pub const EMPTY_ACTION_LABEL: &str = "Create Your First Project";

/// Priority label with its color coding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityBadge {
    pub label: String,
    pub tone: BadgeTone,
}

/// One rendered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub due_label: Option<String>,
    pub team_label: Option<String>,
    pub priority_badge: Option<PriorityBadge>,
    pub created_label: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.name.clone(),
            description: preview_description(project.description.as_deref()),
            due_label: project
                .due_date
                .map(|date| format!("Due: {}", format_long_date(date))),
            team_label: project
                .team
                .map(|team| format!("{} Team", capitalize_first(team.as_str()))),
            priority_badge: project.priority.map(|priority| PriorityBadge {
                label: capitalize_first(priority.as_str()),
                tone: BadgeTone::for_priority(priority),
            }),
            created_label: format!("Created {}", format_short_date(project.created_at)),
        }
    }
}

/// Rendered state of the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListView {
    /// Call-to-action shown instead of an empty grid.
    Empty {
        heading: &'static str,
        action_label: &'static str,
        action_route: Route,
    },
    Grid(Vec<ProjectCard>),
}

impl ProjectListView {
    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Grid(cards) => cards.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Renders the list page for the given projects.
pub fn render_project_list(projects: &[Project]) -> ProjectListView {
    if projects.is_empty() {
        return ProjectListView::Empty {
            heading: EMPTY_HEADING,
            action_label: EMPTY_ACTION_LABEL,
            action_route: Route::CreateProject,
        };
    }
    ProjectListView::Grid(projects.iter().map(ProjectCard::from_project).collect())
}

impl Display for ProjectListView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty {
                heading,
                action_label,
                action_route,
            } => {
                writeln!(f, "{heading}")?;
                writeln!(f, "[{action_label}] -> {action_route}")
            }
            Self::Grid(cards) => {
                for card in cards {
                    writeln!(f, "{}  ({})", card.title, card.id)?;
                    writeln!(f, "  {}", card.description)?;
                    if let Some(due) = &card.due_label {
                        writeln!(f, "  {due}")?;
                    }
                    if let Some(team) = &card.team_label {
                        writeln!(f, "  Team: {team}")?;
                    }
                    if let Some(badge) = &card.priority_badge {
                        write!(f, "  [{}:{}] ", badge.label, badge.tone.as_str())?;
                    } else {
                        write!(f, "  ")?;
                    }
                    writeln!(f, "{}", card.created_label)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug)]
struct LiveState {
    view: RefCell<Rc<ProjectListView>>,
    renders: Cell<usize>,
}

/// List view kept current by a store subscription.
///
/// Readers get `Rc` snapshots, so holding a rendering across a store
/// mutation never blocks the re-render.
#[derive(Debug, Clone)]
pub struct LiveProjectList {
    state: Rc<LiveState>,
    subscription: SubscriptionId,
}

impl LiveProjectList {
    /// Renders the current list and re-renders on every store mutation.
    pub fn bind(store: &mut ProjectStore) -> Self {
        let state = Rc::new(LiveState {
            view: RefCell::new(Rc::new(render_project_list(store.projects()))),
            renders: Cell::new(1),
        });
        let observer = Rc::clone(&state);
        let subscription = store.subscribe(move |projects| {
            let rendered = Rc::new(render_project_list(projects));
            match observer.view.try_borrow_mut() {
                Ok(mut slot) => {
                    *slot = rendered;
                    observer.renders.set(observer.renders.get() + 1);
                }
                // Re-entrant notification while the slot is being read.
                Err(_) => warn!(
                    "event=list_render module=view status=skipped count={}",
                    projects.len()
                ),
            }
        });
        Self {
            state,
            subscription,
        }
    }

    /// Snapshot of the latest rendering.
    pub fn view(&self) -> Rc<ProjectListView> {
        Rc::clone(&self.state.view.borrow())
    }

    /// Number of renders, including the initial one.
    pub fn render_count(&self) -> usize {
        self.state.renders.get()
    }

    /// Stops tracking the store. Returns `false` if already unbound.
    pub fn unbind(&self, store: &mut ProjectStore) -> bool {
        store.unsubscribe(self.subscription)
    }
}
