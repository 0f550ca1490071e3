//! In-memory project store.
//!
//! # Responsibility
//! - Hold the authoritative, ordered project list for one session.
//! - Assign `id` and `created_at` for every created project.
//! - Notify subscribed views after every mutation.
//!
//! # Invariants
//! - `add_project` is the only mutation path; callers only ever see `&[Project]`.
//! - Projects are appended in call order and never reordered or removed.
//! - `created_at` is non-decreasing in insertion order.
//! - The store does not re-validate `name`; the form owns that rule.

use crate::model::project::{NewProject, Project, ProjectId};
use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

/// Handle returned by [`ProjectStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Project])>;

/// Session-scoped owner of all projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a project from caller input and appends it to the list.
    ///
    /// # Contract
    /// - Generates a fresh v4 id and stamps the current time.
    /// - Every subscriber has observed the new list before this returns.
    /// - Never fails.
    pub fn add_project(&mut self, input: NewProject) -> Project {
        let project = Project::from_new(input, self.fresh_id(), self.next_timestamp());
        self.projects.push(project.clone());

        debug!(
            "event=project_created module=store status=ok id={} count={}",
            project.id,
            self.projects.len()
        );

        self.notify();
        project
    }

    /// Looks up a project by id. Returns `None` for ids never created.
    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Current projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Registers a listener called with the full list after each mutation.
    ///
    /// The listener is not called on registration; read `projects()` for
    /// the initial state.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Project]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let projects = self.projects.as_slice();
        for (_, listener) in self.listeners.iter_mut() {
            listener(projects);
        }
    }

    fn fresh_id(&self) -> ProjectId {
        loop {
            let id = Uuid::new_v4();
            if self.get_project(id).is_none() {
                return id;
            }
        }
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.projects.last() {
            // Wall clock may step backwards; keep insertion order monotonic.
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        }
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
