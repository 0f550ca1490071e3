//! Session provider.
//!
//! # Responsibility
//! - Own the store, router and toast queue for one running session.
//! - Serve as the single access point handed to forms and views.
//!
//! # Invariants
//! - One `Session` owns exactly one `ProjectStore`; there is no global state.
//! - Every mutation flows through `ProjectStore::add_project`.

use crate::form::{FormError, PendingReset, ProjectForm, DEFAULT_RESET_DELAY};
use crate::notify::ToastQueue;
use crate::route::{Navigator, Route, Router};
use crate::store::ProjectStore;
use crate::view::project_list::LiveProjectList;
use log::info;
use std::time::Duration;

pub const ENV_RESET_DELAY_MS: &str = "PROJECTDECK_RESET_DELAY_MS";

/// Tunables for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Wait between a successful submit and the form reset.
    pub reset_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

impl SessionConfig {
    /// Reads overrides through `lookup` (normally `std::env::var`).
    ///
    /// Missing keys keep defaults.
    ///
    /// # Errors
    /// - Returns an error when a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_RESET_DELAY_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|err| {
                format!("invalid {ENV_RESET_DELAY_MS} value `{raw}`: {err}")
            })?;
            config.reset_delay = Duration::from_millis(millis);
        }
        Ok(config)
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Shared state for one running session.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    store: ProjectStore,
    router: Router,
    toasts: ToastQueue,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        info!(
            "event=session_start module=session status=ok reset_delay_ms={}",
            config.reset_delay.as_millis()
        );
        Self {
            config,
            store: ProjectStore::new(),
            router: Router::new(),
            toasts: ToastQueue::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Creates an empty form configured for this session.
    pub fn new_form(&self) -> ProjectForm {
        ProjectForm::with_reset_delay(self.config.reset_delay)
    }

    /// Binds a list view to this session's store.
    pub fn bind_project_list(&mut self) -> LiveProjectList {
        LiveProjectList::bind(&mut self.store)
    }

    /// Submits `form` against this session's store and toast queue.
    pub fn submit(&mut self, form: &mut ProjectForm) -> Result<PendingReset, FormError> {
        form.submit(&mut self.store, &self.toasts)
    }

    /// Second half of a submission, run once the reset delay has passed.
    pub fn complete(&mut self, form: &mut ProjectForm) {
        form.finish_submission(&mut self.router);
    }

    /// Navigates by path and returns the resolved route.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.router.navigate(Route::parse(path));
        self.router.current()
    }

    pub fn back(&mut self) -> bool {
        self.router.back()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, ENV_RESET_DELAY_MS};
    use std::time::Duration;

    #[test]
    fn missing_override_keeps_default() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.reset_delay, Duration::from_millis(1000));
    }

    #[test]
    fn override_parses_millis() {
        let config = SessionConfig::from_lookup(|key| {
            (key == ENV_RESET_DELAY_MS).then(|| " 0 ".to_string())
        })
        .unwrap();
        assert_eq!(config.reset_delay, Duration::ZERO);
    }

    #[test]
    fn bad_override_is_rejected() {
        let err = SessionConfig::from_lookup(|_| Some("soon".to_string())).unwrap_err();
        assert!(err.contains(ENV_RESET_DELAY_MS));
    }
}
