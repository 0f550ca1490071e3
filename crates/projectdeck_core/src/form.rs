//! Project creation form.
//!
//! # Responsibility
//! - Hold the transient draft for one new project.
//! - Validate the draft and submit it to the store once per confirmation.
//! - Reset the draft and hand navigation to the host after submission.
//!
//! # Invariants
//! - A blank (empty or whitespace-only) name never reaches the store.
//! - While `submitting` is set, further submissions are rejected.
//! - Empty text for optional fields maps to `None`, never to `Some("")`.

use crate::model::project::{NewProject, ParseOptionError, Priority, Project, Team};
use crate::notify::{Notifier, Toast};
use crate::route::{Navigator, Route};
use crate::store::ProjectStore;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Delay between a successful submit and the draft reset/navigation.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1000);

const NAME_REQUIRED_MESSAGE: &str = "Project name is required";
const CREATED_MESSAGE: &str = "Project created successfully!";
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable draft fields addressed by text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    DueDate,
    Priority,
    Team,
}

impl FormField {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "due" | "due_date" | "duedate" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            "team" => Some(Self::Team),
            _ => None,
        }
    }
}

/// Form-level failure. None of these mutate the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Name was empty or whitespace-only at submit time.
    NameRequired,
    /// A submission is already waiting for its reset.
    AlreadySubmitting,
    /// Select input named a value outside the option set.
    InvalidOption(ParseOptionError),
    /// Due date text was not `YYYY-MM-DD`.
    InvalidDueDate(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => f.write_str(NAME_REQUIRED_MESSAGE),
            Self::AlreadySubmitting => f.write_str("a submission is already in progress"),
            Self::InvalidOption(err) => write!(f, "{err}"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidOption(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseOptionError> for FormError {
    fn from(value: ParseOptionError) -> Self {
        Self::InvalidOption(value)
    }
}

/// Working copy of the user's input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub team: Option<Team>,
}

impl ProjectDraft {
    /// Maps the draft to store input.
    pub fn to_new_project(&self) -> NewProject {
        NewProject {
            name: self.name.clone(),
            description: non_empty(&self.description),
            due_date: self.due_date,
            priority: self.priority,
            team: self.team,
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of an accepted submission.
///
/// The host waits `delay` and then calls [`ProjectForm::finish_submission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReset {
    pub project: Project,
    pub delay: Duration,
}

/// Project creation form state machine.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    draft: ProjectDraft,
    submitting: bool,
    reset_delay: Duration,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::with_reset_delay(DEFAULT_RESET_DELAY)
    }

    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            draft: ProjectDraft::default(),
            submitting: false,
            reset_delay,
        }
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Label of the submit button for the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Creating..."
        } else {
            "Create Project"
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn set_due_date(&mut self, value: Option<NaiveDate>) {
        self.draft.due_date = value;
    }

    pub fn select_priority(&mut self, value: Option<Priority>) {
        self.draft.priority = value;
    }

    pub fn select_team(&mut self, value: Option<Team>) {
        self.draft.team = value;
    }

    /// Applies raw text input to one field.
    ///
    /// Blank text clears select and date fields. On error the draft is
    /// left unchanged.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        match field {
            FormField::Name => self.set_name(value),
            FormField::Description => self.set_description(value),
            FormField::DueDate => {
                let date = parse_optional(value, |text| {
                    NaiveDate::parse_from_str(text, DUE_DATE_FORMAT)
                        .map_err(|_| FormError::InvalidDueDate(text.to_string()))
                })?;
                self.set_due_date(date);
            }
            FormField::Priority => {
                let priority = parse_optional(value, |text| Ok(text.parse::<Priority>()?))?;
                self.select_priority(priority);
            }
            FormField::Team => {
                let team = parse_optional(value, |text| Ok(text.parse::<Team>()?))?;
                self.select_team(team);
            }
        }
        Ok(())
    }

    /// Validates the draft and creates the project.
    ///
    /// # Contract
    /// - Blank name: destructive toast, `Err(NameRequired)`, store untouched.
    /// - Already submitting: `Err(AlreadySubmitting)`, store untouched, no toast.
    /// - Otherwise: exactly one `add_project` call, success toast, form enters
    ///   the submitting state until `finish_submission`.
    pub fn submit(
        &mut self,
        store: &mut ProjectStore,
        notifier: &dyn Notifier,
    ) -> Result<PendingReset, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }

        if self.draft.name.trim().is_empty() {
            warn!("event=project_submit module=form status=rejected reason=name_required");
            notifier.notify(Toast::error(NAME_REQUIRED_MESSAGE));
            return Err(FormError::NameRequired);
        }

        self.submitting = true;
        let project = store.add_project(self.draft.to_new_project());
        notifier.notify(Toast::success(CREATED_MESSAGE));
        info!(
            "event=project_submit module=form status=ok id={}",
            project.id
        );

        Ok(PendingReset {
            project,
            delay: self.reset_delay,
        })
    }

    /// Clears the draft and leaves for the project list.
    pub fn finish_submission(&mut self, navigator: &mut dyn Navigator) {
        self.draft = ProjectDraft::default();
        self.submitting = false;
        navigator.navigate(Route::Projects);
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_optional<T, F>(value: &str, parse: F) -> Result<Option<T>, FormError>
where
    F: FnOnce(&str) -> Result<T, FormError>,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse(trimmed).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{FormError, FormField, ProjectForm};
    use crate::model::project::{Priority, Team};
    use chrono::NaiveDate;

    #[test]
    fn set_field_parses_selects_and_dates() {
        let mut form = ProjectForm::new();
        form.set_field(FormField::Priority, "Urgent").unwrap();
        form.set_field(FormField::Team, "design").unwrap();
        form.set_field(FormField::DueDate, "2026-12-01").unwrap();

        assert_eq!(form.draft().priority, Some(Priority::Urgent));
        assert_eq!(form.draft().team, Some(Team::Design));
        assert_eq!(
            form.draft().due_date,
            NaiveDate::from_ymd_opt(2026, 12, 1)
        );

        form.set_field(FormField::Team, "  ").unwrap();
        assert_eq!(form.draft().team, None);
    }

    #[test]
    fn invalid_input_leaves_draft_unchanged() {
        let mut form = ProjectForm::new();
        form.select_priority(Some(Priority::Low));

        let err = form.set_field(FormField::Priority, "asap").unwrap_err();
        assert!(matches!(err, FormError::InvalidOption(ref e) if e.field == "priority"));
        assert_eq!(form.draft().priority, Some(Priority::Low));

        let err = form.set_field(FormField::DueDate, "12/01/2026").unwrap_err();
        assert_eq!(err, FormError::InvalidDueDate("12/01/2026".to_string()));
    }

    #[test]
    fn description_whitespace_is_kept_but_empty_is_unset() {
        let mut form = ProjectForm::new();
        form.set_name("n");
        assert_eq!(form.draft().to_new_project().description, None);
        form.set_description("  notes ");
        assert_eq!(
            form.draft().to_new_project().description.as_deref(),
            Some("  notes ")
        );
    }

    #[test]
    fn field_names_parse() {
        assert_eq!(FormField::parse("Due"), Some(FormField::DueDate));
        assert_eq!(FormField::parse("owner"), None);
    }
}
