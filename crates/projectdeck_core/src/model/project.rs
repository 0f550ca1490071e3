//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record held by the session store.
//! - Define the closed option sets for priority and team.
//!
//! # Invariants
//! - `id` is generated by the store and never reused within a session.
//! - `created_at` is stamped by the store, never by callers.
//! - Optional fields use `None` for "unset"; empty strings are never stored.
//!
//! # See also
//! - `crate::store` for id/timestamp assignment.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a project within one session.
pub type ProjectId = Uuid;

/// Project urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Option order as offered by the creation form.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseOptionError::new("priority", value)),
        }
    }
}

/// Team a project is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Design,
    Development,
    Marketing,
    Product,
}

impl Team {
    /// Option order as offered by the creation form.
    pub const ALL: [Team; 4] = [
        Team::Design,
        Team::Development,
        Team::Marketing,
        Team::Product,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Development => "development",
            Self::Marketing => "marketing",
            Self::Product => "product",
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "design" => Ok(Self::Design),
            "development" => Ok(Self::Development),
            "marketing" => Ok(Self::Marketing),
            "product" => Ok(Self::Product),
            _ => Err(ParseOptionError::new("team", value)),
        }
    }
}

/// Raised when text does not name a member of a closed option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    pub field: &'static str,
    pub value: String,
}

impl ParseOptionError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for ParseOptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.field, self.value)
    }
}

impl Error for ParseOptionError {}

/// Caller-supplied fields for a new project.
///
/// The store fills in `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub team: Option<Team>,
}

impl NewProject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub team: Option<Team>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Builds a stored record from caller input plus store-assigned identity.
    pub(crate) fn from_new(input: NewProject, id: ProjectId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            team: input.team,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Team};

    #[test]
    fn priority_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
    }

    #[test]
    fn unknown_team_names_the_field() {
        let err = "sales".parse::<Team>().unwrap_err();
        assert_eq!(err.field, "team");
        assert_eq!(err.to_string(), "unknown team `sales`");
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        for team in Team::ALL {
            assert_eq!(team.to_string().parse::<Team>().unwrap(), team);
        }
    }
}
