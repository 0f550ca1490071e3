//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define canonical data structures shared by store, form and views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are immutable once stored; there is no update or delete path.

pub mod project;
