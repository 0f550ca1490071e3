//! Presentation models derived from store state.
//!
//! # Responsibility
//! - Compute display values (previews, labels, tones) for the list page.
//! - Build the dashboard landing page.
//! - Keep derived values out of the store.

pub mod dashboard;
pub mod format;
pub mod project_list;
