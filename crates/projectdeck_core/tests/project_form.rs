use chrono::NaiveDate;
use projectdeck_core::{
    FormError, FormField, Priority, ProjectForm, ProjectStore, Route, Router, Team, ToastQueue,
    ToastVariant,
};
use std::time::Duration;

#[test]
fn blank_names_never_reach_the_store() {
    for name in ["", " ", "\t\n  "] {
        let mut store = ProjectStore::new();
        let toasts = ToastQueue::new();
        let mut form = ProjectForm::new();
        form.set_name(name);
        form.set_description("has a description");

        let err = form.submit(&mut store, &toasts).unwrap_err();

        assert_eq!(err, FormError::NameRequired);
        assert_eq!(store.len(), 0);
        assert!(!form.is_submitting());
        let shown = toasts.drain();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Error");
        assert_eq!(shown[0].description, "Project name is required");
        assert_eq!(shown[0].variant, ToastVariant::Destructive);
    }
}

#[test]
fn valid_name_with_empty_optionals_creates_unset_fields() {
    let mut store = ProjectStore::new();
    let toasts = ToastQueue::new();
    let mut form = ProjectForm::new();
    form.set_name("Quarterly review");
    form.set_field(FormField::Priority, "").unwrap();
    form.set_field(FormField::Team, "").unwrap();

    let pending = form.submit(&mut store, &toasts).unwrap();
    let project = &pending.project;

    assert_eq!(project.name, "Quarterly review");
    assert!(project.description.is_none());
    assert!(project.due_date.is_none());
    assert!(project.priority.is_none());
    assert!(project.team.is_none());
    assert!(!project.id.is_nil());
    assert_eq!(store.get_project(project.id), Some(project));
}

#[test]
fn success_toast_and_submitting_state() {
    let mut store = ProjectStore::new();
    let toasts = ToastQueue::new();
    let mut form = ProjectForm::with_reset_delay(Duration::from_millis(250));
    form.set_name("Docs refresh");
    assert_eq!(form.submit_label(), "Create Project");

    let pending = form.submit(&mut store, &toasts).unwrap();

    assert_eq!(pending.delay, Duration::from_millis(250));
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Creating...");
    let shown = toasts.drain();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Success");
    assert_eq!(shown[0].description, "Project created successfully!");
    assert_eq!(shown[0].variant, ToastVariant::Default);
}

#[test]
fn repeat_submit_while_submitting_is_rejected() {
    let mut store = ProjectStore::new();
    let toasts = ToastQueue::new();
    let mut form = ProjectForm::new();
    form.set_name("Once");

    form.submit(&mut store, &toasts).unwrap();
    let err = form.submit(&mut store, &toasts).unwrap_err();

    assert_eq!(err, FormError::AlreadySubmitting);
    assert_eq!(store.len(), 1);
    assert_eq!(toasts.len(), 1);
}

#[test]
fn finish_submission_resets_draft_and_navigates() {
    let mut store = ProjectStore::new();
    let toasts = ToastQueue::new();
    let mut router = Router::starting_at(Route::CreateProject);
    let mut form = ProjectForm::new();
    form.set_name("Brand kit");
    form.set_description("Logos and palettes");
    form.set_due_date(NaiveDate::from_ymd_opt(2027, 1, 15));
    form.select_priority(Some(Priority::Low));
    form.select_team(Some(Team::Design));

    form.submit(&mut store, &toasts).unwrap();
    form.finish_submission(&mut router);

    assert!(form.draft().is_blank());
    assert!(!form.is_submitting());
    assert_eq!(router.current(), &Route::Projects);

    form.set_name("Second");
    form.submit(&mut store, &toasts).unwrap();
    assert_eq!(store.len(), 2);
}
