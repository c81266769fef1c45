use std::cell::RefCell;
use std::rc::Rc;

use project_board::board::{DragPhase, DropTarget, FormError, ProjectStore, PAYLOAD_MIME};
use project_board::components::project_input::ProjectInputView;
use project_board::config::BoardConfig;
use project_board::models::{projects_with_status, Project, ProjectStatus};

/// Mirrors what a column does: keep the filtered list from the latest notification.
fn column(store: &ProjectStore, status: ProjectStatus) -> Rc<RefCell<Vec<Project>>> {
    let rendered = Rc::new(RefCell::new(projects_with_status(&store.projects(), status)));
    let sink = rendered.clone();
    store.add_listener(move |projects| {
        *sink.borrow_mut() = projects_with_status(&projects, status);
    });
    rendered
}

fn counting(store: &ProjectStore) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    store.add_listener(move |_| *sink.borrow_mut() += 1);
    count
}

#[test]
fn add_then_drag_to_finished() {
    let store = ProjectStore::new();
    let active = column(&store, ProjectStatus::Active);
    let finished = column(&store, ProjectStatus::Finished);

    let id = store.add_project("A".into(), "d".into(), 1);
    let projects = store.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "A");
    assert_eq!(projects[0].people, 1);
    assert_eq!(projects[0].status, ProjectStatus::Active);
    assert_eq!(active.borrow().len(), 1);

    let drag = DragPhase::start(id.clone());
    let mut target = DropTarget::new(ProjectStatus::Finished);
    assert!(target.drag_over(Some(PAYLOAD_MIME)));
    let dropped = target.drop(&id).expect("payload carries the id");
    assert!(store.move_project(&dropped, target.status()));
    assert_eq!(drag.finish("move"), DragPhase::Dropped(id));

    assert_eq!(store.projects()[0].status, ProjectStatus::Finished);
    assert!(active.borrow().is_empty());
    assert_eq!(finished.borrow().len(), 1);
}

#[test]
fn dropping_on_own_column_does_not_notify() {
    let store = ProjectStore::new();
    let id = store.add_project("A".into(), "d".into(), 2);
    let notifications = counting(&store);

    let mut target = DropTarget::new(ProjectStatus::Active);
    target.drag_over(Some(PAYLOAD_MIME));
    let dropped = target.drop(&id).expect("payload carries the id");
    assert!(!store.move_project(&dropped, target.status()));
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn empty_title_submission_changes_nothing() {
    let store = Rc::new(ProjectStore::new());
    let notifications = counting(&store);
    let form = ProjectInputView::new(store.clone(), BoardConfig::default());

    assert_eq!(form.submit("   ", "d", "3"), Err(FormError::MissingField("title")));

    assert!(store.is_empty());
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn columns_partition_the_board() {
    let store = ProjectStore::new();
    let active = column(&store, ProjectStatus::Active);
    let finished = column(&store, ProjectStatus::Finished);

    let ids: Vec<String> = (1..=6)
        .map(|n| store.add_project(format!("p{n}"), "d".into(), n))
        .collect();
    for id in ids.iter().step_by(2) {
        store.move_project(id, ProjectStatus::Finished);
    }
    store.move_project(&ids[0], ProjectStatus::Active);

    assert_eq!(active.borrow().len() + finished.borrow().len(), store.len());
    for id in &ids {
        let in_active = active.borrow().iter().any(|p| &p.id == id);
        let in_finished = finished.borrow().iter().any(|p| &p.id == id);
        assert!(in_active != in_finished);
    }
    assert_eq!(finished.borrow().len(), 2);
}
