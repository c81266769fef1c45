use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Project, ProjectStatus};

/// Subscriber invoked with a copy of the full project list after every mutation.
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

/// In-memory list of projects plus the subscribers that render it.
///
/// One store backs one board. Views receive it as an `Rc<ProjectStore>` and only
/// ever change projects through `add_project` and `move_project`.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber. There is no removal; registering twice fires twice.
    pub fn add_listener(&self, listener: impl Fn(Vec<Project>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Appends a new active project and notifies every subscriber. Returns its id.
    pub fn add_project(&self, title: String, description: String, people: u32) -> String {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        log::info!("Adding project {} ({})", project.title, id);

        self.projects.borrow_mut().push(project);
        self.notify();
        id
    }

    /// Changes the status of `id`. Unknown ids and unchanged statuses are ignored
    /// without notifying anyone.
    pub fn move_project(&self, id: &str, new_status: ProjectStatus) -> bool {
        let moved = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| p.id == id) {
                Some(project) if project.status != new_status => {
                    project.status = new_status;
                    true
                }
                Some(_) => {
                    log::debug!("Project {} is already {}", id, new_status.as_str());
                    false
                }
                None => {
                    log::debug!("Project {} not found, ignoring move", id);
                    false
                }
            }
        };

        if moved {
            log::info!("Moved project {} to {}", id, new_status.as_str());
            self.notify();
        }
        moved
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    // Borrows are released before any listener runs so listeners may call back in.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        log::debug!("Notifying {} listeners", listeners.len());
        for listener in listeners {
            listener(self.projects());
        }
    }
}
