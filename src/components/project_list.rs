use std::rc::Rc;

use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::board::{DropTarget, ProjectStore, PAYLOAD_MIME};
use crate::components::{mount, BoardView, ProjectItem};
use crate::models::{projects_with_status, Project, ProjectStatus};

/// One board column showing every project in `status`.
///
/// The column keeps its own filtered copy of the store's list, replaced
/// wholesale on every store notification, and acts as the drop target that
/// moves dragged cards into `status`.
pub struct ProjectListView {
    status: ProjectStatus,
    store: Rc<ProjectStore>,
    assigned: RwSignal<Vec<Project>>,
    target: RwSignal<DropTarget>,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus, store: Rc<ProjectStore>) -> Self {
        let assigned = RwSignal::new(projects_with_status(&store.projects(), status));
        Self {
            status,
            store,
            assigned,
            target: RwSignal::new(DropTarget::new(status)),
        }
    }
}

impl BoardView for ProjectListView {
    fn configure(&self) {
        let status = self.status;
        let assigned = self.assigned;
        self.store.add_listener(move |projects| {
            assigned.set(projects_with_status(&projects, status));
        });
    }

    fn render(self) -> AnyView {
        let Self {
            status,
            store,
            assigned,
            target,
        } = self;

        let on_drag_over = move |ev: DragEvent| {
            let first_type = ev.data_transfer().and_then(|transfer| {
                let types: js_sys::Array = transfer.types();
                types.get(0).as_string()
            });
            let accepted = target
                .try_update(|t| t.drag_over(first_type.as_deref()))
                .unwrap_or(false);
            if accepted {
                ev.prevent_default();
            }
        };

        let on_drag_leave = move |_: DragEvent| {
            target.update(DropTarget::drag_leave);
        };

        let on_drop = move |ev: DragEvent| {
            ev.prevent_default();
            let payload = match ev.data_transfer().map(|transfer| transfer.get_data(PAYLOAD_MIME)) {
                Some(Ok(payload)) => payload,
                Some(Err(e)) => {
                    log::error!("Failed to read drop payload: {:?}", e);
                    String::new()
                }
                None => String::new(),
            };
            if let Some(project_id) = target.try_update(|t| t.drop(&payload)).flatten() {
                store.move_project(&project_id, status);
            }
        };

        let name = status.as_str();
        view! {
            <section
                class="projects"
                id=format!("{name}-projects")
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <header>
                    <h2>{format!("{} PROJECTS", name.to_uppercase())}</h2>
                    <span class="project-count">{move || assigned.with(Vec::len)}</span>
                </header>
                <ul
                    id=format!("{name}-projects-list")
                    class:droppable=move || target.with(DropTarget::highlighted)
                >
                    {move || {
                        assigned
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectItem project=project /> })
                            .collect_view()
                    }}
                </ul>
            </section>
        }
        .into_any()
    }
}

#[component]
pub fn ProjectList(status: ProjectStatus, store: Rc<ProjectStore>) -> impl IntoView {
    mount(ProjectListView::new(status, store))
}
