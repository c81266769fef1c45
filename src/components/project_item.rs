use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::board::{DragPhase, PAYLOAD_MIME};
use crate::components::{mount, BoardView};
use crate::models::Project;

/// A single draggable project card.
pub struct ProjectItemView {
    project: Project,
}

impl ProjectItemView {
    pub fn new(project: Project) -> Self {
        Self { project }
    }
}

impl BoardView for ProjectItemView {
    fn render(self) -> AnyView {
        let drag = RwSignal::new(DragPhase::Idle);
        let assigned = format!("{} assigned", self.project.persons_label());
        let Project {
            id,
            title,
            description,
            created_at,
            ..
        } = self.project;
        let added = format!("Added {}", created_at.format("%H:%M"));

        let project_id = id.clone();
        let on_drag_start = move |ev: DragEvent| {
            let Some(transfer) = ev.data_transfer() else {
                log::warn!("dragstart without a DataTransfer for project {}", project_id);
                return;
            };
            if let Err(e) = transfer.set_data(PAYLOAD_MIME, &project_id) {
                log::error!("Failed to set drag payload for {}: {:?}", project_id, e);
                return;
            }
            transfer.set_effect_allowed("move");
            drag.set(DragPhase::start(project_id.clone()));
        };

        let on_drag_end = move |ev: DragEvent| {
            let effect = ev
                .data_transfer()
                .map(|transfer| transfer.drop_effect())
                .unwrap_or_else(|| "none".to_string());
            let phase = end_drag(drag, &effect);
            log::debug!("Drag ended: {:?}", phase);
        };

        view! {
            <li
                id=id
                class="project-item"
                class:dragging=move || drag.with(DragPhase::is_dragging)
                draggable="true"
                on:dragstart=on_drag_start
                on:dragend=on_drag_end
            >
                <h2>{title}</h2>
                <h3>{assigned}</h3>
                <p>{description}</p>
                <time class="project-added">{added}</time>
            </li>
        }
        .into_any()
    }
}

/// Resolves the card's drag on `dragend`. A drop into the other column rebuilds
/// that column before `dragend` fires, so `drag` may already be disposed.
pub(crate) fn end_drag(drag: RwSignal<DragPhase>, drop_effect: &str) -> DragPhase {
    let phase = drag.try_get_untracked().unwrap_or_default().finish(drop_effect);
    drag.try_set(phase.clone());
    phase
}

#[component]
pub fn ProjectItem(project: Project) -> impl IntoView {
    mount(ProjectItemView::new(project))
}
