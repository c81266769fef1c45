use std::rc::Rc;

use leptos::prelude::*;

use crate::board::ProjectStore;
use crate::components::{ProjectInput, ProjectList};
use crate::config::BoardConfig;
use crate::models::ProjectStatus;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // One store per board, handed to every view that reads or changes it
    let store = Rc::new(ProjectStore::new());

    view! {
        <main class="app" id="app">
            <ProjectInput store=store.clone() config=config />
            {ProjectStatus::all()
                .into_iter()
                .map(|status| view! { <ProjectList status=status store=store.clone() /> })
                .collect_view()}
        </main>
    }
}
