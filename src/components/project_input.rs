use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;

use crate::board::{validate_submission, FormError, ProjectStore};
use crate::components::{mount, BoardView};
use crate::config::BoardConfig;

/// The "add project" form.
pub struct ProjectInputView {
    store: Rc<ProjectStore>,
    config: BoardConfig,
}

impl ProjectInputView {
    pub fn new(store: Rc<ProjectStore>, config: BoardConfig) -> Self {
        Self { store, config }
    }

    /// Adds the project described by the raw field values and returns its id.
    /// Rejected input leaves the store untouched.
    pub fn submit(
        &self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<String, FormError> {
        let input = validate_submission(title, description, people).inspect_err(|e| {
            log::warn!("Rejected project submission: {}", e);
        })?;
        Ok(self.store.add_project(input.title, input.description, input.people))
    }
}

impl BoardView for ProjectInputView {
    fn render(self) -> AnyView {
        let form = Rc::new(self);
        let (title, set_title) = signal(String::new());
        let (description, set_description) = signal(String::new());
        let (people, set_people) = signal(String::new());

        let handle_submit = move |ev: ev::SubmitEvent| {
            // Keep the browser from reloading the page
            ev.prevent_default();

            let submitted = form.submit(
                &title.get_untracked(),
                &description.get_untracked(),
                &people.get_untracked(),
            );
            if submitted.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
                set_people.set(String::new());
            } else {
                let message = &form.config.invalid_input_message;
                if let Err(err) = window().alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", err);
                }
            }
        };

        view! {
            <form id="user-input" on:submit=handle_submit>
                <div class="form-control">
                    <label for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=move || title.get()
                    />
                </div>
                <div class="form-control">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        prop:value=move || description.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <label for="people">"People"</label>
                    <input
                        type="number"
                        id="people"
                        step="1"
                        min="1"
                        on:input=move |ev| set_people.set(event_target_value(&ev))
                        prop:value=move || people.get()
                    />
                </div>
                <button type="submit">"ADD PROJECT"</button>
            </form>
        }
        .into_any()
    }
}

#[component]
pub fn ProjectInput(store: Rc<ProjectStore>, config: BoardConfig) -> impl IntoView {
    mount(ProjectInputView::new(store, config))
}
