use leptos::prelude::*;

pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use project_input::ProjectInput;
pub use project_item::ProjectItem;
pub use project_list::ProjectList;

/// Shared shape of the board's views: wire up subscriptions, then build the DOM.
pub trait BoardView {
    fn configure(&self) {}

    fn render(self) -> AnyView;
}

pub fn mount<V: BoardView>(view: V) -> AnyView {
    view.configure();
    view.render()
}
