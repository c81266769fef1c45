pub mod drag;
pub mod form;
pub mod store;

pub use drag::{DragPhase, DropTarget, PAYLOAD_MIME};
pub use form::{validate_submission, FormError, NewProject};
pub use store::{Listener, ProjectStore};
