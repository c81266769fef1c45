pub mod project;

pub use project::{projects_with_status, Project, ProjectStatus};
