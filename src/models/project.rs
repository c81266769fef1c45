use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![ProjectStatus::Active, ProjectStatus::Finished]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// New projects always start in the active column.
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

/// Keeps the projects in `status`, preserving insertion order.
pub fn projects_with_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects.iter().filter(|p| p.status == status).cloned().collect()
}
