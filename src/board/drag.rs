use crate::models::ProjectStatus;

/// MIME type the card id travels under in the drag payload.
pub const PAYLOAD_MIME: &str = "text/plain";

/// Lifecycle of a single card drag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(String),
    Dropped(String),
    Cancelled(String),
}

impl DragPhase {
    pub fn start(project_id: impl Into<String>) -> Self {
        DragPhase::Dragging(project_id.into())
    }

    /// Resolves a drag on `dragend`. The browser reports `dropEffect == "none"`
    /// when no target accepted the drop.
    pub fn finish(self, drop_effect: &str) -> Self {
        match self {
            DragPhase::Dragging(id) if drop_effect == "none" => DragPhase::Cancelled(id),
            DragPhase::Dragging(id) => DragPhase::Dropped(id),
            other => other,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }
}

/// Drop-side state of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    status: ProjectStatus,
    highlighted: bool,
}

impl DropTarget {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            highlighted: false,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Returns whether the drag should be accepted, i.e. whether the caller must
    /// prevent the default `dragover` handling.
    pub fn drag_over(&mut self, first_type: Option<&str>) -> bool {
        let accepted = first_type == Some(PAYLOAD_MIME);
        if accepted {
            self.highlighted = true;
        }
        accepted
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Clears the highlight and yields the project id carried by `payload`, if any.
    pub fn drop(&mut self, payload: &str) -> Option<String> {
        self.highlighted = false;
        let id = payload.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_ends_dropped_or_cancelled() {
        let drag = DragPhase::start("p1");
        assert!(drag.is_dragging());
        assert_eq!(drag.clone().finish("move"), DragPhase::Dropped("p1".into()));
        assert_eq!(drag.finish("none"), DragPhase::Cancelled("p1".into()));
    }

    #[test]
    fn finish_without_start_stays_idle() {
        assert_eq!(DragPhase::Idle.finish("move"), DragPhase::Idle);
        assert!(!DragPhase::default().is_dragging());
    }

    #[test]
    fn drop_target_accepts_only_text_payloads() {
        let mut target = DropTarget::new(ProjectStatus::Finished);
        assert!(!target.drag_over(Some("Files")));
        assert!(!target.highlighted());
        assert!(!target.drag_over(None));

        assert!(target.drag_over(Some(PAYLOAD_MIME)));
        assert!(target.highlighted());
        target.drag_leave();
        assert!(!target.highlighted());
    }

    #[test]
    fn drop_clears_highlight_and_reads_id() {
        let mut target = DropTarget::new(ProjectStatus::Active);
        target.drag_over(Some(PAYLOAD_MIME));
        assert_eq!(target.drop("abc"), Some("abc".to_string()));
        assert!(!target.highlighted());

        target.drag_over(Some(PAYLOAD_MIME));
        assert_eq!(target.drop("  "), None);
        assert!(!target.highlighted());
        assert_eq!(target.status(), ProjectStatus::Active);
    }
}
