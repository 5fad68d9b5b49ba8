//! Drag-and-drop model shared by list items (sources) and lists (targets).
//!
//! Browser `DragEvent`s are reduced to plain values here so the transitions
//! can be tested without a DOM. The component layer reads the `DataTransfer`
//! and feeds the results into [`DropZone`].

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use uuid::Uuid;

use super::project::ProjectId;

/// MIME type under which a dragged project's id travels.
pub const PROJECT_MIME: &str = "text/plain";

/// `effectAllowed` value set when a project drag starts.
pub const DRAG_EFFECT: &str = "move";

/// CSS class applied to a list while a project hovers over it.
pub const DROPPABLE_CLASS: &str = "droppable";

/// Encode a project id as drag payload data.
#[must_use]
pub fn encode_payload(id: ProjectId) -> String {
    id.to_string()
}

/// Decode drag payload data back into a project id.
///
/// Anything that is not a project id yields `None`; the drop is then ignored.
#[must_use]
pub fn decode_payload(data: &str) -> Option<ProjectId> {
    match Uuid::parse_str(data.trim()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::debug!("ignoring drag payload {data:?}: {err}");
            None
        }
    }
}

/// Drop-target state of a single list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropZone {
    /// Nothing is hovering over the list.
    #[default]
    Idle,
    /// A project payload is hovering; the list shows drop styling.
    DragOver,
}

impl DropZone {
    /// Handle `dragover`. `types` are the payload MIME types on the event;
    /// only a payload whose first type is [`PROJECT_MIME`] is accepted.
    ///
    /// Returns `true` when the payload carries a project, in which case the
    /// caller must accept the drop (`preventDefault`).
    pub fn drag_over<S: AsRef<str>>(&mut self, types: &[S]) -> bool {
        let accepts = types.first().is_some_and(|t| t.as_ref() == PROJECT_MIME);
        if accepts {
            *self = Self::DragOver;
        }
        accepts
    }

    /// Handle `dragleave`.
    pub fn drag_leave(&mut self) {
        *self = Self::Idle;
    }

    /// Handle `drop`, returning the id of the dropped project if the
    /// payload decodes to one.
    pub fn finish_drop(&mut self, data: &str) -> Option<ProjectId> {
        *self = Self::Idle;
        decode_payload(data)
    }

    #[must_use]
    pub fn is_drag_over(self) -> bool {
        self == Self::DragOver
    }
}
