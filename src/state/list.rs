//! Per-status list view state.
//!
//! DESIGN
//! ======
//! Each of the three board columns owns one `ProjectList`. The column's store
//! listener hands every snapshot to [`ProjectList::apply_snapshot`], which
//! replaces the cached projects with the ones matching the column's status.
//! Replacement (never append) keeps re-rendering idempotent.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use super::drag::DropZone;
use super::project::{Project, ProjectId, ProjectStatus};
use super::store::ProjectStore;

/// Cached, filtered view of the store for one status category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectList {
    pub status: ProjectStatus,
    /// Projects in this category, in store order.
    pub assigned: Vec<Project>,
    pub drop_zone: DropZone,
}

impl ProjectList {
    #[must_use]
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Vec::new(),
            drop_zone: DropZone::Idle,
        }
    }

    /// Build a list already filled from the store's current contents.
    #[must_use]
    pub fn from_store(status: ProjectStatus, store: &ProjectStore) -> Self {
        let mut list = Self::new(status);
        list.apply_snapshot(store.snapshot());
        list
    }

    /// Element id of the list's section.
    #[must_use]
    pub fn section_id(&self) -> String {
        format!("{}-projects", self.status.slug())
    }

    /// Element id of the `<ul>` holding the items.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.slug())
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.status.heading()
    }

    /// Replace the cached projects with those in `projects` matching this
    /// list's status.
    pub fn apply_snapshot(&mut self, projects: Vec<Project>) {
        let status = self.status;
        self.assigned = projects.into_iter().filter(|p| status.matches(p)).collect();
    }

    /// See [`DropZone::drag_over`].
    pub fn drag_over<S: AsRef<str>>(&mut self, types: &[S]) -> bool {
        self.drop_zone.drag_over(types)
    }

    pub fn drag_leave(&mut self) {
        self.drop_zone.drag_leave();
    }

    /// Finish a drop onto this list, returning the dragged project's id.
    ///
    /// The caller moves the project with `ProjectStore::change_status` once
    /// it no longer holds this list mutably, since the store notifies this
    /// very list.
    pub fn finish_drop(&mut self, data: &str) -> Option<ProjectId> {
        self.drop_zone.finish_drop(data)
    }
}
