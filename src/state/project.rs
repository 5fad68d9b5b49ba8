//! Project model: the unit of work tracked on the board and its status.
//!
//! A `Project` is created only by `ProjectStore::add` and afterwards only its
//! `status` ever changes. `ProjectStatus` doubles as the category key for the
//! three list views, so it also carries the DOM naming used by those views.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a project. Opaque to everything but the store.
pub type ProjectId = Uuid;

/// Which list a project currently belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Newly created, not yet started.
    #[default]
    Active,
    /// Being worked on.
    InProgress,
    /// Done.
    Finished,
}

impl ProjectStatus {
    /// All status categories in board order.
    pub const ALL: [Self; 3] = [Self::Active, Self::InProgress, Self::Finished];

    /// Stable slug used for element ids and CSS hooks.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in-progress",
            Self::Finished => "finished",
        }
    }

    /// Heading shown above the list for this category.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::InProgress => "IN PROGRESS PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }

    /// Filter predicate shared by every list view.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        project.status == self
    }
}

/// A project as held by the store and rendered by the list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Generated by the store; never changes.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Always at least 1 for projects created
    /// through the input form.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Build a fresh `Active` project with a newly generated id.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human phrasing of the people count.
    #[must_use]
    pub fn people_label(&self) -> String {
        people_label(self.people)
    }

    /// Card subtitle, e.g. `"4 people assigned"`.
    #[must_use]
    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.people_label())
    }
}

/// `"only 1 person"` for a single assignee, `"{n} people"` otherwise.
#[must_use]
pub fn people_label(people: u32) -> String {
    if people == 1 {
        "only 1 person".to_owned()
    } else {
        format!("{people} people")
    }
}
