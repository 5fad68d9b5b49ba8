//! Project store — the authoritative, observable list of projects.
//!
//! DESIGN
//! ======
//! `ProjectStore` is a cheap-to-clone handle around shared state. The board
//! constructs exactly one and hands it to every view (Leptos context), so
//! there is no global instance. Views learn about changes by subscribing a
//! listener; every successful mutation ends with one notification round in
//! which each listener receives its own owned snapshot of the project list.
//!
//! Listeners are invoked with no lock held. A listener may therefore read the
//! store, or even mutate it: mutations made during a round are not delivered
//! mid-round but trigger one further round once the current one completes,
//! so the last snapshot every listener sees always mirrors the store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::project::{Project, ProjectId, ProjectStatus};

/// Callback invoked with a snapshot of every project, in insertion order.
pub type Listener = Arc<dyn Fn(Vec<Project>) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    notifying: bool,
    pending: bool,
}

/// Shared handle to the board's projects and their subscribers.
#[derive(Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("ProjectStore")
            .field("projects", &inner.projects)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Writes are single pushes or field assignments, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a new `Active` project and notify listeners.
    ///
    /// Inputs are taken as given; validation belongs to the caller.
    pub fn add(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        log::debug!("project added: {id} ({})", project.title);
        self.write().projects.push(project);
        self.notify();
        id
    }

    /// Move a project to `status`.
    ///
    /// Returns `true` when the status actually changed. An unknown id or a
    /// project already in `status` is left alone and nobody is notified.
    pub fn change_status(&self, id: ProjectId, status: ProjectStatus) -> bool {
        {
            let mut inner = self.write();
            let Some(project) = inner.projects.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            if project.status == status {
                return false;
            }
            log::debug!("project {id}: {:?} -> {status:?}", project.status);
            project.status = status;
        }
        self.notify();
        true
    }

    /// Register a listener for every future change. There is no unsubscribe.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + Send + Sync + 'static,
    {
        self.write().listeners.push(Arc::new(listener));
    }

    /// Owned copy of all projects in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    /// Look up a project by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.read().projects.iter().find(|p| p.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().projects.is_empty()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.read().listeners.len()
    }

    fn notify(&self) {
        {
            let mut inner = self.write();
            if inner.notifying {
                inner.pending = true;
                return;
            }
            inner.notifying = true;
        }
        let _round = RoundGuard(self);

        loop {
            let (snapshot, listeners) = {
                let mut inner = self.write();
                inner.pending = false;
                (inner.projects.clone(), inner.listeners.clone())
            };

            log::debug!(
                "notifying {} listener(s) of {} project(s)",
                listeners.len(),
                snapshot.len()
            );
            for listener in &listeners {
                listener(snapshot.clone());
            }

            if !self.read().pending {
                break;
            }
        }
    }
}

/// Closes a notification round when dropped, including when a listener
/// unwinds, so later mutations start a fresh round.
struct RoundGuard<'a>(&'a ProjectStore);

impl Drop for RoundGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.0.write();
        inner.notifying = false;
        inner.pending = false;
    }
}
