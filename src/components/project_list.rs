//! Status column: one filtered list of projects and a drop target.

use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::components::project_item::ProjectItem;
use crate::components::shell::drop_target_shell;
use crate::state::drag::DROPPABLE_CLASS;
use crate::state::list::ProjectList;
use crate::state::project::ProjectStatus;
use crate::state::store::ProjectStore;
use crate::util::drag_data;

/// List of every project in `status`, kept in sync with the store.
///
/// Dropping a project here moves it to `status`.
#[component]
pub fn ProjectListView(status: ProjectStatus) -> impl IntoView {
    let store = expect_context::<ProjectStore>();
    let list = RwSignal::new(ProjectList::from_store(status, &store));

    store.subscribe(move |projects| {
        if list.try_update(|l| l.apply_snapshot(projects)).is_none() {
            log::debug!("{} list no longer mounted", status.slug());
        }
    });

    let on_drag_over = move |ev: DragEvent| {
        let types = drag_data::payload_types(&ev);
        if list.try_update(|l| l.drag_over(types.as_slice())).unwrap_or(false) {
            ev.prevent_default();
        }
    };
    let on_drag_leave = move |_ev: DragEvent| list.update(ProjectList::drag_leave);
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(data) = drag_data::payload(&ev) else {
            list.update(ProjectList::drag_leave);
            return;
        };
        // Release the list before the store notifies it.
        if let Some(id) = list.try_update(|l| l.finish_drop(&data)).flatten() {
            store.change_status(id, status);
        }
    };

    // Dragover fires continuously; memos keep it from re-rendering the items.
    let assigned = Memo::new(move |_| list.with(|l| l.assigned.clone()));
    let drag_over = Memo::new(move |_| list.with(|l| l.drop_zone.is_drag_over()));

    let (section_id, list_id, heading) =
        list.with_untracked(|l| (l.section_id(), l.list_id(), l.heading()));

    let content = view! {
        <header>
            <h2>{heading}</h2>
        </header>
        <ul id=list_id class=(DROPPABLE_CLASS, move || drag_over.get())>
            {move || {
                assigned
                    .get()
                    .into_iter()
                    .map(|project| view! { <ProjectItem project=project/> })
                    .collect::<Vec<_>>()
            }}
        </ul>
    };

    drop_target_shell(section_id, on_drag_over, on_drag_leave, on_drop, content)
}
