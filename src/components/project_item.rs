//! A single draggable project card.

use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::state::drag::encode_payload;
use crate::state::project::Project;
use crate::util::drag_data;

/// One project in a status list. Dragging it carries the project id.
#[component]
pub fn ProjectItem(project: Project) -> impl IntoView {
    let id = project.id;
    let element_id = id.to_string();
    let assigned = project.assigned_label();

    let on_drag_start = move |ev: DragEvent| {
        drag_data::start_drag(&ev, &encode_payload(id));
    };
    let on_drag_end = move |_ev: DragEvent| {
        log::debug!("drag end: {id}");
    };

    view! {
        <li id=element_id draggable="true" on:dragstart=on_drag_start on:dragend=on_drag_end>
            <h2>{project.title}</h2>
            <h3>{assigned}</h3>
            <p>{project.description}</p>
        </li>
    }
}
