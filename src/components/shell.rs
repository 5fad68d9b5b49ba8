//! Shared container wiring for drop-target sections.

use leptos::ev::DragEvent;
use leptos::prelude::*;

/// A `<section>` that reacts to project drags, wrapping `content`.
pub fn drop_target_shell<DO, DL, DR, V>(
    id: String,
    on_drag_over: DO,
    on_drag_leave: DL,
    on_drop: DR,
    content: V,
) -> impl IntoView
where
    DO: FnMut(DragEvent) + 'static,
    DL: FnMut(DragEvent) + 'static,
    DR: FnMut(DragEvent) + 'static,
    V: IntoView + 'static,
{
    view! {
        <section
            class="projects"
            id=id
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            {content}
        </section>
    }
}
