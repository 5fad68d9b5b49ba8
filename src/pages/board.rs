//! Board page: the input form above the three status lists.

use leptos::prelude::*;

use crate::components::project_input::ProjectInputForm;
use crate::components::project_list::ProjectListView;
use crate::state::project::ProjectStatus;

/// The whole board. Expects a `ProjectStore` in context.
#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <div class="board-page">
            <ProjectInputForm/>
            {ProjectStatus::ALL
                .into_iter()
                .map(|status| view! { <ProjectListView status=status/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
