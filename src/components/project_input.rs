//! New-project form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::form::{
    DESCRIPTION_MAX_LEN, PEOPLE_MAX, PEOPLE_MIN, ProjectInput, report_submission,
};
use crate::state::store::ProjectStore;
use crate::util::alert::alert;

/// Form that validates its fields and adds a project to the store.
///
/// A rejected submission alerts the user and keeps what they typed.
#[component]
pub fn ProjectInputForm() -> impl IntoView {
    let store = expect_context::<ProjectStore>();
    let input = RwSignal::new(ProjectInput::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Alert after the update so the dialog never blocks with the form borrowed.
        if let Some(result) = input.try_update(|form| form.submit(&store)) {
            report_submission(result, alert);
        }
    };

    view! {
        <form id="user-input" on:submit=on_submit>
            <div class="form-control">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || input.with(|f| f.title.clone())
                    on:input=move |ev| input.update(|f| f.title = event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    maxlength={DESCRIPTION_MAX_LEN.to_string()}
                    prop:value=move || input.with(|f| f.description.clone())
                    on:input=move |ev| input.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-control">
                <label for="people">"People"</label>
                <input
                    type="number"
                    id="people"
                    step="1"
                    min={PEOPLE_MIN.to_string()}
                    max={PEOPLE_MAX.to_string()}
                    prop:value=move || input.with(|f| f.people.clone())
                    on:input=move |ev| input.update(|f| f.people = event_target_value(&ev))
                />
            </div>
            <button type="submit">"ADD PROJECT"</button>
        </form>
    }
}
