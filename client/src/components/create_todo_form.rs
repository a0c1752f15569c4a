//! Form for adding a new todo.

use leptos::prelude::*;

use crate::net::sync;
use crate::state::todos::TodosState;

/// Text input plus "Add" button. Enter submits; the input clears after the
/// server confirms the new todo.
#[component]
pub fn CreateTodoForm() -> impl IntoView {
    let todos = expect_context::<RwSignal<TodosState>>();
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sync::create_todo(todos, &draft.get_untracked(), move || draft.set(String::new()));
    };

    view! {
        <form class="create-todo" on:submit=on_submit>
            <label class="create-todo__label" for="create-todo-input">
                "New todo"
            </label>
            <input
                id="create-todo-input"
                class="create-todo__input"
                type="text"
                placeholder="Add a new todo"
                autocomplete="off"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button
                class="create-todo__submit"
                type="submit"
                disabled=move || todos.with(|s| s.create_pending) || draft.with(|d| d.trim().is_empty())
            >
                "Add"
            </button>
        </form>
    }
}
