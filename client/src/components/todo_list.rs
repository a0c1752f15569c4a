//! Todo list with per-row status checkbox and delete button.
//!
//! DESIGN
//! ======
//! Rows are rendered from the shared cache filtered by `filter`. Clicking a
//! checkbox or the delete button sends one request through `net::sync`; the
//! row only changes once the refetched list arrives. Completed rows carry the
//! `--completed` modifiers (muted background, struck-through label).

#[cfg(test)]
#[path = "todo_list_test.rs"]
mod todo_list_test;

use leptos::prelude::*;
use todos::{StatusFilter, Todo};

use crate::components::icons::{CheckIcon, XMarkIcon};
use crate::net::sync;
use crate::state::todos::TodosState;

/// Placeholder text shown when no rows match `filter`.
pub fn empty_message(filter: StatusFilter, loading: bool) -> &'static str {
    if loading {
        return "Loading todos...";
    }
    match filter {
        StatusFilter::All => "No todos yet.",
        StatusFilter::Pending => "No pending todos.",
        StatusFilter::Completed => "No completed todos.",
    }
}

/// DOM id shared by a row's checkbox and its label.
pub fn checkbox_id(id: i64) -> String {
    format!("todo-{id}")
}

/// Todos matching `filter`, one row each.
///
/// Triggers the initial fetch itself when mounted before anything else has.
#[component]
pub fn TodoList(#[prop(into)] filter: Signal<StatusFilter>) -> impl IntoView {
    let todos = expect_context::<RwSignal<TodosState>>();
    sync::ensure_loaded(todos);

    let rows = move || todos.with(|s| s.visible(filter.get()));
    let first_load = move || todos.with(|s| s.loading && !s.loaded);

    view! {
        <Show
            when=move || !rows().is_empty()
            fallback=move || {
                view! {
                    <p class="todo-list__empty">{move || empty_message(filter.get(), first_load())}</p>
                }
            }
        >
            <ul class="todo-list">
                <For
                    each=rows
                    key=|todo: &Todo| (todo.id, todo.status)
                    children=move |todo: Todo| view! { <TodoRow todo=todo/> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let todos = expect_context::<RwSignal<TodosState>>();
    let completed = todo.status.is_completed();
    let id = todo.id;
    let input_id = checkbox_id(id);
    let body = todo.body.clone();

    view! {
        <li class="todo-item" class:todo-item--completed=completed>
            <button
                type="button"
                role="checkbox"
                id=input_id.clone()
                class="todo-item__checkbox"
                class:todo-item__checkbox--checked=completed
                aria-checked=if completed { "true" } else { "false" }
                on:click=move |_| sync::toggle_status(todos, &todo)
            >
                {completed.then(|| view! { <CheckIcon class="todo-item__check"/> })}
            </button>
            <label class="todo-item__body" class:todo-item__body--completed=completed for=input_id>
                {body}
            </label>
            <button
                type="button"
                class="todo-item__delete"
                aria-label="Delete todo"
                title="Delete todo"
                on:click=move |_| sync::delete_todo(todos, id)
            >
                <XMarkIcon class="todo-item__delete-icon"/>
            </button>
        </li>
    }
}
