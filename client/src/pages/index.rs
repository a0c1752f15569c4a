//! Index page: tabbed todo list plus the creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It starts the initial fetch of the whole
//! collection, then shows the list for the active tab. Filtering happens on
//! the cached list, so switching tabs never hits the network.

use leptos::prelude::*;

use crate::components::create_todo_form::CreateTodoForm;
use crate::components::status_tabs::{StatusTabs, tab_id};
use crate::components::todo_list::TodoList;
use crate::net::sync;
use crate::state::todos::TodosState;
use crate::state::ui::UiState;

#[component]
pub fn IndexPage() -> impl IntoView {
    let todos = expect_context::<RwSignal<TodosState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    sync::ensure_loaded(todos);

    let active_tab = Signal::derive(move || ui.get().active_tab);

    view! {
        <main class="index-page">
            <div class="index-page__card">
                <h1 class="index-page__title">"Todo App"</h1>

                <StatusTabs/>

                <Show when=move || todos.with(|s| s.error.is_some())>
                    <p class="index-page__error" role="alert">
                        {move || todos.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <section
                    class="index-page__panel"
                    role="tabpanel"
                    aria-labelledby=move || tab_id(active_tab.get())
                >
                    <TodoList filter=active_tab/>
                </section>

                <div class="index-page__create">
                    <CreateTodoForm/>
                </div>
            </div>
        </main>
    }
}
