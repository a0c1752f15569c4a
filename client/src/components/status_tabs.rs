//! Tab strip for switching between all, pending, and completed todos.

#[cfg(test)]
#[path = "status_tabs_test.rs"]
mod status_tabs_test;

use leptos::prelude::*;
use todos::StatusFilter;

use crate::state::todos::TodosState;
use crate::state::ui::UiState;

/// DOM id of the tab trigger for `filter`, referenced by the tab panel.
pub fn tab_id(filter: StatusFilter) -> String {
    format!("todo-tab-{}", filter.label())
}

/// Count badge text for a tab; empty until the list has loaded once.
pub fn count_badge(state: &TodosState, filter: StatusFilter) -> String {
    if state.loaded { state.count(filter).to_string() } else { String::new() }
}

/// The three status tabs with per-tab counts. The active one carries
/// `aria-selected="true"`.
#[component]
pub fn StatusTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let todos = expect_context::<RwSignal<TodosState>>();

    view! {
        <div class="status-tabs" role="tablist" aria-label="Filter todos by status">
            {StatusFilter::ALL
                .into_iter()
                .map(|filter| {
                    let is_active = move || ui.get().active_tab == filter;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            id=tab_id(filter)
                            class="status-tabs__tab"
                            class:status-tabs__tab--active=is_active
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| ui.update(|u| u.active_tab = filter)
                        >
                            {filter.label()}
                            <span class="status-tabs__count">
                                {move || todos.with(|s| count_badge(s, filter))}
                            </span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
