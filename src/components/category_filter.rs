//! Category filter chips for the feed.

use leptos::prelude::*;

use crate::state::categories::CategoriesState;

/// Horizontal chip row: "All" plus one chip per cached category. Selecting a
/// chip resets the feed to page zero via the parent's callback.
#[component]
pub fn CategoryFilter(selected: Signal<Option<String>>, on_select: Callback<Option<String>>) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();

    view! {
        <div class="category-filter">
            <button
                class="chip chip--all"
                class:chip--selected=move || selected.get().is_none()
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            {move || {
                categories
                    .get()
                    .items
                    .into_iter()
                    .map(|cat| {
                        let name = cat.name.clone();
                        let is_selected = {
                            let name = name.clone();
                            move || selected.get().as_deref() == Some(name.as_str())
                        };
                        view! {
                            <button
                                class=format!("chip chip--{}", cat.color)
                                class:chip--selected=is_selected
                                on:click=move |_| on_select.run(Some(name.clone()))
                            >
                                {cat.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
