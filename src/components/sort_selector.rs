//! Sort dropdown for the feed.

use leptos::prelude::*;

use crate::state::feed::SortOrder;

#[component]
pub fn SortSelector(value: Signal<SortOrder>, on_change: Callback<SortOrder>) -> impl IntoView {
    view! {
        <select
            class="sort-selector"
            on:change=move |ev| on_change.run(SortOrder::from_str(&event_target_value(&ev)))
        >
            {SortOrder::ALL
                .iter()
                .map(|sort| {
                    let sort = *sort;
                    view! {
                        <option value=sort.as_str() selected=move || value.get() == sort>
                            {sort.label()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
