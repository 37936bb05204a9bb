//! Feed page: category chips, sort selector, and the infinite-scroll grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. The first page shows skeleton cards
//! while loading; an `IntersectionObserver` on a sentinel div below the grid
//! appends the next page whenever it scrolls into view and more pages exist.

use leptos::prelude::*;

use crate::components::category_filter::CategoryFilter;
use crate::components::post_card::PostCard;
use crate::components::skeleton_grid::SkeletonGrid;
use crate::components::sort_selector::SortSelector;
use crate::state::feed::{FEED_PAGE_SIZE, FeedState, SortOrder};

#[component]
pub fn FeedPage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    // First page, or refetch after returning with a stale filter.
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() && feed.get_untracked().posts.is_empty() {
            load_page(feed, 0, false);
        }
    });

    let on_select_category = Callback::new(move |category: Option<String>| {
        feed.update(|f| {
            f.category = category;
            f.reset();
        });
        load_page(feed, 0, false);
    });

    let on_change_sort = Callback::new(move |sort: SortOrder| {
        feed.update(|f| {
            f.sort = sort;
            f.reset();
        });
        load_page(feed, 0, false);
    });

    let sentinel_ref = NodeRef::<leptos::html::Div>::new();
    install_scroll_sentinel(feed, sentinel_ref);

    let selected_category = Signal::derive(move || feed.get().category);
    let sort_value = Signal::derive(move || feed.get().sort);

    view! {
        <div class="feed-page">
            <div class="feed-page__controls">
                <CategoryFilter selected=selected_category on_select=on_select_category/>
                <SortSelector value=sort_value on_change=on_change_sort/>
            </div>

            <Show when=move || feed.get().error.is_some()>
                <p class="feed-page__error">{move || feed.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !(feed.get().loading && feed.get().posts.is_empty())
                fallback=move || view! { <SkeletonGrid/> }
            >
                <div class="feed-grid">
                    {move || {
                        feed.get()
                            .posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || feed.get().loading>
                    <p class="feed-page__loading-more">"Loading more..."</p>
                </Show>
            </Show>

            <div class="feed-page__sentinel" node_ref=sentinel_ref></div>
        </div>
    }
}

/// Fetch one feed page with the current filter/sort and fold it into state.
fn load_page(feed: RwSignal<FeedState>, page: i32, append: bool) {
    feed.update(|f| f.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (category, sort) = {
            let state = feed.get_untracked();
            (state.category, state.sort)
        };
        match crate::net::api::posts(category.as_deref(), sort.as_str(), None, page, FEED_PAGE_SIZE).await
        {
            Ok(fetched) => feed.update(|f| f.apply_page(fetched, append)),
            Err(e) => feed.update(|f| {
                f.loading = false;
                f.error = Some(format!("Could not load posts: {e}"));
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, append);
    }
}

/// Observe the sentinel below the grid and append the next page when it
/// becomes visible. The observer and its closure are torn down with the page.
fn install_scroll_sentinel(feed: RwSignal<FeedState>, sentinel_ref: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let observer_slot = StoredValue::new_local(None::<web_sys::IntersectionObserver>);
        let closure_slot = StoredValue::new_local(None::<Closure<dyn FnMut(js_sys::Array)>>);

        Effect::new(move || {
            let Some(sentinel) = sentinel_ref.get() else {
                return;
            };
            if observer_slot.with_value(Option::is_some) {
                return;
            }

            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                let intersecting = entries
                    .get(0)
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false);
                if !intersecting {
                    return;
                }
                let state = feed.get_untracked();
                if state.has_more && !state.loading {
                    load_page(feed, state.page + 1, true);
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

            if let Ok(observer) =
                web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            {
                observer.observe(&sentinel);
                observer_slot.set_value(Some(observer));
            }
            closure_slot.set_value(Some(callback));
        });

        on_cleanup(move || {
            if let Some(observer) = observer_slot.get_value() {
                observer.disconnect();
            }
            closure_slot.set_value(None);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (feed, sentinel_ref);
    }
}
