//! Placeholder grid shown while the first feed page loads.

use leptos::prelude::*;

const SKELETON_COUNT: usize = 9;

#[component]
pub fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class="feed-grid feed-grid--skeleton" aria-hidden="true">
            {(0..SKELETON_COUNT)
                .map(|_| {
                    view! {
                        <div class="post-card post-card--skeleton">
                            <div class="post-card__image"></div>
                            <div class="post-card__body">
                                <span class="chip"></span>
                                <div class="post-card__title"></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
