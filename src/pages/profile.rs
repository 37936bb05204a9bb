//! Profile page: the current user's posts and bookmarks, paged.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::post_card::PostCard;
use crate::net::types::{Page, Post};
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

const PROFILE_PAGE_SIZE: i32 = 12;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Posts,
    Bookmarks,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let tab = RwSignal::new(ProfileTab::Posts);
    let posts = RwSignal::new(Vec::<Post>::new());
    let page = RwSignal::new(0_i32);
    let has_more = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let load = move |page_num: i32, append: bool| {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let current_tab = tab.get_untracked();
            leptos::task::spawn_local(async move {
                let result: Result<Page<Post>, _> = match current_tab {
                    ProfileTab::Posts => crate::net::api::my_posts(page_num, PROFILE_PAGE_SIZE).await,
                    ProfileTab::Bookmarks => {
                        crate::net::api::my_bookmarks(page_num, PROFILE_PAGE_SIZE).await
                    }
                };
                match result {
                    Ok(fetched) => {
                        has_more.set(!fetched.last);
                        page.set(fetched.number);
                        if append {
                            posts.update(|list| list.extend(fetched.content));
                        } else {
                            posts.set(fetched.content);
                        }
                    }
                    Err(e) => log::warn!("profile fetch failed: {e}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page_num, append);
            loading.set(false);
        }
    };

    // First load, and reload when the user switches tabs or finishes
    // logging in.
    Effect::new(move || {
        tab.track();
        if !auth.get().logged_in {
            return;
        }
        posts.set(Vec::new());
        load(0, false);
    });

    let select_tab = move |next: ProfileTab| {
        if tab.get_untracked() != next {
            tab.set(next);
        }
    };

    view! {
        <div class="profile-page">
            <h1 class="profile-page__heading">
                {move || auth.get().nickname.unwrap_or_else(|| "Profile".to_owned())}
            </h1>

            <div class="profile-page__tabs">
                <button
                    class="profile-page__tab"
                    class:profile-page__tab--active=move || tab.get() == ProfileTab::Posts
                    on:click=move |_| select_tab(ProfileTab::Posts)
                >
                    "My Posts"
                </button>
                <button
                    class="profile-page__tab"
                    class:profile-page__tab--active=move || tab.get() == ProfileTab::Bookmarks
                    on:click=move |_| select_tab(ProfileTab::Bookmarks)
                >
                    "Bookmarks"
                </button>
            </div>

            <Show
                when=move || !(loading.get() && posts.get().is_empty())
                fallback=move || view! { <p class="profile-page__loading">"Loading..."</p> }
            >
                <div class="feed-grid">
                    {move || {
                        posts
                            .get()
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || posts.get().is_empty()>
                    <p class="profile-page__empty">
                        {move || {
                            match tab.get() {
                                ProfileTab::Posts => "You have not posted anything yet.",
                                ProfileTab::Bookmarks => "No bookmarks yet.",
                            }
                        }}
                    </p>
                </Show>
                <Show when=move || has_more.get()>
                    <button
                        class="btn profile-page__more"
                        disabled=move || loading.get()
                        on:click=move |_| load(page.get_untracked() + 1, true)
                    >
                        "Load more"
                    </button>
                </Show>
            </Show>
        </div>
    }
}
