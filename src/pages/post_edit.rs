//! Edit-post page: loads the post, then reuses the composer form.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::post_form::PostForm;
use crate::net::types::Post;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn PostEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let post = RwSignal::new(None::<Post>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            loading.set(false);
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_post(id).await {
                Ok(fetched) => post.set(Some(fetched)),
                Err(e) => log::warn!("post fetch failed: {e}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    view! {
        <div class="composer-page">
            <h1 class="composer-page__heading">"Edit Post"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="composer-page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || post.get().is_some()
                    fallback=move || view! { <p class="composer-page__missing">"Post not found."</p> }
                >
                    {move || post.get().map(|editing| view! { <PostForm editing=editing/> })}
                </Show>
            </Show>
        </div>
    }
}
