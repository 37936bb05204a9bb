//! New-post page: auth guard around the shared composer form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::post_form::PostForm;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn PostNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="composer-page">
            <h1 class="composer-page__heading">"New Post"</h1>
            <PostForm/>
        </div>
    }
}
