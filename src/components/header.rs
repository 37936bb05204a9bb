//! Top navigation bar shown on every route.

use leptos::prelude::*;

use crate::components::category_request_modal::CategoryRequestModal;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// App header: logo, primary nav, and auth-aware actions. Admins get a link
/// to the category admin page; logged-in users can open the category-request
/// modal from here.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        crate::state::auth::clear_session();
        auth.set(AuthState::cleared());
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    let on_request_category = move |_| {
        ui.update(|u| u.category_request_open = true);
    };

    view! {
        <header class="header">
            <a class="header__logo" href="/">
                "Plaza"
            </a>

            <nav class="header__nav">
                <a class="header__link" href="/">
                    "Feed"
                </a>
                <Show when=move || auth.get().logged_in>
                    <a class="header__link" href="/conversations">
                        "Messages"
                    </a>
                    <a class="header__link" href="/profile">
                        "Profile"
                    </a>
                </Show>
                <Show when=move || auth.get().is_admin()>
                    <a class="header__link header__link--admin" href="/admin">
                        "Admin"
                    </a>
                </Show>
            </nav>

            <span class="header__spacer"></span>

            <Show
                when=move || auth.get().logged_in
                fallback=move || {
                    view! {
                        <a class="btn header__login" href="/login">
                            "Log in"
                        </a>
                    }
                }
            >
                <a class="btn btn--primary header__new-post" href="/posts/new">
                    "+ New Post"
                </a>
                <button class="btn header__request-category" on:click=on_request_category>
                    "Request Category"
                </button>
                <span class="header__self">{move || auth.get().nickname.unwrap_or_default()}</span>
                <button class="btn header__logout" on:click=on_logout title="Log out">
                    "Log out"
                </button>
            </Show>
        </header>
        <Show when=move || ui.get().category_request_open>
            <CategoryRequestModal/>
        </Show>
    }
}
