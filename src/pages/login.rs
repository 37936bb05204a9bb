//! Login page with an inline register toggle.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let registering = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let finish_login = move |session: &crate::net::types::AuthSession| {
        crate::state::auth::persist_session(session);
        auth.set(AuthState::from_session(session));
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let nickname_value = nickname.get().trim().to_owned();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        if registering.get() && nickname_value.is_empty() {
            info.set("Pick a nickname first.".to_owned());
            return;
        }
        busy.set(true);
        info.set(if registering.get() { "Creating account..." } else { "Signing in..." }.to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if registering.get_untracked() {
                crate::net::api::register(&email_value, &password_value, &nickname_value).await
            } else {
                crate::net::api::login(&email_value, &password_value).await
            };
            match result {
                Ok(session) => finish_login(&session),
                Err(e) => {
                    info.set(e.message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, nickname_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Plaza"</h1>
                <p class="login-card__subtitle">
                    {move || if registering.get() { "Create an account" } else { "Welcome back" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || registering.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Nickname"
                            prop:value=move || nickname.get()
                            on:input=move |ev| nickname.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if registering.get() { "Register" } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button
                    class="login-toggle"
                    on:click=move |_| {
                        registering.update(|r| *r = !*r);
                        info.set(String::new());
                    }
                >
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
