//! Conversation list page with a start-by-nickname flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;
use crate::util::time;

#[component]
pub fn ConversationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let conversations = RwSignal::new(Vec::<Conversation>::new());
    let loading = RwSignal::new(true);
    let nickname = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::conversations().await {
            Ok(list) => conversations.set(list),
            Err(e) => log::warn!("conversation fetch failed: {e}"),
        }
        loading.set(false);
    });

    let on_start = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = nickname.get().trim().to_owned();
        if target.is_empty() {
            return;
        }
        if Some(target.as_str()) == auth.get_untracked().nickname.as_deref() {
            info.set("You cannot message yourself.".to_owned());
            return;
        }
        info.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::start_conversation(&target).await {
                Ok(id) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&format!("/conversations/{id}"));
                    }
                }
                Err(e) => info.set(format!("Could not start conversation: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    };

    view! {
        <div class="conversations-page">
            <h1 class="conversations-page__heading">"Messages"</h1>

            <form class="conversations-page__start" on:submit=on_start>
                <input
                    class="conversations-page__input"
                    type="text"
                    placeholder="Start a chat by nickname..."
                    prop:value=move || nickname.get()
                    on:input=move |ev| nickname.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Start"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="conversations-page__info">{move || info.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="conversations-page__loading">"Loading..."</p> }
            >
                <ul class="conversations-page__list">
                    {move || {
                        conversations
                            .get()
                            .into_iter()
                            .map(|conv| {
                                let href = format!("/conversations/{}", conv.id);
                                let title = conv
                                    .other_nickname
                                    .clone()
                                    .unwrap_or_else(|| "Conversation".to_owned());
                                view! {
                                    <li class="conversation-row">
                                        <a class="conversation-row__link" href=href>
                                            <span class="conversation-row__name">
                                                {title}
                                                {conv
                                                    .other_left
                                                    .then(|| {
                                                        view! {
                                                            <span class="conversation-row__left">"(left)"</span>
                                                        }
                                                    })}
                                            </span>
                                            <span class="conversation-row__last">
                                                {conv.last_message.clone().unwrap_or_default()}
                                            </span>
                                            <span class="conversation-row__date">
                                                {time::relative_label(
                                                    &conv.updated_at,
                                                    time::now_epoch_seconds(),
                                                )}
                                            </span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || conversations.get().is_empty()>
                    <p class="conversations-page__empty">"No conversations yet."</p>
                </Show>
            </Show>
        </div>
    }
}
