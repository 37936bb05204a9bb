//! Chat room page: message transcript, composer, and the realtime transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns its `ChatState` signal and the transport handle. History
//! loads over REST first; the STOMP subscription and the 3-second poll then
//! feed the same deduplicating merge, so the transcript is identical
//! whichever source wins a race. Teardown stops both loops.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::util::dialog::confirm;
use crate::util::guard::install_unauth_redirect;
use crate::util::time;

#[component]
pub fn ChatRoomPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let conversation_id = Signal::derive(move || {
        params.read().get("id").and_then(|raw| raw.parse::<i64>().ok())
    });

    let chat = RwSignal::new(ChatState::opening());
    let input = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let handle_slot = StoredValue::new_local(None::<crate::net::chat_client::ChatHandle>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(id) = conversation_id.get() else {
                return;
            };
            if handle_slot.with_value(Option::is_some) {
                return;
            }
            let nickname = auth.get_untracked().nickname;

            // History first, then the realtime sources.
            let history_nickname = nickname.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::conversation_messages(id).await {
                    Ok(msgs) => chat.update(|c| {
                        c.absorb_all(msgs, history_nickname.as_deref());
                        c.loading = false;
                    }),
                    Err(e) => {
                        log::warn!("message history fetch failed: {e}");
                        chat.update(|c| c.loading = false);
                    }
                }
            });

            handle_slot.set_value(Some(crate::net::chat_client::spawn_chat_client(id, chat, nickname)));
        });

        on_cleanup(move || {
            if let Some(handle) = handle_slot.get_value() {
                handle.shutdown();
            }
        });
    }

    // Pin the transcript to the newest message.
    let bottom_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _count = chat.with(|c| c.messages.len());
        if let Some(bottom) = bottom_ref.get() {
            bottom.scroll_into_view();
        }
    });

    let send_blocked = move || {
        let state = chat.get();
        state.other_left || !state.connected
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = input.get().trim().to_owned();
        if content.is_empty() || send_blocked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let sent = handle_slot
                .with_value(|slot| slot.as_ref().map(|handle| handle.send(&content)))
                .unwrap_or(false);
            if sent {
                input.set(String::new());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = content;
    };

    let on_leave = move |_| {
        let Some(id) = conversation_id.get_untracked() else {
            return;
        };
        if !confirm("Leave this conversation?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::leave_conversation(id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/conversations");
                    }
                }
                Err(e) => log::warn!("leave failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let self_nickname = move || auth.get().nickname;

    view! {
        <div class="chat-room">
            <header class="chat-room__bar">
                <a class="chat-room__back" href="/conversations">
                    "←"
                </a>
                <span class="chat-room__peer">
                    {move || chat.get().other_nickname.unwrap_or_else(|| "Conversation".to_owned())}
                </span>
                <Show when=move || chat.get().other_left>
                    <span class="chat-room__left-tag">"(left)"</span>
                </Show>
                <Show when=move || !chat.get().connected>
                    <span class="chat-room__offline-tag">"reconnecting..."</span>
                </Show>
                <span class="chat-room__spacer"></span>
                <button class="btn btn--danger chat-room__leave" on:click=on_leave>
                    "Leave"
                </button>
            </header>

            <div class="chat-room__messages">
                <Show when=move || chat.get().loading>
                    <p class="chat-room__loading">"Loading..."</p>
                </Show>
                {move || {
                    let mine = self_nickname();
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            if msg.system_message {
                                view! {
                                    <div class="chat-bubble chat-bubble--system">
                                        <span>{msg.content.clone()}</span>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let is_mine = msg.sender_nickname == mine;
                                let sender = msg.sender_nickname.clone().unwrap_or_default();
                                view! {
                                    <div
                                        class="chat-bubble"
                                        class:chat-bubble--mine=is_mine
                                        class:chat-bubble--theirs=!is_mine
                                    >
                                        <Show when=move || !is_mine>
                                            <span class="chat-bubble__sender">{sender.clone()}</span>
                                        </Show>
                                        <span class="chat-bubble__body">{msg.content.clone()}</span>
                                        <span class="chat-bubble__time">
                                            {time::clock_label(&msg.created_at)}
                                        </span>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="chat-room__bottom" node_ref=bottom_ref></div>
            </div>

            <form class="chat-room__composer" on:submit=on_send>
                <input
                    class="chat-room__input"
                    type="text"
                    placeholder=move || {
                        if chat.get().other_left {
                            "The other participant left this conversation"
                        } else {
                            "Type a message..."
                        }
                    }
                    disabled=move || chat.get().other_left
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || send_blocked() || input.get().trim().is_empty()
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
