//! Realtime chat transport: STOMP over WebSocket plus a polling fallback.
//!
//! The client manages the socket lifecycle per open chat room: connect,
//! STOMP handshake, subscribe to the conversation topic, dispatch pushed
//! messages into `ChatState`, and reconnect after a fixed delay on
//! disconnect. A second task polls the REST message list every three
//! seconds; both sources funnel through the same id-deduplicating merge, so
//! whichever arrives first wins and the other is a no-op.
//!
//! All socket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Socket failures log a console warning and fall back to the reconnect
//! delay; poll failures are swallowed entirely (the next tick retries), so a
//! flaky network degrades to 3-second latency instead of an error state.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use crate::net::types::ChatMessage;

/// Fixed reconnect delay after a dropped socket, matching the broker
/// client's `reconnectDelay`.
pub const RECONNECT_DELAY_MS: u32 = 5_000;

/// Fixed interval for the REST polling fallback.
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// Broker topic carrying pushes for one conversation.
#[must_use]
pub fn topic_destination(conversation_id: i64) -> String {
    format!("/topic/messages/{conversation_id}")
}

/// Application destination for publishing into one conversation.
#[must_use]
pub fn app_destination(conversation_id: i64) -> String {
    format!("/app/chat/{conversation_id}")
}

/// Body for an outgoing chat publish.
#[must_use]
pub fn chat_send_payload(content: &str) -> serde_json::Value {
    serde_json::json!({ "content": content })
}

/// Decode a pushed `MESSAGE` body. Returns `None` for bodies that are not a
/// chat message; unknown pushes are skipped rather than surfaced.
#[must_use]
pub fn parse_pushed_message(body: &str) -> Option<ChatMessage> {
    serde_json::from_str(body).ok()
}

/// WebSocket endpoint derived from page scheme/host, with a compile-time
/// override for split-origin dev setups.
#[must_use]
pub fn ws_endpoint(secure: bool, host: &str) -> String {
    if let Some(url) = option_env!("PLAZA_WS_URL") {
        return url.to_owned();
    }
    let proto = if secure { "wss" } else { "ws" };
    format!("{proto}://{host}/ws")
}

/// Handle owned by the chat room component. Dropping the page calls
/// [`ChatHandle::shutdown`] via `on_cleanup`, which stops both loops.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ChatHandle {
    conversation_id: i64,
    alive: std::rc::Rc<std::cell::Cell<bool>>,
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

#[cfg(feature = "hydrate")]
impl ChatHandle {
    /// Publish a message over STOMP. Returns `false` when no socket is
    /// connected (the composer disables itself on `!chat.connected`).
    pub fn send(&self, content: &str) -> bool {
        let frame = crate::net::stomp::send_frame(
            &app_destination(self.conversation_id),
            &chat_send_payload(content),
        );
        self.tx.unbounded_send(crate::net::stomp::encode_frame(&frame)).is_ok()
    }

    /// Stop the socket and poll loops. Idempotent.
    pub fn shutdown(&self) {
        self.alive.set(false);
        self.tx.close_channel();
    }
}

/// Spawn the socket and poll loops for one conversation.
#[cfg(feature = "hydrate")]
pub fn spawn_chat_client(
    conversation_id: i64,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    self_nickname: Option<String>,
) -> ChatHandle {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let alive = std::rc::Rc::new(std::cell::Cell::new(true));

    let handle = ChatHandle { conversation_id, alive: alive.clone(), tx: tx.clone() };

    leptos::task::spawn_local(socket_loop(
        conversation_id,
        chat,
        self_nickname.clone(),
        alive.clone(),
        tx,
        rx,
    ));
    leptos::task::spawn_local(poll_loop(conversation_id, chat, self_nickname, alive));

    handle
}

/// Connection loop: connect, run until disconnect, wait, repeat.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    conversation_id: i64,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    self_nickname: Option<String>,
    alive: std::rc::Rc<std::cell::Cell<bool>>,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Update;

    let rx = std::rc::Rc::new(std::cell::RefCell::new(rx));

    while alive.get() {
        let url = browser_ws_endpoint();
        match connect_and_run(&url, conversation_id, chat, self_nickname.as_deref(), &alive, &tx, &rx).await
        {
            Ok(()) => log::info!("chat socket closed"),
            Err(e) => log::warn!("chat socket error: {e}"),
        }
        chat.update(|c| c.connected = false);

        if !alive.get() {
            break;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(RECONNECT_DELAY_MS))).await;
    }
}

#[cfg(feature = "hydrate")]
fn browser_ws_endpoint() -> String {
    let secure = web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|p| p == "https:");
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8080".to_owned());
    ws_endpoint(secure, &host)
}

/// Open the socket, perform the STOMP handshake, and process frames until
/// the connection drops.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    conversation_id: i64,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    self_nickname: Option<&str>,
    alive: &std::rc::Rc<std::cell::Cell<bool>>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    use crate::net::stomp;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let host = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_else(|| "localhost".to_owned());
    let connect = stomp::connect_frame(&host, crate::state::auth::stored_token().as_deref());
    ws_write
        .send(Message::Text(stomp::encode_frame(&connect)))
        .await
        .map_err(|e| e.to_string())?;

    // Forward outgoing SEND frames from the handle's channel.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(raw) = rx_borrow.next().await {
            if ws_write.send(Message::Text(raw)).await.is_err() {
                break;
            }
        }
        // Channel closed by shutdown: say goodbye so the broker drops the
        // subscription promptly.
        let _ = ws_write
            .send(Message::Text(stomp::encode_frame(&stomp::disconnect_frame())))
            .await;
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match stomp::parse_frame(&text) {
                    Ok(Some(frame)) => {
                        handle_broker_frame(&frame, conversation_id, chat, self_nickname, tx);
                    }
                    Ok(None) => {} // heartbeat
                    Err(e) => log::warn!("unparseable STOMP frame: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("chat socket recv error: {e}");
                    break;
                }
            }
            if !alive.get() {
                break;
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    chat.update(|c| c.connected = false);

    Ok(())
}

/// Dispatch one broker frame into chat state. The topic subscription is sent
/// once the handshake completes.
#[cfg(feature = "hydrate")]
fn handle_broker_frame(
    frame: &crate::net::stomp::Frame,
    conversation_id: i64,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    self_nickname: Option<&str>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
) {
    use leptos::prelude::Update;

    use crate::net::stomp::{self, Command};

    match frame.command {
        Command::Connected => {
            let subscribe = stomp::subscribe_frame("sub-0", &topic_destination(conversation_id));
            let _ = tx.unbounded_send(stomp::encode_frame(&subscribe));
            chat.update(|c| c.connected = true);
        }
        Command::Message => {
            if let Some(msg) = parse_pushed_message(&frame.body) {
                chat.update(|c| {
                    c.absorb(msg, self_nickname);
                });
            }
        }
        Command::Error => {
            log::warn!(
                "broker ERROR frame: {}",
                frame.header_value("message").unwrap_or(&frame.body)
            );
        }
        _ => {}
    }
}

/// Polling fallback: union the REST message list into state every tick.
/// Failures are ignored; the next tick retries.
#[cfg(feature = "hydrate")]
async fn poll_loop(
    conversation_id: i64,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    self_nickname: Option<String>,
    alive: std::rc::Rc<std::cell::Cell<bool>>,
) {
    use leptos::prelude::Update;

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(POLL_INTERVAL_MS))).await;
        if !alive.get() {
            break;
        }
        if let Ok(msgs) = crate::net::api::conversation_messages(conversation_id).await {
            chat.update(|c| {
                c.absorb_all(msgs, self_nickname.as_deref());
            });
        }
    }
}
