//! Per-project chat panel
//!
//! Loads the message history over REST and joins the project feed over a
//! WebSocket. Sent messages are not appended locally; the insert event
//! comes back through the feed like everyone else's, so duplicates from
//! at-least-once delivery render as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::core::chat::ChatMessage;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Connection state for the feed socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

impl ConnectionState {
    pub fn display_name(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "Offline",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Live",
            ConnectionState::Error => "Error",
        }
    }

    fn dot_class(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "bg-gray-400",
            ConnectionState::Connecting => "bg-yellow-400 animate-pulse",
            ConnectionState::Connected => "bg-green-500",
            ConnectionState::Error => "bg-red-500",
        }
    }
}

/// Chat panel for one project
#[component]
pub fn ChatPanel(
    /// Project whose feed to join
    project_id: Uuid,
    /// Title shown in the panel header
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let session = use_session_context();

    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let connection_state = RwSignal::new(ConnectionState::default());
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let list_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        // Load history and subscribe after hydration
        Effect::new(move |_| {
            spawn_local(async move {
                match fetch_history(project_id).await {
                    // Events can arrive while history is in flight, keep
                    // them after the fetched prefix
                    Ok(history) => messages.update(|all| {
                        let mut merged = history;
                        merged.append(all);
                        *all = merged;
                    }),
                    Err(e) => error.set(Some(e)),
                }
            });
            socket::connect(project_id, connection_state, messages, error);
        });

        // Keep the newest message in view
        Effect::new(move |_| {
            let count = messages.with(|all| all.len());
            if count == 0 {
                return;
            }
            if let Some(el) = list_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });

        on_cleanup(|| socket::disconnect());
    }

    // Handle message submission
    let handle_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let body = draft.get();
        if body.trim().is_empty() || sending.get_untracked() {
            return;
        }
        let sender = session
            .session()
            .map(|s| s.username)
            .unwrap_or_else(|| "guest".to_string());

        sending.set(true);
        error.set(None);

        spawn_local(async move {
            // The insert comes back through the feed, nothing is appended here
            match send_chat_message(project_id, &sender, &body).await {
                Ok(()) => draft.set(String::new()),
                Err(e) => error.set(Some(e)),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="flex flex-col h-full bg-theme-primary border border-theme rounded-xl overflow-hidden">
            // Header with connection indicator
            <div class="flex items-center justify-between px-4 py-3 border-b border-theme">
                <h3 class="text-sm font-semibold text-theme-primary truncate">{title}</h3>
                <div class="flex items-center gap-1.5">
                    <span class=move || {
                        format!("w-2 h-2 rounded-full {}", connection_state.get().dot_class())
                    }></span>
                    <span class="text-xs text-theme-tertiary">
                        {move || connection_state.get().display_name()}
                    </span>
                </div>
            </div>

            // Error banner
            {move || {
                error.get().map(|message| {
                    view! {
                        <div class="px-4 py-2 bg-red-100 dark:bg-red-900/30 border-b border-red-300 dark:border-red-700 flex items-center justify-between gap-2">
                            <p class="text-xs text-red-700 dark:text-red-300">{message}</p>
                            <button
                                type="button"
                                class="text-red-500 hover:text-red-700 shrink-0"
                                on:click=move |_| error.set(None)
                            >
                                <Icon name=icons::X class="h-3.5 w-3.5" />
                            </button>
                        </div>
                    }
                })
            }}

            // Message list
            <div node_ref=list_ref class="flex-1 overflow-y-auto px-4 py-3 space-y-3">
                {move || {
                    let all = messages.get();
                    if all.is_empty() {
                        view! {
                            <p class="text-sm text-theme-tertiary text-center py-6">
                                "No messages yet. Say hello to get the project moving."
                            </p>
                        }
                            .into_any()
                    } else {
                        let own_username = session.session().map(|s| s.username);
                        all.into_iter()
                            .map(|message| {
                                let own =
                                    own_username.as_deref() == Some(message.sender.as_str());
                                view! { <MessageRow message own /> }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            // Composer
            <form on:submit=handle_send class="flex items-center gap-2 px-3 py-2 border-t border-theme">
                <input
                    type="text"
                    placeholder="Write a message..."
                    class="flex-1 px-3 py-2 text-sm bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="p-2 rounded-lg bg-accent-primary hover:bg-accent-primary-hover
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    disabled=move || sending.get()
                >
                    {move || {
                        if sending.get() {
                            view! { <Icon name=icons::LOADER class="animate-spin h-4 w-4 text-white" /> }
                                .into_any()
                        } else {
                            view! { <Icon name=icons::SEND class="h-4 w-4 text-white" /> }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

/// One message in the list
#[component]
fn MessageRow(message: ChatMessage, own: bool) -> impl IntoView {
    // HH:MM slice of the RFC3339 timestamp
    let time = message.sent_at.get(11..16).unwrap_or_default().to_string();

    let (align, bubble) = if own {
        (
            "flex flex-col items-end",
            "px-3 py-1.5 rounded-xl rounded-tr-sm bg-accent-primary text-white text-sm max-w-[85%]",
        )
    } else {
        (
            "flex flex-col items-start",
            "px-3 py-1.5 rounded-xl rounded-tl-sm bg-theme-secondary text-theme-primary text-sm max-w-[85%]",
        )
    };

    view! {
        <div class=align>
            <div class="flex items-baseline gap-2 px-1">
                <span class="text-xs font-medium text-theme-secondary">{message.sender.clone()}</span>
                <span class="text-[10px] text-theme-tertiary">{time}</span>
            </div>
            <p class=bubble>{message.body.clone()}</p>
        </div>
    }
}

/// Fetch the message history for a project
#[cfg(not(feature = "ssr"))]
async fn fetch_history(project_id: Uuid) -> Result<Vec<ChatMessage>, String> {
    use crate::core::chat::FeedHistoryResponse;

    let response = gloo_net::http::Request::get(&format!("/api/projects/{}/messages", project_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        let history: FeedHistoryResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(history.messages)
    } else {
        Err(format!(
            "Could not load messages (status {})",
            response.status()
        ))
    }
}

#[cfg(feature = "ssr")]
async fn fetch_history(_project_id: Uuid) -> Result<Vec<ChatMessage>, String> {
    Err("Chat history is only reachable from the browser".to_string())
}

/// Send a message to a project thread
#[cfg(not(feature = "ssr"))]
async fn send_chat_message(project_id: Uuid, sender: &str, body: &str) -> Result<(), String> {
    use crate::core::chat::{FeedError, SendMessageRequest};

    let request = SendMessageRequest {
        sender: sender.to_string(),
        body: body.to_string(),
    };

    let response = gloo_net::http::Request::post(&format!("/api/projects/{}/messages", project_id))
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        match response.json::<FeedError>().await {
            Ok(err) => Err(err.error),
            Err(_) => Err(format!("Send failed (status {})", response.status())),
        }
    }
}

#[cfg(feature = "ssr")]
async fn send_chat_message(_project_id: Uuid, _sender: &str, _body: &str) -> Result<(), String> {
    Err("Chat is only reachable from the browser".to_string())
}

#[cfg(not(feature = "ssr"))]
mod socket {
    use std::cell::RefCell;

    use leptos::prelude::*;
    use leptos::wasm_bindgen::{JsCast, closure::Closure};
    use leptos::web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};
    use uuid::Uuid;

    use super::ConnectionState;
    use crate::core::chat::{ChatMessage, FeedEvent};

    /// Open socket plus the handlers wired into it. Handlers are dropped
    /// with the socket on teardown instead of being leaked.
    struct FeedSocket {
        ws: WebSocket,
        _onopen: Closure<dyn FnMut(leptos::web_sys::Event)>,
        _onmessage: Closure<dyn FnMut(MessageEvent)>,
        _onclose: Closure<dyn FnMut(CloseEvent)>,
        _onerror: Closure<dyn FnMut(ErrorEvent)>,
    }

    // One feed subscription at a time; connecting replaces the previous socket
    thread_local! {
        static SOCKET: RefCell<Option<FeedSocket>> = const { RefCell::new(None) };
    }

    /// Join the feed for a project.
    pub fn connect(
        project_id: Uuid,
        connection_state: RwSignal<ConnectionState>,
        messages: RwSignal<Vec<ChatMessage>>,
        error: RwSignal<Option<String>>,
    ) {
        // Replace any previous subscription
        disconnect();

        connection_state.set(ConnectionState::Connecting);

        // Build WebSocket URL
        let window = leptos::web_sys::window().expect("no window");
        let location = window.location();
        let protocol = if location.protocol().unwrap_or_default() == "https:" {
            "wss:"
        } else {
            "ws:"
        };
        let host = location
            .host()
            .unwrap_or_else(|_| "localhost:3000".to_string());
        let ws_url = format!("{}//{}/chat/{}", protocol, host, project_id);

        let ws = match WebSocket::new(&ws_url) {
            Ok(ws) => ws,
            Err(e) => {
                connection_state.set(ConnectionState::Error);
                error.set(Some(format!("Failed to open feed socket: {:?}", e)));
                return;
            }
        };

        let onopen = Closure::wrap(Box::new(move |_: leptos::web_sys::Event| {
            connection_state.set(ConnectionState::Connected);
        }) as Box<dyn FnMut(leptos::web_sys::Event)>);
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));

        let onmessage = Closure::wrap(Box::new(move |e: MessageEvent| {
            if let Some(text) = e.data().as_string() {
                handle_event(&text, messages, error);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let onclose = Closure::wrap(Box::new(move |_: CloseEvent| {
            connection_state.set(ConnectionState::Disconnected);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        let onerror = Closure::wrap(Box::new(move |_: ErrorEvent| {
            connection_state.set(ConnectionState::Error);
            error.set(Some("Live connection error".to_string()));
        }) as Box<dyn FnMut(ErrorEvent)>);
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        SOCKET.with(|cell| {
            *cell.borrow_mut() = Some(FeedSocket {
                ws,
                _onopen: onopen,
                _onmessage: onmessage,
                _onclose: onclose,
                _onerror: onerror,
            });
        });
    }

    /// Handle one incoming feed event
    fn handle_event(
        text: &str,
        messages: RwSignal<Vec<ChatMessage>>,
        error: RwSignal<Option<String>>,
    ) {
        let event: FeedEvent = match serde_json::from_str(text) {
            Ok(event) => event,
            Err(e) => {
                leptos::logging::warn!("Failed to parse feed event: {}", e);
                return;
            }
        };

        match event {
            // Duplicates are appended as-is, delivery is at-least-once
            FeedEvent::Inserted { message } => messages.update(|all| all.push(message)),
            FeedEvent::Error { code, message } => {
                leptos::logging::warn!("Feed error {:?}: {}", code, message);
                error.set(Some(message));
            }
        }
    }

    /// Close the socket and drop its handlers.
    pub fn disconnect() {
        SOCKET.with(|cell| {
            if let Some(socket) = cell.borrow_mut().take() {
                // Detach handlers before close so late events cannot fire
                // into dropped closures
                socket.ws.set_onopen(None);
                socket.ws.set_onmessage(None);
                socket.ws.set_onclose(None);
                socket.ws.set_onerror(None);
                let _ = socket.ws.close();
            }
        });
    }
}
