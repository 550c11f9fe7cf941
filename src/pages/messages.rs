//! Messages Page
//!
//! Conversation view with one connected user. The conversation loads
//! oldest first; sending appends locally on success rather than
//! refetching the whole thread.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api;
use crate::api::client::ChatMessage;
use crate::components::Loading;
use crate::state::global::GlobalState;
use crate::state::session::{session_gate, Session, SessionGate};
use crate::util::format_day_time;

/// Conversation page component
#[component]
pub fn MessagesPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let params = use_params_map();
    let navigate = use_navigate();

    let counterpart_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (loading, set_loading) = create_signal(true);
    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    // Load the conversation. A missing session routes to login instead.
    let session_for_effect = session.clone();
    let navigate_for_effect = navigate.clone();
    create_effect(move |_| {
        let user_id = match counterpart_id.get() {
            Some(id) => id,
            None => {
                set_loading.set(false);
                return;
            }
        };

        let token = session_for_effect.token.get();
        let navigate = navigate_for_effect.clone();
        spawn_local(async move {
            let token = match session_gate(token.as_deref()) {
                SessionGate::Proceed => token.unwrap_or_default(),
                SessionGate::RedirectToLogin => {
                    navigate("/login", Default::default());
                    return;
                }
            };

            set_loading.set(true);

            match api::fetch_conversation(user_id, &token).await {
                Ok(list) => {
                    set_messages.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch conversation: {}", e).into(),
                    );
                }
            }

            set_loading.set(false);
        });
    });

    let state_for_send = state.clone();
    let session_for_send = session.clone();
    let navigate_for_send = navigate;
    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let content = draft.get();
        if content.trim().is_empty() {
            return;
        }

        let user_id = match counterpart_id.get() {
            Some(id) => id,
            None => return,
        };

        let token = session_for_send.token.get();
        let token = match session_gate(token.as_deref()) {
            SessionGate::Proceed => token.unwrap_or_default(),
            SessionGate::RedirectToLogin => {
                navigate_for_send("/login", Default::default());
                return;
            }
        };

        set_sending.set(true);

        let state = state_for_send.clone();
        let my_id = session_for_send.user.get().map(|u| u.id).unwrap_or(0);
        spawn_local(async move {
            match api::send_message(user_id, &content, &token).await {
                Ok(()) => {
                    set_messages.update(|list| {
                        list.push(ChatMessage {
                            sender_id: my_id,
                            content,
                            sent_at: chrono::Utc::now().timestamp_millis(),
                        });
                    });
                    set_draft.set(String::new());
                }
                Err(e) => {
                    state.show_error(&e.user_message());
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Messages"</h1>
                <p class="text-gray-500 mt-1">"Direct messages with your care contact"</p>
            </div>

            // Conversation
            {move || {
                if counterpart_id.get().is_none() {
                    return view! {
                        <div class="bg-white rounded-xl border border-gray-200 p-10 text-center">
                            <p class="text-gray-500">"This conversation does not exist."</p>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! {
                        <div class="py-16">
                            <Loading />
                        </div>
                    }.into_view();
                }

                let my_id = session.user.get().map(|u| u.id);
                let list = messages.get();
                if list.is_empty() {
                    view! {
                        <div class="bg-white rounded-xl border border-gray-200 p-10 text-center">
                            <div class="text-5xl mb-4">"💬"</div>
                            <p class="text-gray-500">
                                "No messages yet. Say hello to start the conversation."
                            </p>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="bg-white rounded-xl border border-gray-200 p-4 space-y-3">
                            {list.into_iter().map(|msg| {
                                let own = my_id == Some(msg.sender_id);
                                view! { <MessageBubble message=msg own=own /> }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            // Composer
            <form on:submit=on_send class="flex space-x-3">
                <input
                    type="text"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="flex-1 bg-white rounded-lg px-4 py-3 border border-gray-300
                           focus:border-teal-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || sending.get()
                    class="px-6 py-3 bg-teal-600 hover:bg-teal-700 disabled:bg-gray-300
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

/// Single chat bubble, aligned by author
#[component]
fn MessageBubble(message: ChatMessage, own: bool) -> impl IntoView {
    let align = if own { "justify-end" } else { "justify-start" };
    let bubble = if own {
        "bg-teal-600 text-white"
    } else {
        "bg-gray-100 text-gray-900"
    };
    let time_class = if own {
        "text-teal-100 text-xs mt-1"
    } else {
        "text-gray-400 text-xs mt-1"
    };
    let time = format_day_time(message.sent_at);

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[75%] rounded-xl px-4 py-2 {}", bubble)>
                <p class="whitespace-pre-wrap break-words">{message.content}</p>
                <p class=time_class>{time}</p>
            </div>
        </div>
    }
}
