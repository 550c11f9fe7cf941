//! Message Button Component
//!
//! Entry point into a conversation. Applies the sign-in gate, runs a
//! best-effort existence probe, and navigates. No probe outcome blocks the
//! navigation; outcomes go to the console.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::session::{session_gate, Session, SessionGate};

/// Button opening the conversation with one user
#[component]
pub fn MessageButton(user_id: u32) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let (probing, set_probing) = create_signal(false);

    let on_click = move |_| {
        let token = session.token.get();
        match session_gate(token.as_deref()) {
            SessionGate::RedirectToLogin => {
                navigate("/login", Default::default());
            }
            SessionGate::Proceed => {
                set_probing.set(true);

                let token = token.unwrap_or_default();
                let navigate = navigate.clone();
                spawn_local(async move {
                    match api::fetch_conversation(user_id, &token).await {
                        Ok(messages) => {
                            web_sys::console::log_1(
                                &format!("Conversation probe: {} message(s)", messages.len())
                                    .into(),
                            );
                        }
                        Err(e) => {
                            // Tolerated: the probe never blocks navigation
                            web_sys::console::error_1(
                                &format!("Conversation probe failed: {}", e).into(),
                            );
                        }
                    }
                    set_probing.set(false);
                    navigate(&format!("/messages/{}", user_id), Default::default());
                });
            }
        }
    };

    view! {
        <button
            on:click=on_click
            disabled=move || probing.get()
            class="px-3 py-1.5 bg-teal-600 hover:bg-teal-700 disabled:bg-gray-300 text-white
                   rounded-lg text-sm font-medium transition-colors"
        >
            {move || if probing.get() { "Opening..." } else { "Message" }}
        </button>
    }
}
