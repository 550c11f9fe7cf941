//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                state.success.get().map(|msg| toast_card("✓", "bg-green-600", msg))
            }}

            // Error toast
            {move || {
                state.error.get().map(|msg| toast_card("✕", "bg-red-600", msg))
            }}
        </div>
    }
}

/// One toast card
fn toast_card(icon: &'static str, bg_class: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
