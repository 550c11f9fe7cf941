//! Login Page

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::session::Session;

/// Sign-in form. A successful login persists the session and returns
/// the user to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();

        if email_value.trim().is_empty() || password_value.trim().is_empty() {
            state.show_error("Email and password are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let session_clone = session.clone();
        let navigate_clone = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok((token, user)) => {
                    session_clone.sign_in(token, user);
                    state_clone.show_success("Signed in");
                    navigate_clone("/", Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16">
            <div class="bg-white rounded-xl border border-gray-200 p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-1">"Sign in"</h1>
                <p class="text-gray-500 text-sm mb-6">
                    "Use your Cura Portal account to continue"
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:bg-gray-300
                               text-white rounded-lg font-medium transition-colors
                               flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign in"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
