//! Navigation Component
//!
//! Header navigation bar with brand, links, and the session controls.

use leptos::*;
use leptos_router::*;

use crate::state::session::Session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🩺"</span>
                        <span class="text-xl font-bold text-teal-700">"Cura Portal"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/health-talk" label="Health Talk" />
                    </div>

                    // Signed-in user or sign-in link
                    <SessionBox />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-teal-50 text-teal-700"
        >
            {label}
        </A>
    }
}

/// Signed-in user name with a sign-out action, or a sign-in link
#[component]
fn SessionBox() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let session_for_click = session.clone();
    let sign_out = move |_| {
        session_for_click.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        {move || {
            match session.user.get() {
                Some(user) => view! {
                    <div class="flex items-center space-x-3">
                        <span class="text-sm text-gray-600">{user.name}</span>
                        <button
                            on:click=sign_out.clone()
                            class="px-3 py-2 rounded-lg text-sm text-gray-500 hover:text-gray-800 hover:bg-gray-100 transition-colors"
                        >
                            "Sign out"
                        </button>
                    </div>
                }.into_view(),
                None => view! {
                    <A
                        href="/login"
                        class="px-4 py-2 rounded-lg text-sm font-medium bg-teal-600 hover:bg-teal-700 text-white transition-colors"
                    >
                        "Sign in"
                    </A>
                }.into_view(),
            }
        }}
    }
}
