//! Connected Users Component
//!
//! The signed-in user's care connections: a patient sees their doctors, a
//! doctor sees their patients. Each row carries the messaging entry point.

use leptos::*;

use crate::api::client::ConnectedUser;
use crate::components::message_button::MessageButton;
use crate::state::session::UserRole;

/// Connection list section
#[component]
pub fn ConnectedUsers(users: Vec<ConnectedUser>, role: UserRole) -> impl IntoView {
    let strings = role.strings();

    view! {
        <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{strings.connections_title}</h2>

            <div class="space-y-2">
                {if users.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">{strings.connections_empty}</p>
                    }.into_view()
                } else {
                    users.into_iter().map(|user| {
                        view! { <ConnectionRow user=user /> }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// One connection row with a message button
#[component]
fn ConnectionRow(user: ConnectedUser) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-100 last:border-0">
            <div>
                <span class="font-medium text-gray-900">{user.name}</span>
                {user.specialty.map(|specialty| view! {
                    <span class="text-gray-500 text-sm ml-2">{specialty}</span>
                })}
            </div>
            <MessageButton user_id=user.id />
        </div>
    }
}
