//! Dashboard Page
//!
//! Landing view for a signed-in user: headline stats, upcoming
//! appointments and the connected care list. Labels adapt to the
//! user's role, so a patient sees doctors where a doctor sees
//! patients.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::client::DashboardResponse;
use crate::components::{CardSkeleton, ConnectedUsers, DashboardStats, ListSkeleton, UpcomingAppointments};
use crate::state::global::GlobalState;
use crate::state::session::{session_gate, Session, SessionGate, UserRole};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let (data, set_data) = create_signal(None::<DashboardResponse>);

    // Fetch on mount and again whenever the session changes. A missing
    // session routes to login instead.
    let state_for_effect = state.clone();
    let session_for_effect = session.clone();
    let navigate_for_effect = navigate;
    create_effect(move |_| {
        let token = session_for_effect.token.get();
        let token = match session_gate(token.as_deref()) {
            SessionGate::Proceed => token.unwrap_or_default(),
            SessionGate::RedirectToLogin => {
                set_data.set(None);
                navigate_for_effect("/login", Default::default());
                return;
            }
        };

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_dashboard(&token).await {
                Ok(response) => {
                    set_data.set(Some(response));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dashboard: {}", e).into());
                    state.show_error(&e.user_message());
                }
            }

            state.loading.set(false);
        });
    });

    let current_role = move || {
        session.user.get().map(|u| u.role).unwrap_or(UserRole::Patient)
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">
                    {move || current_role().strings().dashboard_subtitle}
                </p>
            </div>

            {move || {
                if session_gate(session.token.get().as_deref()) == SessionGate::RedirectToLogin {
                    // Redirect is in flight; show the skeleton until it lands
                    return view! { <CardSkeleton /> }.into_view();
                }

                if state.loading.get() {
                    return view! {
                        <div class="space-y-8">
                            <CardSkeleton />
                            <div class="grid md:grid-cols-2 gap-8">
                                <ListSkeleton />
                                <ListSkeleton />
                            </div>
                        </div>
                    }.into_view();
                }

                match data.get() {
                    Some(data) => {
                        let role = current_role();
                        view! {
                            <DashboardStats stats=data.stats role=role />
                            <div class="grid md:grid-cols-2 gap-8">
                                <UpcomingAppointments appointments=data.appointments role=role />
                                <ConnectedUsers users=data.connections role=role />
                            </div>
                        }.into_view()
                    }
                    None => view! {
                        <div class="bg-white rounded-xl border border-gray-200 p-10 text-center">
                            <p class="text-gray-500">
                                "Could not load your dashboard. Refresh to try again."
                            </p>
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}
