//! Dashboard Stats Component
//!
//! Top-line counters for the signed-in user. Pure display: everything it
//! shows arrives through props.

use leptos::*;

use crate::api::client::StatSummary;
use crate::state::session::UserRole;

/// Stat summary cards
#[component]
pub fn DashboardStats(stats: StatSummary, role: UserRole) -> impl IntoView {
    let strings = role.strings();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Appointments" value=stats.upcoming_appointments icon="📅" />
            <StatCard label="Unread Messages" value=stats.unread_messages icon="✉️" />
            <StatCard label=strings.connections_stat value=stats.connections icon="🤝" />
            <StatCard label="Health Talks" value=stats.health_talks icon="📝" />
        </div>
    }
}

/// Single counter card
#[component]
fn StatCard(
    label: &'static str,
    value: u32,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 rounded-lg p-4 shadow-sm">
            <div class="flex items-center justify-between">
                <span class="text-gray-500 text-sm">{label}</span>
                <span class="text-lg">{icon}</span>
            </div>
            <div class="text-3xl font-bold text-gray-900 mt-2">{value}</div>
        </div>
    }
}
