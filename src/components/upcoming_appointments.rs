//! Upcoming Appointments Component
//!
//! List of scheduled appointments for the signed-in user. Pure display of
//! the rows passed in as props; the empty state is role-aware.

use leptos::*;

use crate::api::client::Appointment;
use crate::state::session::UserRole;
use crate::util::format_day_time;

/// Appointment list section
#[component]
pub fn UpcomingAppointments(appointments: Vec<Appointment>, role: UserRole) -> impl IntoView {
    view! {
        <section class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Upcoming Appointments"</h2>

            <div class="space-y-2">
                {if appointments.is_empty() {
                    view! {
                        <p class="text-gray-500 text-sm">{role.strings().appointments_empty}</p>
                    }.into_view()
                } else {
                    appointments.into_iter().map(|appointment| {
                        view! { <AppointmentRow appointment=appointment /> }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// One appointment row
#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let time = format_day_time(appointment.scheduled_at);

    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-100 last:border-0">
            <div>
                <span class="font-medium text-gray-900">{appointment.counterpart}</span>
                {appointment.specialty.map(|specialty| view! {
                    <span class="text-gray-500 text-sm ml-2">{specialty}</span>
                })}
            </div>
            <span class="text-sm text-gray-600">{time}</span>
        </div>
    }
}
