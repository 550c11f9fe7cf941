//! Health Post Filters Component
//!
//! Category and specialty filters for the community feed. Fetches the
//! specialty options once on mount and reports every selection change
//! upward; it owns no other state.

use leptos::*;

use crate::api;
use crate::api::client::{PostCategory, PostFilter, Specialty};

/// Filter bar for the post list
#[component]
pub fn HealthPostFilters(on_change: impl Fn(PostFilter) + 'static + Clone) -> impl IntoView {
    let (specialties, set_specialties) = create_signal(Vec::<Specialty>::new());
    let (category, set_category) = create_signal(String::new());
    let (specialty, set_specialty) = create_signal(String::new());

    // Fetch specialty options on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_specialties().await {
                Ok(list) => set_specialties.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch specialties: {}", e).into(),
                    );
                }
            }
        });
    });

    let emit = move |category: &str, specialty: &str| {
        on_change(PostFilter {
            category: PostCategory::from_str_opt(category),
            specialty: if specialty.is_empty() {
                None
            } else {
                Some(specialty.to_string())
            },
        });
    };

    let emit_for_category = emit.clone();
    let emit_for_specialty = emit;

    view! {
        <div class="flex flex-wrap items-center gap-3">
            // Category select: the fixed set plus an "all" option
            <select
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_category.set(value.clone());
                    emit_for_category(&value, &specialty.get_untracked());
                }
                prop:value=move || category.get()
                class="bg-white border border-gray-300 rounded-lg px-3 py-2 text-sm
                       focus:border-teal-500 focus:outline-none"
            >
                <option value="">"All Categories"</option>
                {PostCategory::ALL.iter().map(|c| view! {
                    <option value=c.as_str()>{c.as_str()}</option>
                }).collect_view()}
            </select>

            // Specialty select, populated from the API
            <select
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_specialty.set(value.clone());
                    emit_for_specialty(&category.get_untracked(), &value);
                }
                prop:value=move || specialty.get()
                class="bg-white border border-gray-300 rounded-lg px-3 py-2 text-sm
                       focus:border-teal-500 focus:outline-none"
            >
                <option value="">"All Specialties"</option>
                {move || {
                    specialties.get().into_iter().map(|s| view! {
                        <option value=s.name.clone()>{s.name}</option>
                    }).collect_view()
                }}
            </select>
        </div>
    }
}
