//! Post Card Component
//!
//! Displays a single community health talk post.

use leptos::*;

use crate::api::client::HealthPost;
use crate::util::format_day;

/// One post in the community feed
#[component]
pub fn PostCard(post: HealthPost) -> impl IntoView {
    let badge_class = category_badge_class(&post.category);
    let time = format_day(post.created_at);

    view! {
        <article class="bg-white border border-gray-200 rounded-xl p-5 shadow-sm hover:border-teal-200 transition-colors">
            <div class="flex items-start justify-between">
                <h3 class="text-lg font-semibold text-gray-900">{post.title}</h3>
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full", badge_class)>
                    {post.category.clone()}
                </span>
            </div>

            <p class="text-sm text-gray-500 mt-1">
                {post.author}
                {post.specialty.map(|specialty| format!(" · {}", specialty))}
                " · "
                {time}
            </p>

            {post.image_url.map(|url| view! {
                <img src=url alt="" class="mt-3 rounded-lg max-h-64 w-full object-cover" />
            })}

            <p class="text-gray-700 mt-3 line-clamp-3">{post.content}</p>

            {(!post.tags.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 mt-3">
                    {post.tags.into_iter().map(|tag| view! {
                        <span class="bg-gray-100 text-gray-600 text-xs px-2 py-1 rounded-full">
                            {format!("#{}", tag)}
                        </span>
                    }).collect_view()}
                </div>
            })}
        </article>
    }
}

/// Badge styling per category label
fn category_badge_class(category: &str) -> &'static str {
    match category {
        "Articles" => "bg-teal-100 text-teal-700",
        "Case Studies" => "bg-amber-100 text-amber-700",
        "Research" => "bg-indigo-100 text-indigo-700",
        _ => "bg-gray-100 text-gray-600",
    }
}
