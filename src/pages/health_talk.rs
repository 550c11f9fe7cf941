//! Health Talk Page
//!
//! Community feed of posts from doctors and patients. Posts can be
//! narrowed by category, specialty and a free-text search; the composer
//! opens as a modal on top of the feed.

use leptos::*;

use crate::api;
use crate::api::client::{HealthPost, PostFilter};
use crate::components::{CardSkeleton, CreatePostDialog, HealthPostFilters, PostCard};

/// Health Talk feed page component
#[component]
pub fn HealthTalkPage() -> impl IntoView {
    let (posts, set_posts) = create_signal(Vec::<HealthPost>::new());
    let (loading, set_loading) = create_signal(true);
    let (filter, set_filter) = create_signal(PostFilter::default());
    let (search_input, set_search_input) = create_signal(String::new());
    let (applied_search, set_applied_search) = create_signal(String::new());
    let (show_composer, set_show_composer) = create_signal(false);
    let (refresh, set_refresh) = create_signal(0u32);

    // Refetch whenever the filters, the applied search or the refresh
    // tick change. The tick bumps after a successful post creation.
    create_effect(move |_| {
        let filter = filter.get();
        let search = applied_search.get();
        let _ = refresh.get();

        spawn_local(async move {
            set_loading.set(true);

            match api::fetch_health_posts(&filter, Some(&search)).await {
                Ok(list) => {
                    set_posts.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch posts: {}", e).into());
                }
            }

            set_loading.set(false);
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_applied_search.set(search_input.get());
    };

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Health Talk"</h1>
                    <p class="text-gray-500 mt-1">"Advice and stories from the community"</p>
                </div>
                <button
                    on:click=move |_| set_show_composer.set(true)
                    class="px-4 py-2 bg-teal-600 hover:bg-teal-700 text-white rounded-lg
                           font-medium transition-colors"
                >
                    "+ New Post"
                </button>
            </div>

            // Filter and search row
            <section class="bg-white rounded-xl border border-gray-200 p-4 space-y-4">
                <HealthPostFilters on_change=move |f| set_filter.set(f) />

                <form on:submit=on_search class="flex space-x-3">
                    <input
                        type="text"
                        placeholder="Search posts"
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                        class="flex-1 bg-white rounded-lg px-4 py-2 border border-gray-300
                               focus:border-teal-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Search"
                    </button>
                </form>
            </section>

            // Feed
            <section>
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="grid md:grid-cols-2 gap-6">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view();
                    }

                    let posts = posts.get();
                    if posts.is_empty() {
                        view! {
                            <div class="bg-white rounded-xl border border-gray-200 p-10 text-center">
                                <div class="text-5xl mb-4">"📝"</div>
                                <p class="text-gray-500">
                                    "No posts match your filters yet. Be the first to share."
                                </p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-6">
                                {posts.into_iter()
                                    .map(|post| view! { <PostCard post=post /> })
                                    .collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            // Composer modal
            {move || {
                if show_composer.get() {
                    view! {
                        <CreatePostDialog
                            on_close=move || set_show_composer.set(false)
                            on_created=Callback::new(move |_| set_refresh.update(|n| *n += 1))
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
