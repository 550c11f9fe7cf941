//! Create Post Dialog Component
//!
//! Modal composer for community health talk posts: a multi-field draft,
//! an optional cover image with a local preview, and a guarded multipart
//! submission workflow. The draft lives only while the dialog is mounted;
//! closing without success discards it.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::client::{DraftPost, PostCategory};
use crate::state::global::GlobalState;
use crate::state::session::Session;

/// Modal dialog for composing a new post
#[component]
pub fn CreatePostDialog(
    on_close: impl Fn() + 'static + Clone,
    /// Invoked after a successful creation, once the dialog has closed
    #[prop(optional)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (category, set_category) = create_signal(PostCategory::default().as_str().to_string());
    let (tags, set_tags) = create_signal(String::new());
    let (image, set_image) = create_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    // Clone on_close for each place it's used
    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    // Keep the file handle for submission and derive a data-URL preview.
    // No type or size checks beyond the picker's own accept filter.
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                let reader = web_sys::FileReader::new().unwrap();

                let onload = {
                    let reader = reader.clone();
                    wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                        if let Ok(result) = reader.result() {
                            if let Some(data_url) = result.as_string() {
                                set_preview.set(Some(data_url));
                            }
                        }
                    }) as Box<dyn FnMut(_)>)
                };

                reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();

                let _ = reader.read_as_data_url(&file);

                set_image.set(Some(file));
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = DraftPost {
            title: title.get(),
            content: content.get(),
            category: PostCategory::from_str_opt(&category.get()).unwrap_or_default(),
            tags: tags.get(),
        };

        if let Err(e) = draft.validate() {
            state.show_error(&e.to_string());
            return;
        }

        let token = match session.token.get() {
            Some(token) if !token.is_empty() => token,
            _ => {
                navigate("/login", Default::default());
                return;
            }
        };

        set_submitting.set(true);

        let file = image.get();
        let state_clone = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_health_post(&draft, file.as_ref(), &token).await {
                Ok(()) => {
                    state_clone.show_success("Post published");
                    set_title.set(String::new());
                    set_content.set(String::new());
                    set_category.set(PostCategory::default().as_str().to_string());
                    set_tags.set(String::new());
                    set_image.set(None);
                    set_preview.set(None);
                    on_close_inner();
                    if let Some(callback) = on_created {
                        callback.call(());
                    }
                }
                Err(e) => {
                    state_clone.show_error(&e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-lg mx-4 max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold text-gray-900">"New Health Talk Post"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        disabled=move || submitting.get()
                        class="text-gray-400 hover:text-gray-700 disabled:text-gray-300"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Title
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Title"</label>
                        <input
                            type="text"
                            placeholder="e.g. Managing seasonal allergies"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none"
                        />
                    </div>

                    // Content
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Content"</label>
                        <textarea
                            placeholder="Share your knowledge with the community"
                            prop:value=move || content.get()
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            rows="6"
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none resize-none"
                        />
                    </div>

                    // Category
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Category"</label>
                        <select
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            prop:value=move || category.get()
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none"
                        >
                            {PostCategory::ALL.iter().map(|c| view! {
                                <option value=c.as_str()>{c.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Tags
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Tags (comma-separated)"</label>
                        <input
                            type="text"
                            placeholder="e.g. nutrition, cardiology"
                            prop:value=move || tags.get()
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                            class="w-full bg-white rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-teal-500 focus:outline-none"
                        />
                    </div>

                    // Cover image
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Cover image (optional)"</label>
                        <input
                            type="file"
                            accept="image/*"
                            on:change=on_file_change
                            class="w-full text-sm text-gray-600"
                        />
                        {move || preview.get().map(|url| view! {
                            <img src=url alt="Preview" class="mt-3 rounded-lg max-h-48 w-full object-cover" />
                        })}
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-gray-100 hover:bg-gray-200 disabled:bg-gray-100
                                   disabled:text-gray-400 text-gray-700 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:bg-gray-300
                                   text-white rounded-lg font-medium transition-colors
                                   flex items-center justify-center space-x-2"
                        >
                            {move || if submitting.get() {
                                view! {
                                    <div class="loading-spinner w-5 h-5" />
                                    <span>"Publishing..."</span>
                                }.into_view()
                            } else {
                                view! {
                                    <span>"Publish"</span>
                                }.into_view()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
