//! Shared composer form for creating and editing posts.
//!
//! Selected images get a local preview immediately; on submit each file over
//! the size threshold is downscaled client-side before the multipart upload
//! is built. Editing keeps the post's existing images unless removed.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::categories::CategoriesState;
use crate::state::feed::FeedState;
use crate::util::dialog::alert;

#[component]
pub fn PostForm(#[prop(optional)] editing: Option<Post>) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let feed = expect_context::<RwSignal<FeedState>>();

    let editing_id = editing.as_ref().map(|p| p.id);
    let title = RwSignal::new(editing.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let content = RwSignal::new(editing.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let category = RwSignal::new(editing.as_ref().map(|p| p.category.clone()).unwrap_or_default());
    // Existing image URLs survive the edit unless removed here.
    let kept_images = RwSignal::new(
        editing
            .as_ref()
            .and_then(|p| p.image_url.clone())
            .map(|url| vec![url])
            .unwrap_or_default(),
    );
    let preview_urls = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let picked_files = StoredValue::new_local(Vec::<web_sys::File>::new());

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let mut files = Vec::new();
            let mut urls = Vec::new();
            for index in 0..list.length() {
                if let Some(file) = list.item(index) {
                    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                        urls.push(url);
                    }
                    files.push(file);
                }
            }
            // Replace earlier picks; the file input reflects its own state.
            for old in preview_urls.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&old);
            }
            picked_files.set_value(files);
            preview_urls.set(urls);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_remove_kept = move |url: String| {
        kept_images.update(|urls| urls.retain(|kept| *kept != url));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let content_value = content.get().trim().to_owned();
        let category_value = category.get();
        if title_value.is_empty() || content_value.is_empty() || category_value.is_empty() {
            alert("Title, body, and category are all required.");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let kept = kept_images.get_untracked();
            leptos::task::spawn_local(async move {
                let mut uploads = Vec::new();
                for file in picked_files.get_value() {
                    uploads.push(crate::util::image::downscale_if_needed(file).await);
                }

                let result = match editing_id {
                    Some(id) => {
                        crate::net::api::update_post(
                            id,
                            &title_value,
                            &content_value,
                            &category_value,
                            &uploads,
                            &kept,
                        )
                        .await
                    }
                    None => {
                        crate::net::api::create_post(&title_value, &content_value, &category_value, &uploads)
                            .await
                    }
                };
                match result {
                    Ok(saved) => {
                        feed.update(|f| f.reset());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!("/posts/{}", saved.id));
                        }
                    }
                    Err(e) => {
                        alert(&format!("Could not save post: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, content_value, category_value);
            busy.set(false);
        }
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <label class="post-form__label">
                "Title"
                <input
                    class="post-form__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="post-form__label">
                "Category"
                <select
                    class="post-form__input"
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="" selected=move || category.get().is_empty() disabled=true>
                        "Choose a category"
                    </option>
                    {move || {
                        categories
                            .get()
                            .items
                            .into_iter()
                            .map(|cat| {
                                let name = cat.name.clone();
                                let selected = {
                                    let name = name.clone();
                                    move || category.get() == name
                                };
                                view! {
                                    <option value=name selected=selected>
                                        {cat.label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <label class="post-form__label">
                "Body"
                <textarea
                    class="post-form__input post-form__input--body"
                    rows="10"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="post-form__label">
                "Images"
                <input class="post-form__file" type="file" accept="image/*" multiple on:change=on_pick/>
            </label>

            <div class="post-form__previews">
                {move || {
                    kept_images
                        .get()
                        .into_iter()
                        .map(|url| {
                            let src = format!("{}{url}", crate::net::api::image_base());
                            let remove_url = url.clone();
                            view! {
                                <span class="post-form__preview">
                                    <img src=src alt="existing image"/>
                                    <button
                                        type="button"
                                        class="post-form__preview-remove"
                                        on:click=move |_| on_remove_kept(remove_url.clone())
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    preview_urls
                        .get()
                        .into_iter()
                        .map(|url| {
                            view! {
                                <span class="post-form__preview">
                                    <img src=url alt="selected image"/>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="post-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Saving..."
                        } else if editing_id.is_some() {
                            "Save Changes"
                        } else {
                            "Publish"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
