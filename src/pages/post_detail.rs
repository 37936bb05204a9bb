//! Post detail page: body, like/bookmark toggles, status workflow, comments.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::components::post_content::PostContent;
use crate::net::types::Post;
use crate::state::auth::AuthState;
use crate::state::categories::CategoriesState;
use crate::state::feed::FeedState;
use crate::util::dialog::{alert, confirm};
use crate::util::time;

/// Workflow states for categories that track one, with display labels.
pub const STATUS_OPTIONS: [(&str, &str); 3] =
    [("REGISTERED", "Listed"), ("ING", "In progress"), ("COMPLETE", "Complete")];

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let params = use_params_map();

    let post_id = Signal::derive(move || {
        params.read().get("id").and_then(|raw| raw.parse::<i64>().ok())
    });

    let post = RwSignal::new(None::<Post>);
    let loading = RwSignal::new(true);
    let liked = RwSignal::new(false);
    let bookmarked = RwSignal::new(false);

    // Fetch the post (bumps its view count server-side) and, for logged-in
    // users, the per-user like/bookmark relations.
    Effect::new(move || {
        let Some(id) = post_id.get() else {
            loading.set(false);
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let logged_in = auth.get_untracked().logged_in;
            leptos::task::spawn_local(async move {
                match crate::net::api::get_post(id).await {
                    Ok(fetched) => {
                        bookmarked.set(fetched.bookmarked.unwrap_or(false));
                        post.set(Some(fetched));
                    }
                    Err(e) => log::warn!("post fetch failed: {e}"),
                }
                loading.set(false);

                if logged_in {
                    if let Ok(is_liked) = crate::net::api::like_status(id).await {
                        liked.set(is_liked);
                    }
                    if let Ok(is_bookmarked) = crate::net::api::bookmark_status(id).await {
                        bookmarked.set(is_bookmarked);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    let on_like = Callback::new(move |()| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_like(id).await {
                Ok(updated) => {
                    feed.update(|f| f.patch_post(&updated));
                    post.set(Some(updated));
                    liked.update(|l| *l = !*l);
                }
                Err(e) => alert(&format!("Could not toggle like: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_bookmark = Callback::new(move |()| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_bookmark(id).await {
                Ok(now_bookmarked) => bookmarked.set(now_bookmarked),
                Err(e) => alert(&format!("Could not toggle bookmark: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_status_change = Callback::new(move |status: String| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_post_status(id, &status).await {
                Ok(updated) => {
                    feed.update(|f| f.patch_post(&updated));
                    post.set(Some(updated));
                }
                Err(e) => alert(&format!("Could not update status: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    });

    let on_delete = Callback::new(move |()| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        if !confirm("Delete this post permanently?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(id).await {
                Ok(()) => {
                    feed.update(|f| f.reset());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => alert(&format!("Could not delete post: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="post-detail">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="post-detail__loading">"Loading..."</p> }
            >
                {move || match post.get() {
                    None => view! { <p class="post-detail__missing">"Post not found."</p> }.into_any(),
                    Some(current) => {
                        let chip_label = categories
                            .get()
                            .label_for(&current.category)
                            .map_or_else(|| current.category.clone(), str::to_owned);
                        let chip_class = format!(
                            "chip chip--{}",
                            categories.get().color_for(&current.category).unwrap_or("gray"),
                        );
                        let image = current
                            .image_url
                            .as_ref()
                            .map(|url| format!("{}{url}", crate::net::api::image_base()));
                        let status = current.status.clone();
                        let status_label = status
                            .as_deref()
                            .and_then(|s| {
                                STATUS_OPTIONS.iter().find(|(key, _)| *key == s).map(|(_, label)| *label)
                            });
                        let edit_href = format!("/posts/{}/edit", current.id);
                        view! {
                            <article class="post-detail__article">
                                <header class="post-detail__header">
                                    <span class=chip_class>{chip_label}</span>
                                    {status_label
                                        .map(|label| {
                                            view! { <span class="chip chip--status">{label}</span> }
                                        })}
                                    <h1 class="post-detail__title">{current.title.clone()}</h1>
                                    <div class="post-detail__meta">
                                        <span>{format!("views {}", current.view_count)}</span>
                                        <span>{format!("likes {}", current.like_count)}</span>
                                        <span>
                                            {time::relative_label(
                                                &current.created_at,
                                                time::now_epoch_seconds(),
                                            )}
                                        </span>
                                    </div>
                                </header>

                                {image
                                    .map(|src| {
                                        view! {
                                            <img
                                                class="post-detail__image"
                                                src=src
                                                alt=current.title.clone()
                                            />
                                        }
                                    })}

                                <PostContent content=current.content.clone()/>

                                <div class="post-detail__actions">
                                    <button
                                        class="btn post-detail__like"
                                        class:post-detail__like--active=move || liked.get()
                                        on:click=move |_| on_like.run(())
                                    >
                                        {format!("♥ Like {}", current.like_count)}
                                    </button>
                                    <Show when=move || auth.get().logged_in>
                                        <button
                                            class="btn post-detail__bookmark"
                                            class:post-detail__bookmark--active=move || bookmarked.get()
                                            on:click=move |_| on_bookmark.run(())
                                        >
                                            {move || {
                                                if bookmarked.get() { "★ Bookmarked" } else { "☆ Bookmark" }
                                            }}
                                        </button>
                                        {status
                                            .clone()
                                            .map(|current_status| {
                                                view! {
                                                    <select
                                                        class="post-detail__status"
                                                        on:change=move |ev| {
                                                            on_status_change.run(event_target_value(&ev));
                                                        }
                                                    >
                                                        {STATUS_OPTIONS
                                                            .iter()
                                                            .map(|(key, label)| {
                                                                let selected = *key == current_status;
                                                                view! {
                                                                    <option value=*key selected=selected>
                                                                        {*label}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </select>
                                                }
                                            })}
                                        <span class="post-detail__spacer"></span>
                                        <a class="btn" href=edit_href.clone()>
                                            "Edit"
                                        </a>
                                        <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                                            "Delete"
                                        </button>
                                    </Show>
                                </div>
                            </article>
                        }
                            .into_any()
                    }
                }}
                {move || {
                    (post.with(Option::is_some))
                        .then(|| post_id.get().map(|id| view! { <CommentSection post_id=id/> }))
                        .flatten()
                }}
            </Show>
        </div>
    }
}
