//! Comment section for the post detail page.
//!
//! Comments form a two-level tree: top-level comments with their replies.
//! The backend returns the tree already nested; after a successful add the
//! new comment is patched into local state instead of refetching the list.

#[cfg(test)]
#[path = "comment_section_test.rs"]
mod comment_section_test;

use leptos::prelude::*;

use crate::net::types::Comment;
use crate::state::auth::AuthState;
use crate::util::time;

/// Insert a freshly created comment into the tree.
///
/// Top-level comments go to the front (newest first, as the list renders);
/// replies append to their parent's `replies`, which the backend keeps in
/// ascending creation order. An unknown parent drops the reply; the next
/// refetch will include it.
pub fn insert_comment(comments: &mut Vec<Comment>, new: Comment, parent_id: Option<i64>) {
    match parent_id {
        None => comments.insert(0, new),
        Some(parent_id) => {
            if let Some(parent) = comments.iter_mut().find(|c| c.id == parent_id) {
                parent.replies.push(new);
            }
        }
    }
}

/// Total comment count including replies.
#[must_use]
pub fn total_count(comments: &[Comment]) -> usize {
    comments.iter().map(|c| 1 + c.replies.len()).sum()
}

#[component]
pub fn CommentSection(post_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let comments = RwSignal::new(Vec::<Comment>::new());
    let content = RwSignal::new(String::new());
    let guest_name = RwSignal::new(String::new());
    let reply_to = RwSignal::new(None::<i64>);
    let reply_content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::comments(post_id).await {
            Ok(list) => comments.set(list),
            Err(e) => log::warn!("comment fetch failed: {e}"),
        }
    });

    let author_name = move || {
        auth.get()
            .nickname
            .unwrap_or_else(|| guest_name.get().trim().to_owned())
    };

    let submit = move |parent_id: Option<i64>, body: RwSignal<String>| {
        if submitting.get_untracked() {
            return;
        }
        let content_value = body.get_untracked().trim().to_owned();
        let author = author_name();
        if content_value.is_empty() || author.is_empty() {
            return;
        }
        submitting.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_comment(post_id, &content_value, &author, parent_id).await {
                Ok(created) => {
                    comments.update(|list| insert_comment(list, created, parent_id));
                    body.set(String::new());
                    reply_to.set(None);
                }
                Err(e) => error.set(format!("Could not post comment: {e}")),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (parent_id, content_value, author);
        }
    };

    let on_submit_top = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(None, content);
    };

    view! {
        <section class="comments">
            <h2 class="comments__heading">
                {move || format!("{} comments", total_count(&comments.get()))}
            </h2>

            <form class="comments__form" on:submit=on_submit_top>
                <Show when=move || !auth.get().logged_in>
                    <input
                        class="comments__input"
                        type="text"
                        placeholder="Nickname"
                        prop:value=move || guest_name.get()
                        on:input=move |ev| guest_name.set(event_target_value(&ev))
                    />
                </Show>
                <textarea
                    class="comments__input comments__input--body"
                    placeholder="Write a comment..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Posting..." } else { "Post Comment" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="comments__error">{move || error.get()}</p>
            </Show>

            <div class="comments__list">
                {move || {
                    comments
                        .get()
                        .into_iter()
                        .map(|comment| {
                            let comment_id = comment.id;
                            let open_reply = move |_| {
                                reply_to.set(Some(comment_id));
                                reply_content.set(String::new());
                            };
                            view! {
                                <div class="comment">
                                    <div class="comment__header">
                                        <span class="comment__author">{comment.author_name.clone()}</span>
                                        <span class="comment__date">
                                            {time::relative_label(
                                                &comment.created_at,
                                                time::now_epoch_seconds(),
                                            )}
                                        </span>
                                    </div>
                                    <p class="comment__body">{comment.content.clone()}</p>
                                    <button class="comment__reply-toggle" on:click=open_reply>
                                        "Reply"
                                    </button>
                                    <Show when=move || reply_to.get() == Some(comment_id)>
                                        <form
                                            class="comments__form comments__form--reply"
                                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                                ev.prevent_default();
                                                submit(Some(comment_id), reply_content);
                                            }
                                        >
                                            <textarea
                                                class="comments__input comments__input--body"
                                                placeholder="Write a reply..."
                                                prop:value=move || reply_content.get()
                                                on:input=move |ev| reply_content.set(event_target_value(&ev))
                                            ></textarea>
                                            <button
                                                class="btn btn--primary"
                                                type="submit"
                                                disabled=move || submitting.get()
                                            >
                                                "Reply"
                                            </button>
                                        </form>
                                    </Show>
                                    <div class="comment__replies">
                                        {comment
                                            .replies
                                            .iter()
                                            .map(|reply| {
                                                view! {
                                                    <div class="comment comment--reply">
                                                        <div class="comment__header">
                                                            <span class="comment__author">
                                                                {reply.author_name.clone()}
                                                            </span>
                                                            <span class="comment__date">
                                                                {time::relative_label(
                                                                    &reply.created_at,
                                                                    time::now_epoch_seconds(),
                                                                )}
                                                            </span>
                                                        </div>
                                                        <p class="comment__body">{reply.content.clone()}</p>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || comments.get().is_empty()>
                    <p class="comments__empty">"No comments yet. Be the first!"</p>
                </Show>
            </div>
        </section>
    }
}
