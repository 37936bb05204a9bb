//! Card for one post in the feed/profile grids.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::categories::CategoriesState;
use crate::util::time;

/// A clickable post card: thumbnail (or text preview), category chip, title,
/// and counters.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();

    let href = format!("/posts/{}", post.id);
    let category = post.category.clone();
    let chip_label = {
        let category = category.clone();
        move || {
            categories
                .get()
                .label_for(&category)
                .map_or_else(|| category.clone(), str::to_owned)
        }
    };
    let chip_class = move || {
        let color = categories.get().color_for(&category).unwrap_or("gray").to_owned();
        format!("chip chip--{color}")
    };

    let image = post
        .image_url
        .as_ref()
        .map(|url| format!("{}{url}", crate::net::api::image_base()));
    let preview: String = post.content.chars().take(120).collect();
    let created = time::relative_label(&post.created_at, time::now_epoch_seconds());
    let comment_count = post.comment_count.unwrap_or(0);

    view! {
        <a class="post-card" href=href>
            {match image {
                Some(src) => {
                    view! { <img class="post-card__image" src=src alt=post.title.clone()/> }
                        .into_any()
                }
                None => view! { <p class="post-card__preview">{preview}</p> }.into_any(),
            }}
            <div class="post-card__body">
                <span class=chip_class>{chip_label}</span>
                <h3 class="post-card__title">{post.title}</h3>
                <div class="post-card__meta">
                    <span>{format!("♥ {}", post.like_count)}</span>
                    <span>{format!("💬 {comment_count}")}</span>
                    <span>{format!("views {}", post.view_count)}</span>
                    <span class="post-card__date">{created}</span>
                </div>
            </div>
        </a>
    }
}
