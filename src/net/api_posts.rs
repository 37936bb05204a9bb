//! Post, comment, like/bookmark, and profile calls extracted from `api`.

#[cfg(test)]
#[path = "api_posts_test.rs"]
mod api_posts_test;

use super::ApiError;
use crate::net::types::{Comment, Page, Post};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(id: i64) -> String {
    format!("/posts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(post_id: i64) -> String {
    format!("/posts/{post_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_payload(content: &str, author_name: &str, parent_id: Option<i64>) -> serde_json::Value {
    match parent_id {
        Some(parent_id) => {
            serde_json::json!({ "content": content, "authorName": author_name, "parentId": parent_id })
        }
        None => serde_json::json!({ "content": content, "authorName": author_name }),
    }
}

/// Fetch one feed page via `GET /api/posts`.
pub async fn posts(
    category: Option<&str>,
    sort: &str,
    status: Option<&str>,
    page: i32,
    size: i32,
) -> Result<Page<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = super::posts_query(category, sort, status, page, size);
        super::get_json(&format!("/posts?{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (category, sort, status, page, size);
        Err(ApiError::unavailable())
    }
}

/// Fetch a single post; the backend bumps its view count as a side effect.
pub async fn get_post(id: i64) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&post_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Create a post via multipart `POST /api/posts`.
///
/// `images` have already been through the client-side downscale pass
/// (`util::image`); the browser supplies the multipart boundary.
#[cfg(feature = "hydrate")]
pub async fn create_post(
    title: &str,
    content: &str,
    category: &str,
    images: &[web_sys::File],
) -> Result<Post, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::transport("FormData unavailable"))?;
    let _ = form.append_with_str("title", title);
    let _ = form.append_with_str("content", content);
    let _ = form.append_with_str("category", category);
    for file in images {
        let _ = form.append_with_blob_and_filename("images", file, &file.name());
    }
    super::send_form("POST", "/posts", form).await
}

/// Update a post via multipart `PUT /api/posts/{id}`, keeping the listed
/// existing image URLs and appending any new files.
#[cfg(feature = "hydrate")]
pub async fn update_post(
    id: i64,
    title: &str,
    content: &str,
    category: &str,
    images: &[web_sys::File],
    existing_image_urls: &[String],
) -> Result<Post, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::transport("FormData unavailable"))?;
    let _ = form.append_with_str("title", title);
    let _ = form.append_with_str("content", content);
    let _ = form.append_with_str("category", category);
    for url in existing_image_urls {
        let _ = form.append_with_str("existingImageUrls", url);
    }
    for file in images {
        let _ = form.append_with_blob_and_filename("images", file, &file.name());
    }
    super::send_form("PUT", &post_endpoint(id), form).await
}

/// Move a post through its status workflow via `PATCH /api/posts/{id}/status`.
pub async fn update_post_status(id: i64, status: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::patch_json(&format!("{}/status", post_endpoint(id)), &serde_json::json!({ "status": status }))
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(ApiError::unavailable())
    }
}

/// Delete a post. Author-only; the backend enforces ownership.
pub async fn delete_post(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::delete(&post_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LikeStatusResponse {
    liked: bool,
}

/// Whether the current user likes this post.
pub async fn like_status(id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: LikeStatusResponse = super::get_json(&format!("{}/like", post_endpoint(id))).await?;
        Ok(body.liked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Toggle the like relation; returns the refreshed post.
pub async fn toggle_like(id: i64) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_empty(&format!("{}/like", post_endpoint(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct BookmarkStatusResponse {
    bookmarked: bool,
}

/// Whether the current user bookmarked this post.
pub async fn bookmark_status(id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: BookmarkStatusResponse = super::get_json(&format!("{}/bookmark", post_endpoint(id))).await?;
        Ok(body.bookmarked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Toggle the bookmark relation; returns the new state.
pub async fn toggle_bookmark(id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: BookmarkStatusResponse = super::post_empty(&format!("{}/bookmark", post_endpoint(id))).await?;
        Ok(body.bookmarked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Fetch the comment tree for a post.
pub async fn comments(post_id: i64) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&comments_endpoint(post_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ApiError::unavailable())
    }
}

/// Add a comment, or a reply when `parent_id` is set.
pub async fn add_comment(
    post_id: i64,
    content: &str,
    author_name: &str,
    parent_id: Option<i64>,
) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json(&comments_endpoint(post_id), &comment_payload(content, author_name, parent_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content, author_name, parent_id);
        Err(ApiError::unavailable())
    }
}

/// The current user's posts, newest first.
pub async fn my_posts(page: i32, size: i32) -> Result<Page<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/profile/posts?page={page}&size={size}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err(ApiError::unavailable())
    }
}

/// The current user's bookmarked posts.
pub async fn my_bookmarks(page: i32, size: i32) -> Result<Page<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/profile/bookmarks?page={page}&size={size}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err(ApiError::unavailable())
    }
}
