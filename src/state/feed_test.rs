use super::*;

fn post(id: i64) -> Post {
    Post {
        id,
        title: format!("post {id}"),
        content: String::new(),
        image_url: None,
        category: "HUMOR".to_owned(),
        status: None,
        like_count: 0,
        view_count: 0,
        comment_count: Some(0),
        bookmarked: None,
        created_at: "2025-06-01T10:00:00".to_owned(),
    }
}

fn page(ids: &[i64], number: i32, last: bool) -> Page<Post> {
    Page {
        content: ids.iter().copied().map(post).collect(),
        total_pages: 10,
        total_elements: 100,
        last,
        number,
    }
}

#[test]
fn apply_first_page_replaces_content() {
    let mut feed = FeedState::default();
    feed.posts = vec![post(99)];
    feed.apply_page(page(&[1, 2], 0, false), false);
    let ids: Vec<i64> = feed.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(feed.has_more);
}

#[test]
fn append_deduplicates_shifted_page_boundary() {
    let mut feed = FeedState::default();
    feed.apply_page(page(&[1, 2, 3], 0, false), false);
    // A post inserted concurrently pushes 3 onto the next page too.
    feed.apply_page(page(&[3, 4], 1, true), true);
    let ids: Vec<i64> = feed.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(!feed.has_more);
}

#[test]
fn last_page_clears_has_more() {
    let mut feed = FeedState::default();
    feed.apply_page(page(&[1], 0, true), false);
    assert!(!feed.has_more);
    assert_eq!(feed.page, 0);
}

#[test]
fn reset_clears_posts_and_rearms_paging() {
    let mut feed = FeedState::default();
    feed.apply_page(page(&[1, 2], 3, true), false);
    feed.reset();
    assert!(feed.posts.is_empty());
    assert_eq!(feed.page, 0);
    assert!(feed.has_more);
}

#[test]
fn patch_post_updates_matching_entry_only() {
    let mut feed = FeedState::default();
    feed.apply_page(page(&[1, 2], 0, false), false);
    let mut updated = post(2);
    updated.like_count = 7;
    feed.patch_post(&updated);
    assert_eq!(feed.posts[1].like_count, 7);
    assert_eq!(feed.posts[0].like_count, 0);
}

#[test]
fn sort_order_round_trips_query_values() {
    for sort in SortOrder::ALL {
        assert_eq!(SortOrder::from_str(sort.as_str()), sort);
    }
    assert_eq!(SortOrder::from_str("garbage"), SortOrder::Latest);
}
