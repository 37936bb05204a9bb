use super::*;

#[test]
fn extract_id_from_watch_url() {
    let (id, shorts) = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .expect("watch url should match");
    assert_eq!(id, "dQw4w9WgXcQ");
    assert!(!shorts);
}

#[test]
fn extract_id_from_short_link_and_shorts() {
    let (id, _) = extract_youtube_id("https://youtu.be/dQw4w9WgXcQ").expect("short link should match");
    assert_eq!(id, "dQw4w9WgXcQ");

    let (id, shorts) =
        extract_youtube_id("https://youtube.com/shorts/abc-_987654").expect("shorts url should match");
    assert_eq!(id, "abc-_987654");
    assert!(shorts);
}

#[test]
fn extract_id_allows_query_trailer() {
    let (id, _) = extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42")
        .expect("trailing query should match");
    assert_eq!(id, "dQw4w9WgXcQ");
}

#[test]
fn extract_id_rejects_non_video_urls() {
    assert!(extract_youtube_id("https://example.com/watch?v=dQw4w9WgXcQ").is_none());
    assert!(extract_youtube_id("https://youtube.com/watch?v=short").is_none());
    assert!(extract_youtube_id("https://youtu.be/dQw4w9WgXcQ/extra").is_none());
    assert!(extract_youtube_id("ftp://youtu.be/dQw4w9WgXcQ").is_none());
}

#[test]
fn split_plain_text_is_one_segment() {
    assert_eq!(split_segments("just words"), vec![Segment::Text("just words".to_owned())]);
}

#[test]
fn split_extracts_links_with_surrounding_text() {
    let segments = split_segments("see https://example.com/a for more");
    assert_eq!(
        segments,
        vec![
            Segment::Text("see ".to_owned()),
            Segment::Link("https://example.com/a".to_owned()),
            Segment::Text(" for more".to_owned()),
        ]
    );
}

#[test]
fn split_turns_youtube_urls_into_embeds() {
    let segments = split_segments("https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(segments, vec![Segment::YouTube { id: "dQw4w9WgXcQ".to_owned(), shorts: false }]);
}

#[test]
fn split_handles_multiple_urls_in_one_line() {
    let segments = split_segments("a http://x.test b https://y.test");
    assert_eq!(
        segments,
        vec![
            Segment::Text("a ".to_owned()),
            Segment::Link("http://x.test".to_owned()),
            Segment::Text(" b ".to_owned()),
            Segment::Link("https://y.test".to_owned()),
        ]
    );
}

#[test]
fn split_empty_line_yields_no_segments() {
    assert!(split_segments("").is_empty());
}
