//! Post body renderer: plain text with URL linkification and YouTube embeds.
//!
//! Bodies are user-entered plain text. Each line is split into text runs and
//! URLs; YouTube watch/shorts/short-link URLs become inline embeds, other
//! URLs become anchors. No markup in the body is ever interpreted.

#[cfg(test)]
#[path = "post_content_test.rs"]
mod post_content_test;

use leptos::prelude::*;

/// One rendered run within a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
    YouTube { id: String, shorts: bool },
}

/// YouTube video id from a watch/shorts/youtu.be URL, plus whether it is a
/// shorts link (rendered portrait). Ids are exactly 11 URL-safe characters.
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<(String, bool)> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let (candidate, shorts) = if let Some(tail) = rest.strip_prefix("youtube.com/watch?v=") {
        (tail, false)
    } else if let Some(tail) = rest.strip_prefix("youtube.com/shorts/") {
        (tail, true)
    } else if let Some(tail) = rest.strip_prefix("youtu.be/") {
        (tail, false)
    } else {
        return None;
    };

    if candidate.len() < 11 {
        return None;
    }
    let (id, trailer) = candidate.split_at(11);
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return None;
    }
    // Only query/fragment trailers keep this a plain video URL.
    if !(trailer.is_empty() || trailer.starts_with('&') || trailer.starts_with('?')) {
        return None;
    }
    Some((id.to_owned(), shorts))
}

/// Split one line of body text into text/link/embed segments.
#[must_use]
pub fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut remaining = line;

    while !remaining.is_empty() {
        let Some(start) = find_url_start(remaining) else {
            segments.push(Segment::Text(remaining.to_owned()));
            break;
        };
        if start > 0 {
            segments.push(Segment::Text(remaining[..start].to_owned()));
        }
        let after = &remaining[start..];
        let end = after.find(char::is_whitespace).unwrap_or(after.len());
        let url = &after[..end];
        match extract_youtube_id(url) {
            Some((id, shorts)) => segments.push(Segment::YouTube { id, shorts }),
            None => segments.push(Segment::Link(url.to_owned())),
        }
        remaining = &after[end..];
    }

    segments
}

fn find_url_start(text: &str) -> Option<usize> {
    let http = text.find("http://");
    let https = text.find("https://");
    match (http, https) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Rendered post body.
#[component]
pub fn PostContent(content: String) -> impl IntoView {
    view! {
        <div class="post-content">
            {content
                .lines()
                .map(|line| {
                    let runs = split_segments(line);
                    view! {
                        <p class="post-content__line">
                            {runs
                                .into_iter()
                                .map(|segment| match segment {
                                    Segment::Text(text) => view! { <span>{text}</span> }.into_any(),
                                    Segment::Link(url) => {
                                        view! {
                                            <a
                                                class="post-content__link"
                                                href=url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {url.clone()}
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    Segment::YouTube { id, shorts } => {
                                        let src = format!("https://www.youtube.com/embed/{id}");
                                        view! {
                                            <span
                                                class="post-content__embed"
                                                class:post-content__embed--shorts=shorts
                                            >
                                                <iframe
                                                    src=src
                                                    title="YouTube video"
                                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                                    allowfullscreen="true"
                                                ></iframe>
                                            </span>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </p>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
