use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::tool::{base, Tool};

/// Feed queried when the caller does not name one
pub const DEFAULT_FEED: &str = "https://techcrunch.com";

/// Number of posts requested per lookup
pub const NEWS_PAGE_SIZE: usize = 3;

/// Excerpts are cut to this many characters before the ellipsis
pub const EXCERPT_LIMIT: usize = 150;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|blockquote)\s*>")
        .expect("block break pattern is a valid regex")
});

static SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// WordPress REST API post (`/wp-json/wp/v2/posts?_embed`)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WpPost {
    pub id: u64,
    pub date: String,
    pub link: String,
    pub title: WpRendered,
    pub excerpt: WpRendered,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<WpEmbedded>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WpRendered {
    pub rendered: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WpEmbedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Option<Vec<WpMedia>>,
}

/// Embedded media entry; inaccessible media come back as an error object
/// without `source_url`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WpMedia {
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub link: String,
    pub date: String,
    /// Human readable publication date, e.g. "October 18, 2026"
    pub published: Option<String>,
    pub image_url: Option<String>,
}

/// Latest posts of a WordPress site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsFeed {
    pub articles: Vec<Article>,
}

/// Strip HTML tags, decode entities and collapse whitespace
///
/// Inline tags vanish without a trace; line breaks and closing block tags
/// become a single space so paragraphs do not run together.
pub fn strip_html(text: &str) -> String {
    let broken = BREAK_RE.replace_all(text, " ");
    let stripped = TAG_RE.replace_all(&broken, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    SPACE_RE.replace_all(decoded.trim(), " ").into_owned()
}

/// Keep the first `limit` characters and append an ellipsis
pub fn excerpt(text: &str, limit: usize) -> String {
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// Format a WordPress local timestamp (`2026-10-18T14:05:33`) as a long date
pub fn format_post_date(date: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.format("%B %-d, %Y").to_string())
}

/// Transform WordPress posts into display-ready articles
///
/// An empty post list is reported as `NotFound`.
pub fn transform_posts(posts: Vec<WpPost>) -> Result<NewsFeed, MappingError> {
    if posts.is_empty() {
        return Err(MappingError::NotFound);
    }

    let articles = posts
        .into_iter()
        .map(|post| {
            let image_url = post
                .embedded
                .and_then(|e| e.featured_media)
                .and_then(|media| media.into_iter().next())
                .and_then(|m| m.source_url);

            Article {
                id: post.id,
                title: strip_html(&post.title.rendered),
                excerpt: excerpt(&strip_html(&post.excerpt.rendered), EXCERPT_LIMIT),
                link: post.link,
                published: format_post_date(&post.date),
                date: post.date,
                image_url,
            }
        })
        .collect();

    Ok(NewsFeed { articles })
}

/// WordPress site -> latest posts lookup
///
/// The input is the site root, e.g. `https://techcrunch.com`.
#[derive(Debug, Clone, Default)]
pub struct NewsTool;

impl Tool for NewsTool {
    type Output = NewsFeed;
    const NAME: &'static str = "news";

    fn build_url(&self, input: &str) -> String {
        let feed = base(input);
        let feed = if feed.starts_with("http://") || feed.starts_with("https://") {
            feed.to_string()
        } else {
            format!("https://{feed}")
        };
        format!("{feed}/wp-json/wp/v2/posts?per_page={NEWS_PAGE_SIZE}&_embed")
    }

    fn map(&self, payload: &serde_json::Value) -> Result<NewsFeed, MappingError> {
        let posts = Vec::<WpPost>::deserialize(payload)?;
        transform_posts(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn post(id: u64, with_image: bool) -> serde_json::Value {
        let mut value = json!({
            "id": id,
            "date": "2026-10-18T14:05:33",
            "link": format!("https://techcrunch.com/2026/10/18/post-{id}/"),
            "title": {"rendered": "Startups &amp; <em>AI</em>"},
            "excerpt": {"rendered": "<p>Short summary &#8217;here&#8217; [&hellip;]</p>\n"}
        });
        if with_image {
            value["_embedded"] = json!({
                "wp:featuredmedia": [{"source_url": format!("https://img.example/{id}.jpg")}]
            });
        }
        value
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            NewsTool.build_url(DEFAULT_FEED),
            "https://techcrunch.com/wp-json/wp/v2/posts?per_page=3&_embed"
        );
    }

    #[test]
    fn test_build_url_adds_scheme_and_trims_slash() {
        assert_eq!(
            NewsTool.build_url("wordpress.org/news/"),
            "https://wordpress.org/news/wp-json/wp/v2/posts?per_page=3&_embed"
        );
    }

    #[test]
    fn test_map_posts() {
        let payload = json!([post(1, true), post(2, false)]);
        let feed = NewsTool.map(&payload).unwrap();

        assert_eq!(feed.articles.len(), 2);
        let first = &feed.articles[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "Startups & AI");
        assert_eq!(first.excerpt, "Short summary \u{2019}here\u{2019} [\u{2026}]...");
        assert_eq!(first.published.as_deref(), Some("October 18, 2026"));
        assert_eq!(first.image_url.as_deref(), Some("https://img.example/1.jpg"));
        assert_eq!(feed.articles[1].image_url, None);
    }

    #[test]
    fn test_map_media_without_source_url() {
        let mut value = post(3, false);
        value["_embedded"] = json!({"wp:featuredmedia": [{"code": "rest_forbidden"}]});
        let feed = NewsTool.map(&json!([value])).unwrap();
        assert_eq!(feed.articles[0].image_url, None);
    }

    #[test]
    fn test_map_empty_feed_is_not_found() {
        let err = NewsTool.map(&json!([])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_map_post_without_title_is_malformed() {
        let mut value = post(4, false);
        value.as_object_mut().unwrap().remove("title");
        let err = NewsTool.map(&json!([value])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello <strong>world</strong></p>\n<p>again</p>"),
            "Hello world again"
        );
        assert_eq!(strip_html("a &lt;b&gt; &amp; c"), "a <b> & c");
    }

    #[test]
    fn test_strip_html_inline_tags_do_not_split_words() {
        assert_eq!(strip_html("Open<strong>AI</strong> raises"), "OpenAI raises");
        assert_eq!(strip_html("Hello <b>world</b>."), "Hello world.");
        assert_eq!(
            strip_html("<a href=\"https://x.example/\">Read</a>, then share"),
            "Read, then share"
        );
    }

    #[test]
    fn test_strip_html_separates_blocks() {
        assert_eq!(strip_html("<p>One</p><p>Two</p>"), "One Two");
        assert_eq!(strip_html("line<br>break<BR/>again"), "line break again");
    }

    #[test]
    fn test_excerpt_truncates_by_characters() {
        let long = "é".repeat(200);
        let cut = excerpt(&long, EXCERPT_LIMIT);
        assert_eq!(cut.chars().count(), EXCERPT_LIMIT + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_excerpt_of_short_text_still_ends_with_ellipsis() {
        assert_eq!(excerpt("Short", EXCERPT_LIMIT), "Short...");
    }

    #[test]
    fn test_format_post_date_invalid() {
        assert_eq!(format_post_date("yesterday"), None);
    }
}
