//! # Field Codec
//!
//! Encodes a post record into a complete HTML document and recovers the
//! title, date and body from such a document.
//!
//! ## Decoding is permissive
//! `decode` never fails. A marker that cannot be found yields an empty
//! field, so a hand-edited or foreign `.html` file in the store still
//! lists (with blank values) instead of breaking the whole listing.
//!
//! ## Marker collisions
//! All interpolated text is escaped for `& < > " '`, so user text cannot
//! contain a literal `</h1>`, `</p>` or `</div>`. The structural markers
//! are therefore unambiguous for any document this module produced.

use std::sync::OnceLock;

use regex::Regex;

use super::escape::{escape_html, unescape_html};
use super::model::{Post, PostFields};
use super::templates::{render_page, Page, SiteConfig, POST_CSS};

struct Markers {
    title: Regex,
    date: Regex,
    body: Regex,
    paragraph: Regex,
    blank_lines: Regex,
}

fn markers() -> &'static Markers {
    static MARKERS: OnceLock<Markers> = OnceLock::new();
    MARKERS.get_or_init(|| Markers {
        title: Regex::new(r#"(?s)<h1 class="post-title">(.*?)</h1>"#).expect("valid regex"),
        date: Regex::new(r#"(?s)<p class="post-date">(.*?)</p>"#).expect("valid regex"),
        body: Regex::new(r#"(?s)<div class="post-body">(.*?)</div>"#).expect("valid regex"),
        paragraph: Regex::new(r"(?s)<p>(.*?)</p>").expect("valid regex"),
        blank_lines: Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid regex"),
    })
}

/// Split body text into trimmed, non-empty paragraphs on blank lines
pub fn paragraphs(body: &str) -> Vec<&str> {
    markers()
        .blank_lines
        .split(body)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Render a post as a standalone HTML document
pub fn encode(post: &Post, site: &SiteConfig) -> String {
    let paragraphs = paragraphs(&post.body)
        .into_iter()
        .map(|p| format!("        <p>{}</p>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n\n");

    let title = escape_html(&post.title);
    let content = format!(
        "      <h1 class=\"post-title\">{title}</h1>\n      <p class=\"post-date\">{date}</p>\n\n      <div class=\"post-body\">\n{paragraphs}\n      </div>",
        title = title,
        date = escape_html(&post.date),
        paragraphs = paragraphs,
    );
    let prompt = format!("$ cat {}.txt", escape_html(&post.slug));

    render_page(
        site,
        &Page {
            title_html: &title,
            back_href: &site.base_path,
            back_label_html: "&lt; cd ~/blog",
            prompt_html: &prompt,
            extra_css: POST_CSS,
            content_html: &content,
        },
    )
}

/// Recover title, date and body from a post document.
///
/// Missing markers decode to empty strings.
pub fn decode(document: &str) -> PostFields {
    let m = markers();
    let capture = |re: &Regex| {
        re.captures(document)
            .and_then(|c| c.get(1))
            .map(|g| unescape_html(g.as_str()))
            .unwrap_or_default()
    };

    let body = m
        .body
        .captures(document)
        .and_then(|c| c.get(1))
        .map(|region| {
            m.paragraph
                .captures_iter(region.as_str())
                .filter_map(|c| c.get(1))
                .map(|p| unescape_html(p.as_str().trim()))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .unwrap_or_default();

    PostFields {
        title: capture(&m.title),
        date: capture(&m.date),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> Post {
        Post {
            slug: "hello-world".to_string(),
            title: title.to_string(),
            date: "2024-01-15".to_string(),
            body: body.to_string(),
        }
    }

    fn round_trip(p: &Post) -> Post {
        Post::from_fields(p.slug.clone(), decode(&encode(p, &SiteConfig::default())))
    }

    #[test]
    fn test_round_trip_plain() {
        let p = post("Hello World", "First post.");
        assert_eq!(round_trip(&p), p);
    }

    #[test]
    fn test_round_trip_paragraphs() {
        let p = post("Notes", "One.\n\nTwo has\na line break.\n\nThree.");
        assert_eq!(round_trip(&p), p);
    }

    #[test]
    fn test_round_trip_markup_in_fields() {
        let p = post(
            "</h1><p class=\"post-date\">1999-01-01</p>",
            "a </p> b </div> & 'c' \"d\"\n\n<div class=\"post-body\"><p>x</p></div>",
        );
        assert_eq!(round_trip(&p), p);
    }

    #[test]
    fn test_round_trip_preserves_literal_entities() {
        let p = post("&amp; is an entity", "Write &lt; to get <");
        assert_eq!(round_trip(&p), p);
    }

    #[test]
    fn test_body_blank_line_variants_normalize() {
        let p = post("T", "a\n\n\n\nb\n \t\nc\r\n\r\nd");
        assert_eq!(round_trip(&p).body, "a\n\nb\n\nc\n\nd");
    }

    #[test]
    fn test_script_title_is_escaped() {
        let html = encode(&post("<script>alert(1)</script>", "x"), &SiteConfig::default());
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_decode_missing_markers_is_empty() {
        assert_eq!(decode("<html><body>nothing here</body></html>"), PostFields::default());
        assert_eq!(decode(""), PostFields::default());
    }

    #[test]
    fn test_decode_partial_document() {
        let fields = decode(r#"<h1 class="post-title">Only &amp; title</h1>"#);
        assert_eq!(fields.title, "Only & title");
        assert_eq!(fields.date, "");
        assert_eq!(fields.body, "");
    }

    #[test]
    fn test_encode_uses_site_chrome() {
        let site = SiteConfig {
            site_name: "Field Notes".to_string(),
            terminal_title: "me@box:~/blog".to_string(),
            base_path: "/notes/".to_string(),
        };
        let html = encode(&post("Hi", "x"), &site);
        assert!(html.contains("<title>Hi - Field Notes</title>"));
        assert!(html.contains("me@box:~/blog"));
        assert!(html.contains(r#"<a href="/notes/" class="back-link">"#));
        assert!(html.contains("$ cat hello-world.txt"));
    }
}
