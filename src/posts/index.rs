//! # Index Renderer
//!
//! Builds the listing page from post summaries. Pure: no I/O, output
//! depends only on the input and the site chrome.

use std::sync::OnceLock;

use regex::Regex;

use super::escape::{escape_html, unescape_html};
use super::model::{sort_newest_first, PostSummary};
use super::templates::{render_page, Page, SiteConfig, INDEX_CSS};

/// File name of the generated index document
pub const INDEX_FILE: &str = "index.html";

fn entry_pattern() -> &'static Regex {
    static ENTRY: OnceLock<Regex> = OnceLock::new();
    ENTRY.get_or_init(|| {
        Regex::new(
            r#"(?s)<li>\s*<span class="post-date">(.*?)</span>\s*<a href="[^"]*">(.*?)\.txt &#8212; (.*?)</a>\s*</li>"#,
        )
        .expect("valid regex")
    })
}

/// Render the index document, newest post first
pub fn render(summaries: &[PostSummary], site: &SiteConfig) -> String {
    let mut sorted = summaries.to_vec();
    sort_newest_first(&mut sorted);

    let items = sorted
        .iter()
        .map(|p| {
            let slug = escape_html(&p.slug);
            format!(
                "        <li>\n          <span class=\"post-date\">{date}</span>\n          <a href=\"{base}{slug}.html\">{slug}.txt &#8212; {title}</a>\n        </li>",
                date = escape_html(&p.date),
                base = escape_html(&site.base_path),
                slug = slug,
                title = escape_html(&p.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!("      <ul class=\"post-list\">\n{}\n      </ul>", items);
    let prompt = format!("$ ls -lt {}", escape_html(site.base_path.trim_matches('/')));

    render_page(
        site,
        &Page {
            title_html: &escape_html(&site.site_name),
            back_href: "/",
            back_label_html: "&lt; cd ~",
            prompt_html: &prompt,
            extra_css: INDEX_CSS,
            content_html: &content,
        },
    )
}

/// Read the listing back out of an index document, in document order
pub fn read_entries(document: &str) -> Vec<PostSummary> {
    entry_pattern()
        .captures_iter(document)
        .map(|c| {
            let field = |i: usize| c.get(i).map(|m| unescape_html(m.as_str())).unwrap_or_default();
            PostSummary {
                date: field(1),
                slug: field(2),
                title: field(3),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slug: &str, title: &str, date: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_render_sorts_newest_first() {
        let input = vec![
            summary("old-one", "Old", "2023-05-01"),
            summary("new-one", "New", "2024-02-01"),
            summary("mid-one", "Mid", "2023-11-11"),
        ];
        let html = render(&input, &SiteConfig::default());

        let new_pos = html.find("new-one.txt").unwrap();
        let mid_pos = html.find("mid-one.txt").unwrap();
        let old_pos = html.find("old-one.txt").unwrap();
        assert!(new_pos < mid_pos && mid_pos < old_pos);

        // Input is not reordered
        assert_eq!(input[0].slug, "old-one");
    }

    #[test]
    fn test_read_entries_matches_render() {
        let input = vec![
            summary("a1", "Tom & Jerry — part \"2\"", "2024-01-01"),
            summary("b2", "<b>bold</b>", "2024-03-01"),
        ];
        let entries = read_entries(&render(&input, &SiteConfig::default()));
        assert_eq!(
            entries,
            vec![input[1].clone(), input[0].clone()],
        );
    }

    #[test]
    fn test_render_escapes_titles() {
        let html = render(
            &[summary("xss", "<script>alert(1)</script>", "2024-01-01")],
            &SiteConfig::default(),
        );
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_render_empty_listing() {
        let html = render(&[], &SiteConfig::default());
        assert!(html.contains("<ul class=\"post-list\">"));
        assert!(read_entries(&html).is_empty());
    }

    #[test]
    fn test_links_use_base_path() {
        let site = SiteConfig {
            base_path: "/writing/".to_string(),
            ..SiteConfig::default()
        };
        let html = render(&[summary("first", "First", "2024-01-01")], &site);
        assert!(html.contains(r#"<a href="/writing/first.html">"#));
        assert!(html.contains("$ ls -lt writing"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = vec![summary("a1", "A", "2024-01-01"), summary("b1", "B", "2024-01-02")];
        let site = SiteConfig::default();
        assert_eq!(render(&input, &site), render(&input, &site));
    }
}
