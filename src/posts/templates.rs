//! Page chrome shared by post and index documents.
//!
//! Every generated page is a standalone document in the site's terminal
//! style: stylesheet, window header with theme toggle, body, footer
//! prompt and the inline theme script.

use serde::{Deserialize, Serialize};

use super::escape::escape_html;

/// Site-wide page chrome settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Appended to every `<title>` ("Post title - site_name")
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Text shown in the terminal window header
    #[serde(default = "default_terminal_title")]
    pub terminal_title: String,

    /// URL path the blog is served under; starts and ends with `/`
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_site_name() -> String {
    "Blog".to_string()
}

fn default_terminal_title() -> String {
    "admin@localhost:~/blog".to_string()
}

fn default_base_path() -> String {
    "/blog/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            terminal_title: default_terminal_title(),
            base_path: default_base_path(),
        }
    }
}

const BASE_CSS: &str = r#"    @keyframes blink {
      0%, 100% { opacity: 1; }
      50% { opacity: 0; }
    }
    :root, [data-theme="dark"] {
      --bg: #0a0a0a; --terminal-bg: #0a0a0a; --header-bg: #111;
      --border: #333; --text: #ccc; --text-dim: #888; --text-muted: #555;
      --accent: #00ff41; --section-border: #1a1a1a; --code-bg: #1a1a1a;
    }
    [data-theme="light"] {
      --bg: #e8e8e8; --terminal-bg: #f5f5f0; --header-bg: #ddd;
      --border: #bbb; --text: #222; --text-dim: #666; --text-muted: #999;
      --accent: #007a1f; --section-border: #ccc; --code-bg: #ddd;
    }
    * { box-sizing: border-box; }
    body {
      margin: 0;
      font: 15px/1.7 'Courier New', 'Lucida Console', monospace;
      background: var(--bg); color: var(--text);
      min-height: 100vh;
      display: flex; justify-content: center; align-items: center;
      padding: 24px 16px;
    }
    .terminal { max-width: 900px; width: 100%; border: 1px solid var(--border); }
    .terminal-header {
      background: var(--header-bg);
      border-bottom: 1px solid var(--border);
      padding: 10px 16px;
      display: flex; align-items: center; gap: 8px;
    }
    .dot { width: 12px; height: 12px; border-radius: 50%; display: inline-block; }
    .dot.red { background: #ff5f56; }
    .dot.yellow { background: #ffbd2e; }
    .dot.green { background: #27c93f; }
    .terminal-header .title { margin-left: 12px; color: var(--text-dim); font-size: 13px; }
    .theme-toggle {
      margin-left: auto; background: none; border: 1px solid var(--border);
      color: var(--accent); font: inherit; font-size: 12px; padding: 2px 8px; cursor: pointer;
    }
    .terminal-body { padding: 28px 32px; background: var(--terminal-bg); }
    .prompt { color: var(--text-dim); margin: 0 0 16px; }
    a { color: var(--accent); text-decoration: none; }
    a:hover { color: var(--text); }
    .cursor { display: inline-block; color: var(--accent); animation: blink 1s step-end infinite; }
    .footer { margin-top: 24px; color: var(--text-dim); }
    .back-link { margin-bottom: 16px; display: block; }
    @media (max-width: 700px) {
      body { padding: 8px; }
      .terminal-body { padding: 16px; }
    }"#;

/// Extra rules for post pages
pub const POST_CSS: &str = r#"    .post-title { color: var(--accent); font-weight: bold; font-size: 18px; margin: 0 0 4px; }
    .post-date { color: var(--text-dim); font-size: 13px; margin: 0 0 20px; }
    .post-body p { margin: 12px 0; }
    code { background: var(--code-bg); padding: 2px 6px; color: var(--accent); }"#;

/// Extra rules for the index page
pub const INDEX_CSS: &str = r#"    .post-list { list-style: none; padding: 0; margin: 0; }
    .post-list li { padding: 8px 0; border-bottom: 1px solid var(--section-border); }
    .post-list li:last-child { border-bottom: none; }
    .post-date { color: var(--text-dim); font-size: 13px; margin-right: 12px; }"#;

const THEME_SCRIPT: &str = r#"  <script>
    (function() {
      var html = document.documentElement;
      var btn = document.getElementById('theme-toggle');
      var saved = localStorage.getItem('theme');
      if (saved) html.setAttribute('data-theme', saved);
      function updateBtn() {
        var current = html.getAttribute('data-theme') || 'dark';
        btn.textContent = current === 'dark' ? '[light]' : '[dark]';
      }
      updateBtn();
      btn.addEventListener('click', function() {
        var current = html.getAttribute('data-theme') || 'dark';
        var next = current === 'dark' ? 'light' : 'dark';
        html.setAttribute('data-theme', next);
        localStorage.setItem('theme', next);
        updateBtn();
      });
    })();
  </script>"#;

/// One generated page, before wrapping in the chrome
pub struct Page<'a> {
    /// Already-escaped text for `<title>`, before the site name suffix
    pub title_html: &'a str,
    pub back_href: &'a str,
    /// Already-escaped back link label
    pub back_label_html: &'a str,
    /// Already-escaped prompt line shown above the content
    pub prompt_html: &'a str,
    pub extra_css: &'a str,
    /// Already-escaped content, indented for the terminal body
    pub content_html: &'a str,
}

/// Wrap page content in the full document chrome
pub fn render_page(site: &SiteConfig, page: &Page<'_>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en" data-theme="dark">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title} - {site_name}</title>
  <link rel="icon" type="image/svg+xml" href="/favicon.svg">
  <style>
{base_css}
{extra_css}
  </style>
</head>

<body>
  <div class="terminal">
    <div class="terminal-header">
      <span class="dot red"></span>
      <span class="dot yellow"></span>
      <span class="dot green"></span>
      <span class="title">{terminal_title}</span>
      <button class="theme-toggle" id="theme-toggle">[light]</button>
    </div>

    <div class="terminal-body">
      <a href="{back_href}" class="back-link">{back_label}</a>
      <p class="prompt">{prompt}</p>

{content}

      <p class="footer">$ <span class="cursor">&#9608;</span></p>
    </div>
  </div>

{script}
</body>

</html>
"#,
        title = page.title_html,
        site_name = escape_html(&site.site_name),
        base_css = BASE_CSS,
        extra_css = page.extra_css,
        terminal_title = escape_html(&site.terminal_title),
        back_href = escape_html(page.back_href),
        back_label = page.back_label_html,
        prompt = page.prompt_html,
        content = page.content_html,
        script = THEME_SCRIPT,
    )
}
