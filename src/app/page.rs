use crate::app::gauge::escape_xml;

pub const SHOW_NEW_URL: &str = "https://news.ycombinator.com/shownew";

const PAGE_CSS: &str = r#"
body { background: #282c34; color: white; font-family: sans-serif; text-align: center; margin: 0; }
.header { padding: 1rem 2rem 0; }
.header a { color: #61dafb; }
svg { width: 100%; max-width: 100vh; }
"#;

/// Standalone HTML page around a rendered gauge.
pub fn render_page(gauge_svg: &str, sample_size: usize, source_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI HYPE</title>
    <style>{css}</style>
</head>
<body>
    <div class="header">
        <h1>AI HYPE</h1>
        <p>
            as measured by the percentage of the latest {sample_size} "Show HN" posts on
            <a href="{source_url}" target="_blank" rel="noreferrer">Hacker News</a>
            which contain AI related keywords
        </p>
        <p>
            the hype dial severity greatly increases as the percentage of posts
            approaches 100%
        </p>
    </div>
    {gauge_svg}
</body>
</html>
"#,
        css = PAGE_CSS,
        source_url = escape_xml(source_url),
    )
}
