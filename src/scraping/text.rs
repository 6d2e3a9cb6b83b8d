use scraper::{ElementRef, Html, Selector};

/// Main-content containers, most specific first.
const CONTENT_SELECTORS: &[&str] = &[
    "#mw-content-text",
    ".mw-parser-output",
    "#content",
    "main",
    "article",
];

/// Plain text of a page's main content region.
///
/// Uses the first container in [`CONTENT_SELECTORS`] that exists, else
/// `<body>`. Each text node is trimmed, empty nodes are dropped and the rest
/// are joined with `\n`, so headings such as "WvW" end up on their own line.
pub fn main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for sel in CONTENT_SELECTORS.iter().chain(std::iter::once(&"body")) {
        if let Ok(selector) = Selector::parse(sel) {
            if let Some(node) = document.select(&selector).next() {
                return flatten(node);
            }
        }
    }

    flatten(document.root_element())
}

fn flatten(node: ElementRef<'_>) -> String {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
