// ABOUTME: PostDocument abstraction over the two transport shapes a page can arrive in.
// ABOUTME: Raw HTML is parsed with scraper; rendered-DOM snapshots come pre-extracted.

use scraper::{Html, Selector};

/// A pre-extracted rendered-DOM snapshot, as a headless-browser transport
/// would hand it over: everything the extractors query, nothing else.
#[derive(Debug, Clone, Default)]
pub struct DomSnapshot {
    pub page_title: Option<String>,
    /// (property, content) pairs of the page's meta tags.
    pub meta: Vec<(String, String)>,
    /// Raw text of each `application/ld+json` script block, in document order.
    pub ld_json_blocks: Vec<String>,
    /// `datetime` attribute of the first visible `<time>` element.
    pub first_time_datetime: Option<String>,
}

/// The fetched page in either transport shape. The extractors only ever go
/// through the four queries below, so both shapes behave identically.
pub enum PostDocument {
    Parsed(Html),
    Snapshot(DomSnapshot),
}

impl PostDocument {
    /// Parse raw HTML text into a queryable document.
    pub fn from_html(html: &str) -> Self {
        PostDocument::Parsed(Html::parse_document(html))
    }

    /// Wrap a pre-extracted rendered-DOM snapshot.
    pub fn from_snapshot(snapshot: DomSnapshot) -> Self {
        PostDocument::Snapshot(snapshot)
    }

    /// Content of the first non-empty `meta[property=...]` tag.
    pub fn meta_content(&self, property: &str) -> Option<String> {
        match self {
            PostDocument::Parsed(doc) => {
                let sel = Selector::parse(&format!("meta[property='{}']", property)).ok()?;
                for el in doc.select(&sel) {
                    if let Some(content) = el.value().attr("content") {
                        let trimmed = content.trim();
                        if !trimmed.is_empty() {
                            return Some(trimmed.to_string());
                        }
                    }
                }
                None
            }
            PostDocument::Snapshot(snap) => snap
                .meta
                .iter()
                .find(|(prop, content)| prop == property && !content.trim().is_empty())
                .map(|(_, content)| content.trim().to_string()),
        }
    }

    /// Raw text of every structured-data script block, in document order.
    pub fn ld_json_blocks(&self) -> Vec<String> {
        match self {
            PostDocument::Parsed(doc) => {
                let sel = match Selector::parse("script[type='application/ld+json']") {
                    Ok(s) => s,
                    Err(_) => return Vec::new(),
                };
                doc.select(&sel)
                    .map(|el| el.text().collect::<String>())
                    .collect()
            }
            PostDocument::Snapshot(snap) => snap.ld_json_blocks.clone(),
        }
    }

    /// Machine-readable `datetime` attribute of the first `<time>` element.
    pub fn first_time_datetime(&self) -> Option<String> {
        match self {
            PostDocument::Parsed(doc) => {
                let sel = Selector::parse("time[datetime]").ok()?;
                doc.select(&sel)
                    .next()
                    .and_then(|el| el.value().attr("datetime"))
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            }
            PostDocument::Snapshot(snap) => snap
                .first_time_datetime
                .as_deref()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    /// Text of the `<title>` element, whitespace-normalized.
    pub fn page_title(&self) -> Option<String> {
        match self {
            PostDocument::Parsed(doc) => {
                let sel = Selector::parse("title").ok()?;
                let el = doc.select(&sel).next()?;
                let text: String = el.text().collect::<Vec<_>>().join(" ");
                let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if normalized.is_empty() {
                    None
                } else {
                    Some(normalized)
                }
            }
            PostDocument::Snapshot(snap) => snap
                .page_title
                .as_deref()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }
}
