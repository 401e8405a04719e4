// ABOUTME: The lookup client orchestrating the pipeline: validate, fetch, extract, classify.
// ABOUTME: Every failure collapses into an error PostReport at this boundary.

use crate::document::PostDocument;
use crate::error::{ErrorKind, ScrapeError};
use crate::extract::{linked_data, merge};
use crate::identity::{self, PostIdentity};
use crate::normalize;
use crate::options::{ClientBuilder, Options};
use crate::result::PostReport;
use crate::source::{browser_headers, fetch, FetchOptions};

/// Page-title markers of an access barrier (login wall or removed post).
const BARRIER_TITLE_MARKERS: &[&str] = &["Login", "Page Not Found"];

/// Classify an HTTP status the way the pipeline does: 404 and 429 are
/// terminal; anything else (401/403 included) is deliberately lenient — the
/// body is still parsed and either yields data or degrades downstream.
pub fn classify_status(status: u16) -> Option<ErrorKind> {
    match status {
        404 => Some(ErrorKind::NotFound),
        429 => Some(ErrorKind::RateLimited),
        _ => None,
    }
}

/// Run the extraction-and-merge pipeline over an already-fetched document.
///
/// Pure with respect to the document: the same content always yields the
/// same record. Short-circuits with PrivateOrUnavailable when the page title
/// carries a barrier marker and no structured-data block qualifies.
pub fn extract_post(
    identity: &PostIdentity,
    doc: &PostDocument,
) -> Result<PostReport, ScrapeError> {
    let page_title = doc.page_title().unwrap_or_default();
    let barrier_title = BARRIER_TITLE_MARKERS
        .iter()
        .any(|marker| page_title.contains(marker));
    if barrier_title && linked_data::select_block(doc).is_none() {
        return Err(ScrapeError::private_or_unavailable(
            &identity.canonical_url,
            "Extract",
        ));
    }

    let merged = merge::merge_document(doc);
    Ok(normalize::finalize(identity, merged))
}

/// The lookup client. One URL per call, one fetch per call, no retry.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Look up a post by URL. Never fails: every outcome is a complete
    /// record, with the error taxonomy collapsed into the message field.
    pub async fn lookup(&self, url: &str) -> PostReport {
        match self.run(url).await {
            Ok(report) => report,
            Err(err) => PostReport::failed(err.kind),
        }
    }

    /// Run the pipeline over a static HTML document, skipping the network.
    pub fn lookup_html(&self, html: &str, url: &str) -> PostReport {
        let report = identity::validate(url).and_then(|identity| {
            let doc = PostDocument::from_html(html);
            extract_post(&identity, &doc)
        });
        match report {
            Ok(report) => report,
            Err(err) => PostReport::failed(err.kind),
        }
    }

    async fn run(&self, url: &str) -> Result<PostReport, ScrapeError> {
        let identity = identity::validate(url)?;

        let mut headers = browser_headers();
        headers.extend(self.opts.headers.clone());
        let fetch_opts = FetchOptions { headers };

        let fetched = fetch(&self.http_client, &identity.canonical_url, &fetch_opts).await?;

        if let Some(kind) = classify_status(fetched.status) {
            return Err(ScrapeError {
                kind,
                url: identity.canonical_url.clone(),
                op: "Fetch".to_string(),
                source: None,
            });
        }

        let html = fetched.text_utf8(None);
        let doc = PostDocument::from_html(&html);
        extract_post(&identity, &doc)
    }
}
