// ABOUTME: URL validation and canonicalization for post links.
// ABOUTME: Produces PostIdentity with the post type derived from the path segment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// Accepts `https://instagram.com` or `https://www.instagram.com` with a
/// `/p/` or `/reel/` segment followed by an identifier. Anchored at the
/// start only, so trailing fragments do not reject the URL.
static POST_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://(www\.)?instagram\.com/(p|reel)/[\w-]+/?").unwrap());

/// Kind of post, derived solely from the URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Post,
    Reel,
}

/// Immutable identity of the requested post, derived once from the input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostIdentity {
    pub canonical_url: String,
    pub post_type: PostType,
}

/// Validate and canonicalize a candidate post URL.
///
/// The query string is stripped first (share links carry `?img_index=`,
/// `?igsh=` and similar), then the remainder must match the post pattern.
/// No network access happens here.
pub fn validate(url: &str) -> Result<PostIdentity, ScrapeError> {
    let clean = url.split('?').next().unwrap_or("");
    if clean.is_empty() || !POST_URL_RE.is_match(clean) {
        return Err(ScrapeError::invalid_url(url, "Validate", None));
    }

    let post_type = if clean.contains("/reel/") {
        PostType::Reel
    } else {
        PostType::Post
    };

    Ok(PostIdentity {
        canonical_url: clean.to_string(),
        post_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_post_url() {
        let id = validate("https://www.instagram.com/p/ABC123/").unwrap();
        assert_eq!(id.post_type, PostType::Post);
        assert_eq!(id.canonical_url, "https://www.instagram.com/p/ABC123/");
    }

    #[test]
    fn accepts_reel_url() {
        let id = validate("https://www.instagram.com/reel/C-uOq4tS1tM/").unwrap();
        assert_eq!(id.post_type, PostType::Reel);
    }

    #[test]
    fn accepts_bare_host_and_no_trailing_slash() {
        assert!(validate("https://instagram.com/p/xyz_9-a").is_ok());
    }

    #[test]
    fn strips_query_string() {
        let id = validate("https://www.instagram.com/p/ABC123/?img_index=2").unwrap();
        assert_eq!(id.canonical_url, "https://www.instagram.com/p/ABC123/");
    }

    #[test]
    fn rejects_other_domains() {
        assert!(validate("https://www.example.com/p/ABC123/").is_err());
        // valid-looking path on a lookalike host
        assert!(validate("https://instagram.com.evil.net/p/ABC123/").is_err());
    }

    #[test]
    fn rejects_missing_segment() {
        assert!(validate("https://www.instagram.com/someuser/").is_err());
        assert!(validate("https://www.instagram.com/").is_err());
    }

    #[test]
    fn rejects_plain_http_and_garbage() {
        assert!(validate("http://www.instagram.com/p/ABC123/").is_err());
        assert!(validate("not a url").is_err());
        assert!(validate("").is_err());
    }

    #[test]
    fn rejected_error_kind_is_invalid_url() {
        let err = validate("https://example.com/").unwrap_err();
        assert!(err.is_invalid_url());
    }
}
