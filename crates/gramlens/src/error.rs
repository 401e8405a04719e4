// ABOUTME: Error taxonomy for post lookups: ErrorKind enum and ScrapeError struct.
// ABOUTME: Each kind carries a fixed localized user-facing message.

use std::fmt;

/// Closed set of failure categories a lookup can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    NotFound,
    RateLimited,
    PrivateOrUnavailable,
    TransportOrUnknown,
}

impl ErrorKind {
    /// The fixed user-facing message for this kind (Korean, one per kind).
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => {
                "유효하지 않은 인스타그램 URL입니다. https://www.instagram.com/p/... 또는 https://www.instagram.com/reel/... 형식을 사용해주세요."
            }
            ErrorKind::NotFound => "게시물을 찾을 수 없습니다.",
            ErrorKind::RateLimited => "인스타그램 요청 제한에 걸렸습니다. 나중에 다시 시도해주세요.",
            ErrorKind::PrivateOrUnavailable => {
                "비공개 게시물이거나, 삭제된 게시물, 또는 로그인이 필요합니다."
            }
            ErrorKind::TransportOrUnknown => "데이터를 가져오는데 실패했습니다.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidUrl => "invalid URL",
            ErrorKind::NotFound => "not found",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::PrivateOrUnavailable => "private or unavailable",
            ErrorKind::TransportOrUnknown => "transport error",
        };
        write!(f, "{}", s)
    }
}

/// The error type carried through the pipeline before it collapses into an
/// error record at the public boundary.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub kind: ErrorKind,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gramlens: {} {}: {}", self.op, self.url, self.kind)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a NotFound error (HTTP 404 from the document source).
    pub fn not_found(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a RateLimited error (HTTP 429 from the document source).
    pub fn rate_limited(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RateLimited,
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a PrivateOrUnavailable error (access barrier detected).
    pub fn private_or_unavailable(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PrivateOrUnavailable,
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a TransportOrUnknown error.
    pub fn transport(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::TransportOrUnknown,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.kind == ErrorKind::InvalidUrl
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Returns true if this is a RateLimited error.
    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimited
    }

    /// Returns true if this is a PrivateOrUnavailable error.
    pub fn is_private_or_unavailable(&self) -> bool {
        self.kind == ErrorKind::PrivateOrUnavailable
    }

    /// Returns true if this is a TransportOrUnknown error.
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::TransportOrUnknown
    }
}
