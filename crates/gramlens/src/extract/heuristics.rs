// ABOUTME: Free-text heuristics over the page title and meta description.
// ABOUTME: Gap-fillers for author and like/comment counts when structured sources miss.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{FieldCandidate, Source};

/// Titles look like "Name (@handle) on Instagram: ..." or
/// "Name (@handle) • Instagram photos and videos".
static AUTHOR_HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(@([^)]+)\)").unwrap());

static LIKES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([\d,.]+[km]?) likes?").unwrap());

static COMMENTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d,.]+[km]?) comments?").unwrap());

/// Title heuristic: capture the parenthesized "@handle" token as the author.
pub fn author_from_title(title: &str) -> Option<FieldCandidate> {
    AUTHOR_HANDLE_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| FieldCandidate::new(m.as_str(), Source::TitleHeuristic))
}

/// Counts recovered from the meta description.
#[derive(Debug, Clone, Default)]
pub struct DescriptionCounts {
    pub likes: Option<FieldCandidate>,
    pub comments: Option<FieldCandidate>,
}

/// Description heuristic: the stats live before the first hyphen, in the
/// shape "1,234 Likes, 56 Comments - caption...". Numbers may carry a k/m
/// suffix.
pub fn counts_from_description(description: &str) -> DescriptionCounts {
    let stats = description.split('-').next().unwrap_or("").trim();

    let likes = LIKES_RE
        .captures(stats)
        .and_then(|caps| caps.get(1))
        .and_then(|m| FieldCandidate::new(m.as_str(), Source::DescriptionHeuristic));
    let comments = COMMENTS_RE
        .captures(stats)
        .and_then(|caps| caps.get(1))
        .and_then(|m| FieldCandidate::new(m.as_str(), Source::DescriptionHeuristic));

    DescriptionCounts { likes, comments }
}
