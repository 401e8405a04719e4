// ABOUTME: Normalizer turning merged candidates into the final display record.
// ABOUTME: KST timestamp rendering, zero-count defaults, and the views sentinel.

use chrono::{DateTime, FixedOffset, Utc};

use crate::extract::merge::MergedFields;
use crate::identity::{PostIdentity, PostType};
use crate::result::PostReport;

/// Sentinel for an upload time that could not be resolved or parsed.
pub const UNKNOWN_TIME: &str = "알 수 없음";

/// Sentinel for reel views that were not exposed.
pub const PRIVATE_VIEWS: &str = "비공개";

/// Default for like/comment counts when no source yielded one.
pub const ZERO_COUNT: &str = "0";

/// Fixed target zone: KST is UTC+9 with no DST, so a fixed offset suffices.
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Parse an absolute instant: RFC3339 fast path, then loose formats.
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    dateparser::parse(s).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Render a raw upload timestamp in KST as "YYYY-MM-DD HH:mm (KST)".
/// Missing or unparsable input yields the unknown sentinel; never an error.
pub fn format_upload_time(raw: Option<&str>) -> String {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECS).unwrap();
    raw.and_then(parse_instant)
        .map(|dt| format!("{} (KST)", dt.with_timezone(&kst).format("%Y-%m-%d %H:%M")))
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Build the final record from the merged candidates.
///
/// Likes and comments always come out populated ("0" default); views only
/// exist for reels, with the private sentinel when unresolved; caption,
/// image, and author pass through with no defaulting.
pub fn finalize(identity: &PostIdentity, merged: MergedFields) -> PostReport {
    let views = match identity.post_type {
        PostType::Reel => Some(
            merged
                .views
                .map(|c| c.value)
                .unwrap_or_else(|| PRIVATE_VIEWS.to_string()),
        ),
        PostType::Post => None,
    };

    PostReport {
        post_type: Some(identity.post_type),
        upload_time: format_upload_time(merged.upload_time.as_ref().map(|c| c.value.as_str())),
        likes: Some(
            merged
                .likes
                .map(|c| c.value)
                .unwrap_or_else(|| ZERO_COUNT.to_string()),
        ),
        comments: Some(
            merged
                .comments
                .map(|c| c.value)
                .unwrap_or_else(|| ZERO_COUNT.to_string()),
        ),
        views,
        caption: merged.caption.map(|c| c.value),
        image_url: merged.image_url.map(|c| c.value),
        author: merged.author.map(|c| c.value),
        error: None,
    }
}
