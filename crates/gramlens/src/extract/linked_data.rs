// ABOUTME: Structured-data (JSON-LD) scanner over the page's script blocks.
// ABOUTME: Selects the first qualifying post block and derives date, caption, author, and counts.

use serde_json::Value;

use crate::document::PostDocument;
use crate::extract::{FieldCandidate, Source};

/// Everything the linked-data scanner can contribute.
#[derive(Debug, Clone, Default)]
pub struct LinkedDataFields {
    pub upload_date: Option<FieldCandidate>,
    pub caption: Option<FieldCandidate>,
    pub author: Option<FieldCandidate>,
    pub likes: Option<FieldCandidate>,
    pub comments: Option<FieldCandidate>,
    pub views: Option<FieldCandidate>,
}

/// Scan the document's structured-data blocks and extract post fields from
/// the first qualifying block. Returns None when no block qualifies.
pub fn scan(doc: &PostDocument) -> Option<LinkedDataFields> {
    select_block(doc).map(|block| extract_fields(&block))
}

/// Select the first structured-data block describing the post itself.
///
/// Blocks may be array-wrapped; profile blocks are skipped; the first block
/// exposing an upload date, publish date, or interaction statistics wins and
/// no further scripts are scanned. Malformed JSON is silently skipped.
pub fn select_block(doc: &PostDocument) -> Option<Value> {
    for text in doc.ld_json_blocks() {
        let value: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(_) => continue,
        };

        let items = match value {
            Value::Array(arr) => arr,
            other => vec![other],
        };

        for item in items {
            if item.get("@type").and_then(Value::as_str) == Some("InstagramPublicProfile") {
                continue;
            }
            if has_value(&item, "uploadDate")
                || has_value(&item, "datePublished")
                || has_value(&item, "interactionStatistic")
            {
                return Some(item);
            }
        }
    }
    None
}

fn has_value(block: &Value, key: &str) -> bool {
    block.get(key).map_or(false, |v| !v.is_null())
}

fn first_string(block: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| block.get(*key).and_then(Value::as_str))
        .map(|s| s.to_string())
}

/// An interaction count may be a JSON number or a string.
fn count_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Matches the bare action keyword or its schema.org-qualified form.
fn action_matches(interaction_type: &str, action: &str) -> bool {
    interaction_type == action
        || interaction_type.strip_prefix("http://schema.org/") == Some(action)
}

fn extract_fields(block: &Value) -> LinkedDataFields {
    let upload_date = first_string(block, &["uploadDate", "datePublished"]);
    let caption = first_string(block, &["caption", "headline", "articleBody"]);

    let author = block.get("author").and_then(|author| {
        author
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| author.get("alternateName").and_then(Value::as_str))
            .map(|s| s.to_string())
    });

    let mut likes = None;
    let mut comments = None;
    let mut views = None;
    if let Some(stats) = block.get("interactionStatistic").and_then(Value::as_array) {
        for stat in stats {
            let interaction_type = match stat.get("interactionType").and_then(Value::as_str) {
                Some(t) => t,
                None => continue,
            };
            let count = match stat.get("userInteractionCount").and_then(count_to_string) {
                Some(c) => c,
                None => continue,
            };
            if action_matches(interaction_type, "LikeAction") {
                likes = Some(count);
            } else if action_matches(interaction_type, "CommentAction") {
                comments = Some(count);
            } else if action_matches(interaction_type, "WatchAction") {
                views = Some(count);
            }
        }
    }

    LinkedDataFields {
        upload_date: upload_date.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
        caption: caption.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
        author: author.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
        likes: likes.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
        comments: comments.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
        views: views.and_then(|v| FieldCandidate::new(v, Source::LinkedData)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_blocks(blocks: &[&str]) -> PostDocument {
        let scripts: String = blocks
            .iter()
            .map(|b| format!("<script type=\"application/ld+json\">{}</script>", b))
            .collect();
        PostDocument::from_html(&format!("<html><head>{}</head><body></body></html>", scripts))
    }

    const POST_BLOCK: &str = r#"{
        "@type": "SocialMediaPosting",
        "uploadDate": "2024-08-16T05:00:00.000Z",
        "caption": "a sunny day",
        "author": {"name": "Some User", "alternateName": "someuser"},
        "interactionStatistic": [
            {"interactionType": "http://schema.org/LikeAction", "userInteractionCount": 1234},
            {"interactionType": "CommentAction", "userInteractionCount": "56"},
            {"interactionType": "http://schema.org/WatchAction", "userInteractionCount": 99000}
        ]
    }"#;

    #[test]
    fn extracts_all_fields_from_post_block() {
        let doc = doc_with_blocks(&[POST_BLOCK]);
        let fields = scan(&doc).unwrap();
        assert_eq!(
            fields.upload_date.as_ref().unwrap().value,
            "2024-08-16T05:00:00.000Z"
        );
        assert_eq!(fields.caption.as_ref().unwrap().value, "a sunny day");
        assert_eq!(fields.author.as_ref().unwrap().value, "Some User");
        assert_eq!(fields.likes.as_ref().unwrap().value, "1234");
        assert_eq!(fields.comments.as_ref().unwrap().value, "56");
        assert_eq!(fields.views.as_ref().unwrap().value, "99000");
        assert_eq!(fields.likes.unwrap().source, Source::LinkedData);
    }

    #[test]
    fn profile_blocks_are_skipped() {
        let profile = r#"{"@type": "InstagramPublicProfile", "datePublished": "2020-01-01"}"#;
        let doc = doc_with_blocks(&[profile, POST_BLOCK]);
        let fields = scan(&doc).unwrap();
        assert_eq!(fields.caption.unwrap().value, "a sunny day");
    }

    #[test]
    fn first_qualifying_block_wins() {
        let second = r#"{"@type": "SocialMediaPosting", "uploadDate": "2020-01-01T00:00:00Z", "caption": "older"}"#;
        let doc = doc_with_blocks(&[POST_BLOCK, second]);
        let fields = scan(&doc).unwrap();
        assert_eq!(fields.caption.unwrap().value, "a sunny day");
    }

    #[test]
    fn array_wrapped_blocks_are_unwrapped() {
        let wrapped = format!("[{}]", POST_BLOCK);
        let doc = doc_with_blocks(&[&wrapped]);
        assert!(scan(&doc).is_some());
    }

    #[test]
    fn malformed_json_is_skipped_not_fatal() {
        let doc = doc_with_blocks(&["{not json", POST_BLOCK]);
        assert!(scan(&doc).is_some());
    }

    #[test]
    fn author_falls_back_to_alternate_name() {
        let block = r#"{"datePublished": "2024-01-01", "author": {"alternateName": "someuser"}}"#;
        let doc = doc_with_blocks(&[block]);
        let fields = scan(&doc).unwrap();
        assert_eq!(fields.author.unwrap().value, "someuser");
    }

    #[test]
    fn caption_priority_caption_headline_body() {
        let block = r#"{"datePublished": "2024-01-01", "headline": "head", "articleBody": "body"}"#;
        let doc = doc_with_blocks(&[block]);
        assert_eq!(scan(&doc).unwrap().caption.unwrap().value, "head");
    }

    #[test]
    fn no_qualifying_block_yields_none() {
        let doc = doc_with_blocks(&[r#"{"@type": "BreadcrumbList"}"#]);
        assert!(scan(&doc).is_none());
        let empty = PostDocument::from_html("<html></html>");
        assert!(scan(&empty).is_none());
    }

    #[test]
    fn unknown_interaction_types_are_ignored() {
        let block = r#"{"uploadDate": "2024-01-01", "interactionStatistic": [
            {"interactionType": "ShareAction", "userInteractionCount": 5}
        ]}"#;
        let doc = doc_with_blocks(&[block]);
        let fields = scan(&doc).unwrap();
        assert!(fields.likes.is_none());
        assert!(fields.comments.is_none());
        assert!(fields.views.is_none());
    }

    #[test]
    fn action_matching_accepts_both_forms() {
        assert!(action_matches("LikeAction", "LikeAction"));
        assert!(action_matches("http://schema.org/LikeAction", "LikeAction"));
        assert!(!action_matches("https://schema.org/LikeAction", "LikeAction"));
        assert!(!action_matches("LikeAction", "CommentAction"));
    }
}
