// ABOUTME: PostReport, the final display-ready record a lookup produces.
// ABOUTME: Serialized with camelCase names; error records carry only the message.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::identity::PostType;

/// The result of one post lookup: either a fully populated success record or
/// a fully empty error record. Constructed fresh per request, no identity
/// beyond the call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostReport {
    pub post_type: Option<PostType>,
    /// "YYYY-MM-DD HH:mm (KST)" or the unknown sentinel; empty only in
    /// error records.
    pub upload_time: String,
    pub likes: Option<String>,
    pub comments: Option<String>,
    pub views: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostReport {
    /// Build the error record for a failure kind: the localized message is
    /// set and every data field stays null/empty.
    pub fn failed(kind: ErrorKind) -> Self {
        Self {
            error: Some(kind.message().to_string()),
            ..Default::default()
        }
    }

    /// Returns true if this record describes a failed lookup.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Returns true if the record carries an author.
    pub fn has_author(&self) -> bool {
        self.author.as_ref().map_or(false, |a| !a.is_empty())
    }

    /// Returns true if the record carries a cover image URL.
    pub fn has_image(&self) -> bool {
        self.image_url.as_ref().map_or(false, |u| !u.is_empty())
    }
}
