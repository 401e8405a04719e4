// ABOUTME: Candidate extractors over a fetched post document.
// ABOUTME: Each scanner is a pure function yielding at most one candidate per field.

pub mod heuristics;
pub mod linked_data;
pub mod merge;
pub mod meta;

use crate::document::PostDocument;

/// Extractor provenance, ordered by priority (lower = higher priority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    VisibleTimestamp,
    LinkedData,
    MetaTag,
    TitleHeuristic,
    DescriptionHeuristic,
}

/// One candidate value for a field, tagged with the extractor that found it.
/// At most one candidate per field survives the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCandidate {
    pub value: String,
    pub source: Source,
}

impl FieldCandidate {
    /// Builds a candidate, treating blank values as no candidate.
    pub fn new(value: impl Into<String>, source: Source) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                value: trimmed.to_string(),
                source,
            })
        }
    }
}

/// Visible-timestamp scanner: the machine-readable `datetime` attribute of
/// the first `<time>` element, if any.
pub fn visible_timestamp(doc: &PostDocument) -> Option<FieldCandidate> {
    doc.first_time_datetime()
        .and_then(|v| FieldCandidate::new(v, Source::VisibleTimestamp))
}
