// ABOUTME: Waterfall fallback policy combining per-field candidates from all extractors.
// ABOUTME: First non-empty candidate wins, independently per field; no voting.

use crate::document::PostDocument;
use crate::extract::{heuristics, linked_data, meta, visible_timestamp, FieldCandidate, Source};

/// The merged, at-most-one-candidate-per-field view of a document.
/// Provenance is kept so the priority policy stays observable.
#[derive(Debug, Clone, Default)]
pub struct MergedFields {
    pub upload_time: Option<FieldCandidate>,
    pub caption: Option<FieldCandidate>,
    pub author: Option<FieldCandidate>,
    pub image_url: Option<FieldCandidate>,
    pub likes: Option<FieldCandidate>,
    pub comments: Option<FieldCandidate>,
    pub views: Option<FieldCandidate>,
}

fn first_of<const N: usize>(candidates: [Option<FieldCandidate>; N]) -> Option<FieldCandidate> {
    candidates.into_iter().flatten().next()
}

/// Run every extractor over the document and merge per field:
/// - upload time: visible timestamp, then linked data
/// - caption: linked data, then og:title
/// - author: linked data, then title heuristic
/// - image: og:image only
/// - likes / comments: linked data, then description heuristic (independently)
/// - views: linked data only
pub fn merge_document(doc: &PostDocument) -> MergedFields {
    let ld = linked_data::scan(doc).unwrap_or_default();
    let meta = meta::scan(doc);
    let timestamp = visible_timestamp(doc);

    let page_title = doc.page_title().unwrap_or_default();
    let title_author = heuristics::author_from_title(&page_title);
    let description_counts = meta
        .description
        .as_deref()
        .map(heuristics::counts_from_description)
        .unwrap_or_default();

    MergedFields {
        upload_time: first_of([timestamp, ld.upload_date]),
        caption: first_of([
            ld.caption,
            meta.title.and_then(|t| FieldCandidate::new(t, Source::MetaTag)),
        ]),
        author: first_of([ld.author, title_author]),
        image_url: meta
            .image
            .and_then(|u| FieldCandidate::new(u, Source::MetaTag)),
        likes: first_of([ld.likes, description_counts.likes]),
        comments: first_of([ld.comments, description_counts.comments]),
        views: ld.views,
    }
}
