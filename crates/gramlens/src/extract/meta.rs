// ABOUTME: Meta-tag scanner reading the three Open Graph properties the pipeline uses.
// ABOUTME: Title, description, and preview image URL.

use crate::document::PostDocument;

/// The three meta properties the merge policy draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Read `og:title`, `og:description`, and `og:image` from the document.
pub fn scan(doc: &PostDocument) -> MetaFields {
    MetaFields {
        title: doc.meta_content("og:title"),
        description: doc.meta_content("og:description"),
        image: doc.meta_content("og:image"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_all_three_properties() {
        let doc = PostDocument::from_html(
            r#"<html><head>
                <meta property="og:title" content="User on Instagram: hello">
                <meta property="og:description" content="1,234 Likes, 56 Comments - caption">
                <meta property="og:image" content="https://cdn.example.net/cover.jpg">
            </head></html>"#,
        );
        let fields = scan(&doc);
        assert_eq!(fields.title.as_deref(), Some("User on Instagram: hello"));
        assert_eq!(
            fields.description.as_deref(),
            Some("1,234 Likes, 56 Comments - caption")
        );
        assert_eq!(fields.image.as_deref(), Some("https://cdn.example.net/cover.jpg"));
    }

    #[test]
    fn missing_tags_are_none() {
        let doc = PostDocument::from_html("<html><head></head></html>");
        assert_eq!(scan(&doc), MetaFields::default());
    }
}
