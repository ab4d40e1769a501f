//! Movies

use serde::{Deserialize, Serialize};

/// Snapshot of a movie taken from the catalog when a ticket is added to the cart.
///
/// The cart never fetches catalog data itself; whatever the caller supplies
/// here is stored verbatim on the line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSnapshot {
    /// Catalog identifier
    pub id: u64,

    /// Display title
    pub title: String,

    /// Secondary title line
    #[serde(default)]
    pub sub_title: String,

    /// Poster image reference
    #[serde(default)]
    pub poster_img_url: String,
}

impl MovieSnapshot {
    /// Create a snapshot with only an id and title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            sub_title: String::new(),
            poster_img_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_catalog_field_names() -> TestResult {
        let movie: MovieSnapshot = serde_json::from_value(json!({
            "id": 7,
            "title": "Exhuma",
            "subTitle": "파묘",
            "posterImgUrl": "https://example.com/exhuma.jpg",
        }))?;

        assert_eq!(movie.id, 7);
        assert_eq!(movie.sub_title, "파묘");
        assert_eq!(movie.poster_img_url, "https://example.com/exhuma.jpg");

        Ok(())
    }

    #[test]
    fn missing_optional_fields_default_to_empty() -> TestResult {
        let movie: MovieSnapshot = serde_json::from_value(json!({ "id": 1, "title": "Dune" }))?;

        assert_eq!(movie, MovieSnapshot::new(1, "Dune"));

        Ok(())
    }
}
