use serde::{Deserialize, Deserializer, Serialize};

use crate::media::MediaType;

/// Catalog identifier as it arrives from an external payload. TMDB sends
/// numeric ids; persisted wishlist entries always use the string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
    Number(u64),
    Text(String),
}

impl CatalogId {
    pub fn normalize(&self) -> String {
        match self {
            CatalogId::Number(n) => n.to_string(),
            CatalogId::Text(s) => s.clone(),
        }
    }
}

impl From<u64> for CatalogId {
    fn from(id: u64) -> Self {
        CatalogId::Number(id)
    }
}

impl From<&str> for CatalogId {
    fn from(id: &str) -> Self {
        CatalogId::Text(id.to_string())
    }
}

impl From<String> for CatalogId {
    fn from(id: String) -> Self {
        CatalogId::Text(id)
    }
}

fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = CatalogId::deserialize(deserializer)?;
    Ok(id.normalize())
}

/// A favorited catalog entry. Entries are immutable once stored; updating
/// means removing and re-adding.
///
/// The serialized layout matches the persisted wishlist record: camelCase
/// field names, `type` for the namespace, poster/date omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    #[serde(rename = "posterPath", default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(rename = "releaseDate", default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

/// A candidate built from a catalog payload, before validation. Catalog
/// responses are not trusted to carry every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistCandidate {
    #[serde(default)]
    pub id: Option<CatalogId>,
    #[serde(rename = "type", default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "posterPath", default)]
    pub poster_path: Option<String>,
    #[serde(rename = "releaseDate", default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl WishlistCandidate {
    /// Normalize into a persistable entry. `None` when the id or the media
    /// type is missing; such candidates are never stored.
    pub fn into_item(self) -> Option<WishlistItem> {
        let id = self.id?.normalize();
        let media_type = self.media_type?;
        Some(WishlistItem {
            id,
            media_type,
            title: self.title.unwrap_or_default(),
            poster_path: self.poster_path,
            release_date: self.release_date,
            rating: self.rating.unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_with_camel_case_keys() {
        let item = WishlistItem {
            id: "603".to_string(),
            media_type: MediaType::Movie,
            title: "The Matrix".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("1999-03-30".to_string()),
            rating: 8.2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "603");
        assert_eq!(json["type"], "movie");
        assert_eq!(json["posterPath"], "/poster.jpg");
        assert_eq!(json["releaseDate"], "1999-03-30");
        assert_eq!(json["rating"], 8.2);
    }

    #[test]
    fn test_item_accepts_numeric_id_on_read() {
        let item: WishlistItem =
            serde_json::from_str(r#"{"id": 603, "type": "movie", "title": "The Matrix"}"#).unwrap();
        assert_eq!(item.id, "603");
        assert_eq!(item.rating, 0.0);
        assert!(item.poster_path.is_none());
    }

    #[test]
    fn test_absent_poster_is_omitted_on_write() {
        let item = WishlistItem {
            id: "1".to_string(),
            media_type: MediaType::Tv,
            title: "X".to_string(),
            poster_path: None,
            release_date: None,
            rating: 0.0,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("posterPath"));
        assert!(!json.contains("releaseDate"));
    }

    #[test]
    fn test_candidate_without_id_yields_no_item() {
        let candidate = WishlistCandidate {
            media_type: Some(MediaType::Movie),
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(candidate.into_item().is_none());
    }

    #[test]
    fn test_candidate_without_type_yields_no_item() {
        let candidate = WishlistCandidate {
            id: Some(CatalogId::Number(7)),
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(candidate.into_item().is_none());
    }

    #[test]
    fn test_candidate_normalizes_numeric_id() {
        let candidate = WishlistCandidate {
            id: Some(CatalogId::Number(42)),
            media_type: Some(MediaType::Tv),
            ..Default::default()
        };
        let item = candidate.into_item().unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.title, "");
    }
}
