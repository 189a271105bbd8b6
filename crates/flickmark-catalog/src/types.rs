use flickmark_models::{CatalogId, MediaType, WishlistCandidate};
use serde::Deserialize;

/// Poster artwork base; paths from the catalog are relative fragments.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One page of listing results (search, recommendations, curated lists).
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    pub page: u32,
    pub results: Vec<ListingItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A catalog listing entry. Movie payloads carry `title`/`release_date`,
/// TV payloads `name`/`first_air_date`; accessors resolve whichever is set.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    pub overview: Option<String>,
}

impl ListingItem {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().or(self.name.as_deref()).unwrap_or("")
    }

    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .filter(|d| !d.is_empty())
    }

    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub english_name: Option<String>,
    pub name: Option<String>,
}

impl SpokenLanguage {
    pub fn display_name(&self) -> &str {
        self.english_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.iso_639_1)
    }
}

/// Full detail record for a single title.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    pub homepage: Option<String>,
}

impl DetailRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().or(self.name.as_deref()).unwrap_or("")
    }

    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .filter(|d| !d.is_empty())
    }

    /// Runtime in minutes: movies report a single value, TV a per-episode
    /// list from which the first entry is taken.
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime.or_else(|| self.episode_run_time.first().copied())
    }

    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
    }

    pub fn to_candidate(&self, media_type: MediaType) -> WishlistCandidate {
        WishlistCandidate {
            id: Some(CatalogId::Number(self.id)),
            media_type: Some(media_type),
            title: Some(self.display_title().to_string()),
            poster_path: self.poster_path.clone(),
            release_date: self.date().map(str::to_string),
            rating: Some(self.vote_average),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIE_LISTING: &str = r#"{
        "page": 1,
        "results": [
            {
                "id": 603,
                "title": "The Matrix",
                "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                "release_date": "1999-03-30",
                "vote_average": 8.2,
                "overview": "Set in the 22nd century..."
            }
        ],
        "total_pages": 3,
        "total_results": 55
    }"#;

    const TV_LISTING: &str = r#"{
        "page": 1,
        "results": [
            {
                "id": 1396,
                "name": "Breaking Bad",
                "poster_path": null,
                "first_air_date": "2008-01-20",
                "vote_average": 8.9
            }
        ],
        "total_pages": 1,
        "total_results": 1
    }"#;

    const TV_DETAIL: &str = r#"{
        "id": 1396,
        "name": "Breaking Bad",
        "first_air_date": "2008-01-20",
        "vote_average": 8.9,
        "overview": "A chemistry teacher...",
        "genres": [{"id": 18, "name": "Drama"}],
        "episode_run_time": [45, 47],
        "spoken_languages": [{"iso_639_1": "en", "english_name": "English", "name": "English"}],
        "homepage": ""
    }"#;

    #[test]
    fn test_decode_movie_listing_page() {
        let page: ListingPage = serde_json::from_str(MOVIE_LISTING).unwrap();
        assert_eq!(page.total_results, 55);
        let item = &page.results[0];
        assert_eq!(item.display_title(), "The Matrix");
        assert_eq!(item.date(), Some("1999-03-30"));
        assert_eq!(
            item.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg")
        );
    }

    #[test]
    fn test_decode_tv_listing_resolves_name_and_air_date() {
        let page: ListingPage = serde_json::from_str(TV_LISTING).unwrap();
        let item = &page.results[0];
        assert_eq!(item.display_title(), "Breaking Bad");
        assert_eq!(item.date(), Some("2008-01-20"));
        assert!(item.poster_url().is_none());
    }

    #[test]
    fn test_decode_tv_detail_record() {
        let detail: DetailRecord = serde_json::from_str(TV_DETAIL).unwrap();
        assert_eq!(detail.display_title(), "Breaking Bad");
        assert_eq!(detail.runtime_minutes(), Some(45));
        assert_eq!(detail.genres[0].name, "Drama");
        assert_eq!(detail.spoken_languages[0].display_name(), "English");
    }

    #[test]
    fn test_detail_record_maps_to_wishlist_candidate() {
        let detail: DetailRecord = serde_json::from_str(TV_DETAIL).unwrap();
        let item = detail.to_candidate(MediaType::Tv).into_item().unwrap();
        assert_eq!(item.id, "1396");
        assert_eq!(item.media_type, MediaType::Tv);
        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.release_date.as_deref(), Some("2008-01-20"));
        assert_eq!(item.rating, 8.9);
    }
}
