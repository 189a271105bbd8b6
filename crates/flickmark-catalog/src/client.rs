use flickmark_models::MediaType;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CatalogError;
use crate::types::{DetailRecord, ListingPage};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Async TMDB v3 client covering the endpoints the application browses:
/// search, details, recommendations, now-playing movies, popular TV.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Catalog request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status, url });
        }
        Ok(response.json().await?)
    }

    /// Detail record for one title.
    pub async fn details(
        &self,
        media_type: MediaType,
        id: &str,
        language: &str,
    ) -> Result<DetailRecord, CatalogError> {
        let path = format!("/{}/{}", media_type, id);
        self.get_json(&path, &[("language", language)]).await
    }

    /// Titles recommended alongside one title.
    pub async fn recommendations(
        &self,
        media_type: MediaType,
        id: &str,
        language: &str,
    ) -> Result<ListingPage, CatalogError> {
        let path = format!("/{}/{}/recommendations", media_type, id);
        self.get_json(&path, &[("language", language)]).await
    }

    /// Free-text search within one catalog namespace.
    pub async fn search(
        &self,
        media_type: MediaType,
        query: &str,
        page: u32,
        language: &str,
    ) -> Result<ListingPage, CatalogError> {
        let path = format!("/search/{}", media_type);
        let page = page.to_string();
        self.get_json(
            &path,
            &[("query", query), ("page", page.as_str()), ("language", language)],
        )
        .await
    }

    /// Movies currently in theaters.
    pub async fn now_playing(&self, page: u32, language: &str) -> Result<ListingPage, CatalogError> {
        let page = page.to_string();
        self.get_json(
            "/movie/now_playing",
            &[("page", page.as_str()), ("language", language)],
        )
        .await
    }

    /// Popular TV shows.
    pub async fn popular_tv(&self, page: u32, language: &str) -> Result<ListingPage, CatalogError> {
        let page = page.to_string();
        self.get_json(
            "/tv/popular",
            &[("page", page.as_str()), ("language", language)],
        )
        .await
    }
}
