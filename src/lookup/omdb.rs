//! OMDb-backed movie lookup.
//!
//! Queries `GET {base_url}/?t={title}&apikey={key}` and maps the response
//! into a [`MovieSearchResult`]. OMDb reports "not found" with HTTP 200 and
//! `"Response": "False"`, which becomes a domain failure rather than an
//! error.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::OmdbConfig;
use crate::movie::MovieSearchResult;

use super::{LookupError, MovieLookup};

/// Message used when OMDb rejects a title without saying why.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found!";

/// Client for the OMDb title endpoint.
pub struct OmdbLookup {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbLookup {
    /// Create a lookup from config.
    ///
    /// Fails if no API key is configured or the base URL does not parse.
    pub fn new(config: &OmdbConfig) -> Result<Self, LookupError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LookupError::NotConfigured("missing OMDb API key".to_string()))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            LookupError::NotConfigured(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn title_url(&self, title: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("t", title)
            .append_pair("apikey", &self.api_key);
        url
    }
}

#[async_trait]
impl MovieLookup for OmdbLookup {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn lookup(&self, title: &str) -> Result<MovieSearchResult, LookupError> {
        tracing::debug!(title = %title, base_url = %self.base_url, "Sending OMDb lookup");

        let start = Instant::now();
        let response = self.client.get(self.title_url(title)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(status = %status, error = %message, "OMDb lookup error");

            return Err(LookupError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: OmdbResponse = response.json().await?;

        tracing::debug!(
            title = %title,
            latency_ms = start.elapsed().as_millis() as u64,
            found = body.is_found(),
            "OMDb lookup complete"
        );

        Ok(body.into_movie())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    plot: String,
    #[serde(default)]
    ratings: Vec<OmdbRating>,
    #[serde(default)]
    response: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbRating {
    source: String,
    value: String,
}

impl OmdbResponse {
    fn is_found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    fn into_movie(self) -> MovieSearchResult {
        let found = self.is_found();
        let error_message = if found {
            self.error
        } else {
            Some(
                self.error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
            )
        };

        MovieSearchResult {
            title: self.title,
            poster_url: self.poster,
            genres: self.genre,
            plot: self.plot,
            rating_summary: rating_summary(&self.ratings),
            result: found,
            error_message,
        }
    }
}

/// One `"{source}: {value}"` line per rating.
fn rating_summary(ratings: &[OmdbRating]) -> String {
    ratings
        .iter()
        .map(|r| format!("{}: {}", r.source, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}
