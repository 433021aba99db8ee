//! YouTube Data API repository

use super::{fetch_json, join_url, VideoSource};
use crate::config::{has_key, YouTubeConfig};
use crate::error::{ClientError, ClientResult, Service};
use async_trait::async_trait;
use fitfuel_shared::{Video, DETAIL_RELATED_LIMIT};
use secrecy::ExposeSecret;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    medium: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl From<SearchItem> for Video {
    fn from(item: SearchItem) -> Self {
        Video {
            id: item.id.video_id,
            title: item.snippet.title,
            channel_name: item.snippet.channel_title,
            thumbnail_url: item.snippet.thumbnails.medium.url,
        }
    }
}

/// Exercise demonstration videos from YouTube search
#[derive(Clone)]
pub struct YouTubeRepository {
    http: reqwest::Client,
    config: YouTubeConfig,
}

impl YouTubeRepository {
    pub fn new(http: reqwest::Client, config: YouTubeConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl VideoSource for YouTubeRepository {
    async fn search_videos(&self, exercise_name: &str) -> ClientResult<Vec<Video>> {
        if !has_key(&self.config.api_key) {
            return Err(ClientError::MissingApiKey(Service::YouTube));
        }

        let q = format!("{} exercise", exercise_name);
        let max_results = DETAIL_RELATED_LIMIT.to_string();
        let request = self
            .http
            .get(join_url(&self.config.base_url, "/youtube/v3/search"))
            .query(&[
                ("part", "snippet"),
                ("q", q.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", self.config.api_key.expose_secret().as_str()),
            ]);

        let response: SearchResponse = fetch_json(Service::YouTube, request).await?;
        Ok(response.items.into_iter().map(Video::from).collect())
    }
}
