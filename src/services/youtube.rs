use crate::error::{Error, Result};
use crate::models::{ChannelSnippet, ChannelSummary, VideoSummary};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// Channel IDs have a fixed shape: "UC" prefix, 24 characters total.
const CHANNEL_ID_PREFIX: &str = "UC";
const CHANNEL_ID_LEN: usize = 24;

const SEARCH_MAX_RESULTS: usize = 10;

/// Ordering policy for a channel's top videos. Callers pick one explicitly;
/// there is no hidden default inside the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOrder {
    Date,
    ViewCount,
}

impl VideoOrder {
    fn as_param(self) -> &'static str {
        match self {
            VideoOrder::Date => "date",
            VideoOrder::ViewCount => "viewCount",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ChannelIdItem {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHitId {
    channel_id: Option<String>,
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelHit {
    id: SearchHitId,
    snippet: ChannelSnippet,
}

#[derive(Debug, Deserialize)]
struct VideoIdHit {
    id: SearchHitId,
}

/// Typed client for the video platform's REST API. The key is injected at
/// construction; a missing key fails each operation before any I/O.
#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        YouTubeClient {
            http: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn looks_like_channel_id(query: &str) -> bool {
        query.len() == CHANNEL_ID_LEN && query.starts_with(CHANNEL_ID_PREFIX)
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(Error::missing_api_key)?;
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Configuration(format!("Invalid API base URL: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(body) => body.error.message,
                Err(_) => "unknown upstream error".to_string(),
            };
            return Err(Error::Upstream {
                message: format!("{context}: {message}"),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Resolve an `@handle` to a channel ID. `Ok(None)` means the handle is
    /// unknown to the platform.
    pub async fn resolve_handle(&self, handle: &str) -> Result<Option<String>> {
        let name = handle.strip_prefix('@').unwrap_or(handle);
        let url = self.endpoint("channels", &[("part", "id"), ("forHandle", name)])?;
        let body: ListResponse<ChannelIdItem> = self
            .get_json(url, "Failed to resolve channel handle")
            .await?;
        let id = body.items.into_iter().next().map(|item| item.id);
        debug!("resolved handle @{name} -> {id:?}");
        Ok(id)
    }

    /// Fetch one channel's snippet and statistics by ID.
    pub async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelSummary>> {
        let url = self.endpoint(
            "channels",
            &[("part", "snippet,statistics"), ("id", channel_id)],
        )?;
        let body: ListResponse<ChannelSummary> =
            self.get_json(url, "Failed to fetch channel data").await?;
        Ok(body.items.into_iter().next())
    }

    /// Free-text channel search, capped at 10 hits. Hits carry id + snippet
    /// only; statistics are not fetched at this stage.
    pub async fn search_channels(&self, query: &str) -> Result<Vec<ChannelSummary>> {
        let max = SEARCH_MAX_RESULTS.to_string();
        let url = self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "channel"),
                ("maxResults", &max),
            ],
        )?;
        let body: ListResponse<ChannelHit> = self
            .get_json(url, "Failed to search for channels")
            .await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(|hit| {
                Some(ChannelSummary {
                    id: hit.id.channel_id?,
                    snippet: hit.snippet,
                    statistics: None,
                })
            })
            .collect())
    }

    /// IDs of a channel's top videos in the requested order.
    pub async fn search_channel_videos(
        &self,
        channel_id: &str,
        order: VideoOrder,
        max_results: usize,
    ) -> Result<Vec<String>> {
        let max = max_results.to_string();
        let url = self.endpoint(
            "search",
            &[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("order", order.as_param()),
                ("type", "video"),
                ("maxResults", &max),
            ],
        )?;
        let body: ListResponse<VideoIdHit> =
            self.get_json(url, "Failed to fetch videos").await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(|hit| hit.id.video_id)
            .collect())
    }

    /// Batch-fetch snippet + statistics for a list of videos in one call.
    pub async fn fetch_videos(&self, video_ids: &[String]) -> Result<Vec<VideoSummary>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = video_ids.join(",");
        let url = self.endpoint("videos", &[("part", "snippet,statistics"), ("id", &joined)])?;
        let body: ListResponse<VideoSummary> = self
            .get_json(url, "Failed to fetch video statistics")
            .await?;
        Ok(body.items)
    }
}
