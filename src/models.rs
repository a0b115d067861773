use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed sentence shown when guidance generation failed.
pub const GUIDANCE_UNAVAILABLE: &str =
    "Could not generate guidance at this time. Please try again later.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The three size variants the platform returns for channels and videos.
/// Any of them may be missing on lightweight resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailSet {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: ThumbnailSet,
}

/// Aggregate counters, decimal-string encoded by the platform. Parse before
/// doing arithmetic or formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub view_count: String,
    pub subscriber_count: String,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
    pub video_count: String,
}

/// Immutable channel snapshot, fetched fresh per request. Statistics are
/// absent on hits coming from free-text search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelSummary {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub channel_title: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: ThumbnailSet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub favorite_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// Outcome of guidance generation. The two branches are kept explicit so
/// callers and tests can tell a model answer from the fallback without
/// matching on strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Guidance {
    Model { text: String },
    Fallback { reason: String },
}

impl Guidance {
    /// The display string: generated text, or the fixed unavailability
    /// sentence when generation failed.
    pub fn text(&self) -> &str {
        match self {
            Guidance::Model { text } => text,
            Guidance::Fallback { .. } => GUIDANCE_UNAVAILABLE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Guidance::Fallback { .. })
    }
}

/// One channel, its top videos (at most 5, ordering chosen by the caller)
/// and a guidance string. Built once per lookup, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedChannelView {
    pub channel: ChannelSummary,
    pub videos: Vec<VideoSummary>,
    pub guidance: Guidance,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchChannelsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelDataResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AggregatedChannelView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
