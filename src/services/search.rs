use crate::error::Result;
use crate::models::ChannelSummary;
use crate::services::youtube::YouTubeClient;
use log::debug;

/// Resolves a free-text query, an `@handle` or a literal channel ID into
/// zero, one or many channel summaries.
#[derive(Clone)]
pub struct ChannelSearch {
    youtube: YouTubeClient,
}

impl ChannelSearch {
    pub fn new(youtube: YouTubeClient) -> Self {
        ChannelSearch { youtube }
    }

    /// Three alternate strategies, tried in order:
    /// 1. `@handle` — resolve the handle once, then fetch that one channel
    ///    with full statistics.
    /// 2. Channel-ID shape — direct fetch; an empty result falls through.
    /// 3. Free-text search constrained to channels, capped at 10 hits.
    pub async fn search(&self, query: &str) -> Result<Vec<ChannelSummary>> {
        let query = query.trim();

        if query.starts_with('@') {
            if let Some(channel_id) = self.youtube.resolve_handle(query).await? {
                if let Some(channel) = self.youtube.fetch_channel(&channel_id).await? {
                    return Ok(vec![channel]);
                }
            }
            debug!("handle {query} did not resolve, falling back to text search");
        } else if YouTubeClient::looks_like_channel_id(query) {
            if let Some(channel) = self.youtube.fetch_channel(query).await? {
                return Ok(vec![channel]);
            }
            debug!("no channel with id {query}, falling back to text search");
        }

        self.youtube.search_channels(query).await
    }
}
