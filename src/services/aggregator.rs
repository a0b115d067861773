use crate::error::{Error, Result};
use crate::models::AggregatedChannelView;
use crate::services::guidance::{ChannelFacts, GuidanceGenerator};
use crate::services::youtube::{VideoOrder, YouTubeClient};
use log::{debug, info};

/// How many top videos an aggregated view carries at most.
pub const TOP_VIDEO_LIMIT: usize = 5;

/// Merges channel metadata, top videos and guidance into one view.
/// The lookups are intentionally sequential: each depends on the previous
/// result. Nothing is retried and nothing is cached.
#[derive(Clone)]
pub struct ChannelAggregator {
    youtube: YouTubeClient,
    guidance: GuidanceGenerator,
}

impl ChannelAggregator {
    pub fn new(youtube: YouTubeClient, guidance: GuidanceGenerator) -> Self {
        ChannelAggregator { youtube, guidance }
    }

    /// Builds the aggregated view for one channel. `order` is the explicit
    /// top-video ordering policy. Failures in the channel or video lookups
    /// abort the aggregation; guidance failure never does.
    pub async fn aggregate(
        &self,
        channel_id: &str,
        order: VideoOrder,
    ) -> Result<AggregatedChannelView> {
        let channel = self
            .youtube
            .fetch_channel(channel_id)
            .await?
            .ok_or_else(|| Error::NotFound("YouTube channel not found.".to_string()))?;

        let video_ids = self
            .youtube
            .search_channel_videos(channel_id, order, TOP_VIDEO_LIMIT)
            .await?;
        let mut videos = self.youtube.fetch_videos(&video_ids).await?;

        // Every video in the view must belong to the aggregated channel.
        videos.retain(|video| {
            let matches = video.snippet.channel_id == channel.id;
            if !matches {
                debug!(
                    "dropping video {} belonging to channel {}",
                    video.id, video.snippet.channel_id
                );
            }
            matches
        });

        let facts = ChannelFacts::from_channel(&channel);
        let guidance = self.guidance.generate(&facts).await;

        info!(
            "Aggregated channel {} with {} videos (guidance fallback: {})",
            channel.id,
            videos.len(),
            guidance.is_fallback()
        );

        Ok(AggregatedChannelView {
            channel,
            videos,
            guidance,
        })
    }
}
