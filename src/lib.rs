pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

use crate::config::AppConfig;
use crate::services::aggregator::ChannelAggregator;
use crate::services::guidance::GuidanceGenerator;
use crate::services::search::ChannelSearch;
use crate::services::youtube::YouTubeClient;
use anyhow::Result;
use rocket::{Build, Rocket};

pub struct AppState {
    pub search: ChannelSearch,
    pub aggregator: ChannelAggregator,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let youtube = YouTubeClient::new(
            config.youtube_api_key.clone(),
            config.youtube_api_base.clone(),
        );
        let guidance = GuidanceGenerator::new(
            config.guidance_api_key.clone(),
            config.guidance_api_base.clone(),
            config.guidance_model.clone(),
        );
        AppState {
            search: ChannelSearch::new(youtube.clone()),
            aggregator: ChannelAggregator::new(youtube, guidance),
        }
    }
}

pub fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let cors = config::create_cors(config)?;
    Ok(rocket::build()
        .manage(AppState::new(config))
        .attach(cors)
        .mount("/api/search", rocket::routes![api::search_channels])
        .mount("/api/channel", rocket::routes![api::get_channel_data]))
}
