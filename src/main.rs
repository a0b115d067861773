use anyhow::Result;
use log::warn;
use tubetrack::config::{self, AppConfig};

#[rocket::main]
async fn main() -> Result<()> {
    config::load_environment();
    config::init_logger();

    let app_config = AppConfig::from_env();
    if app_config.youtube_api_key.is_none() {
        warn!("YOUTUBE_API_KEY is not set; lookups will answer with a configuration error");
    }
    if app_config.guidance_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; guidance will fall back to the fixed sentence");
    }

    tubetrack::build_rocket(&app_config)?.launch().await?;
    Ok(())
}
