use anyhow::Result;
use env_logger::Builder;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_GUIDANCE_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GUIDANCE_MODEL: &str = "gemini-1.5-flash";

/// Process configuration, read once at startup and injected into the
/// clients at construction. No call site reads the environment ad hoc.
/// Missing keys are carried as `None` and surface as configuration errors
/// from the operations that need them, never as a panic.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: Option<String>,
    pub guidance_api_key: Option<String>,
    pub youtube_api_base: String,
    pub guidance_api_base: String,
    pub guidance_model: String,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
            guidance_api_key: env::var("GEMINI_API_KEY").ok(),
            youtube_api_base: env::var("YOUTUBE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE.to_string()),
            guidance_api_base: env::var("GUIDANCE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GUIDANCE_API_BASE.to_string()),
            guidance_model: env::var("GUIDANCE_MODEL")
                .unwrap_or_else(|_| DEFAULT_GUIDANCE_MODEL.to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting TubeTrack backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_cors(config: &AppConfig) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[config.allowed_origin.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
