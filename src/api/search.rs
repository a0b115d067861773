use crate::models::SearchChannelsResponse;
use crate::AppState;
use log::error;
use rocket::serde::json::Json;
use rocket::{get, State};

const SEARCH_UNEXPECTED: &str = "An unexpected error occurred while searching for channels.";

#[get("/?<query>")]
pub async fn search_channels(
    query: String,
    state: &State<AppState>,
) -> Json<SearchChannelsResponse> {
    match state.search.search(&query).await {
        Ok(channels) => Json(SearchChannelsResponse {
            channels: Some(channels),
            error: None,
        }),
        Err(e) => {
            error!("Channel search for {query:?} failed: {e}");
            Json(SearchChannelsResponse {
                channels: None,
                error: Some(e.user_message(SEARCH_UNEXPECTED)),
            })
        }
    }
}
