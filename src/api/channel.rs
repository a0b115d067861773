use crate::models::ChannelDataResponse;
use crate::services::youtube::VideoOrder;
use crate::AppState;
use log::error;
use rocket::serde::json::Json;
use rocket::{get, State};

const FETCH_UNEXPECTED: &str =
    "An unexpected error occurred while fetching data from YouTube.";

#[get("/<id>?<order>")]
pub async fn get_channel_data(
    id: &str,
    order: Option<String>,
    state: &State<AppState>,
) -> Json<ChannelDataResponse> {
    // The dashboard shows most-viewed videos unless the caller asks for
    // most-recent explicitly.
    let order = match order.as_deref() {
        Some("date") => VideoOrder::Date,
        _ => VideoOrder::ViewCount,
    };

    match state.aggregator.aggregate(id, order).await {
        Ok(data) => Json(ChannelDataResponse {
            data: Some(data),
            error: None,
        }),
        Err(e) => {
            error!("Aggregation for channel {id} failed: {e}");
            Json(ChannelDataResponse {
                data: None,
                error: Some(e.user_message(FETCH_UNEXPECTED)),
            })
        }
    }
}
