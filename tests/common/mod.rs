#![allow(dead_code)]

use serde_json::{json, Value};

pub const MKBHD_ID: &str = "UCBJycsmduvYEL83R_U4JriQ";

pub fn channel_item(id: &str) -> Value {
    json!({
        "id": id,
        "snippet": {
            "title": "Marques Brownlee",
            "description": "Quality tech videos.",
            "customUrl": "@mkbhd",
            "publishedAt": "2008-03-21T15:25:54Z",
            "thumbnails": {
                "default": { "url": "https://i.ytimg.com/d.jpg", "width": 88, "height": 88 },
                "medium": { "url": "https://i.ytimg.com/m.jpg", "width": 240, "height": 240 },
                "high": { "url": "https://i.ytimg.com/h.jpg", "width": 800, "height": 800 }
            }
        },
        "statistics": {
            "viewCount": "4100000000",
            "subscriberCount": "18200000",
            "hiddenSubscriberCount": false,
            "videoCount": "1600"
        }
    })
}

pub fn video_search_hit(video_id: &str) -> Value {
    json!({
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "publishedAt": "2024-05-01T12:00:00Z",
            "channelId": MKBHD_ID,
            "channelTitle": "Marques Brownlee",
            "title": format!("Video {video_id}"),
            "description": "",
            "thumbnails": {}
        }
    })
}

pub fn video_item(video_id: &str, channel_id: &str, views: u64) -> Value {
    json!({
        "id": video_id,
        "snippet": {
            "publishedAt": "2024-05-01T12:00:00Z",
            "channelId": channel_id,
            "channelTitle": "Marques Brownlee",
            "title": format!("Video {video_id}"),
            "description": "A video.",
            "thumbnails": {
                "medium": { "url": "https://i.ytimg.com/v.jpg", "width": 320, "height": 180 }
            }
        },
        "statistics": {
            "viewCount": views.to_string(),
            "likeCount": "1000",
            "favoriteCount": "0",
            "commentCount": "50"
        }
    })
}

pub fn channel_search_hit(channel_id: &str, title: &str) -> Value {
    json!({
        "id": { "kind": "youtube#channel", "channelId": channel_id },
        "snippet": {
            "title": title,
            "description": "A channel.",
            "publishedAt": "2015-01-01T00:00:00Z",
            "thumbnails": {
                "default": { "url": "https://i.ytimg.com/c.jpg", "width": 88, "height": 88 }
            }
        }
    })
}

pub fn completion_body(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

pub fn upstream_error(message: &str) -> Value {
    json!({ "error": { "code": 403, "message": message } })
}
