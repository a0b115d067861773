mod common;

use common::*;
use serde_json::json;
use tubetrack::error::Error;
use tubetrack::services::search::ChannelSearch;
use tubetrack::services::youtube::YouTubeClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_against(server: &MockServer) -> ChannelSearch {
    ChannelSearch::new(YouTubeClient::new(
        Some("test-key".to_string()),
        server.uri(),
    ))
}

#[tokio::test]
async fn handle_query_resolves_the_handle_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "id"))
        .and(query_param("forHandle", "mkbhd"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "items": [ { "id": MKBHD_ID } ] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "snippet,statistics"))
        .and(query_param("id", MKBHD_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "items": [ channel_item(MKBHD_ID) ] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let channels = search_against(&server).search("@mkbhd").await.unwrap();

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].id, MKBHD_ID);
    assert!(channels[0].statistics.is_some());
}

#[tokio::test]
async fn channel_id_query_fetches_directly_without_searching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("id", MKBHD_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "items": [ channel_item(MKBHD_ID) ] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let channels = search_against(&server).search(MKBHD_ID).await.unwrap();
    assert_eq!(channels.len(), 1);
}

#[tokio::test]
async fn unknown_channel_id_falls_back_to_text_search() {
    let server = MockServer::start().await;
    let unknown_id = "UCzzzzzzzzzzzzzzzzzzzzzz";

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "channel"))
        .and(query_param("maxResults", "10"))
        .and(query_param("q", unknown_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "items": [ channel_search_hit("UCaaaaaaaaaaaaaaaaaaaaaa", "Some Channel") ] }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let channels = search_against(&server).search(unknown_id).await.unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].id, "UCaaaaaaaaaaaaaaaaaaaaaa");
}

#[tokio::test]
async fn unresolved_handle_falls_back_to_text_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forHandle", "nosuchhandle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "@nosuchhandle"))
        .and(query_param("type", "channel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let channels = search_against(&server)
        .search("@nosuchhandle")
        .await
        .unwrap();
    assert!(channels.is_empty());
}

#[tokio::test]
async fn free_text_search_returns_hits_without_statistics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "tech reviews"))
        .and(query_param("type", "channel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                channel_search_hit("UCaaaaaaaaaaaaaaaaaaaaaa", "Channel A"),
                channel_search_hit("UCbbbbbbbbbbbbbbbbbbbbbb", "Channel B")
            ]
        })))
        .mount(&server)
        .await;

    let channels = search_against(&server).search("tech reviews").await.unwrap();

    assert_eq!(channels.len(), 2);
    assert!(channels.iter().all(|c| c.statistics.is_none()));
    assert_eq!(channels[0].snippet.title, "Channel A");
}

#[tokio::test]
async fn missing_api_key_issues_zero_network_calls() {
    let server = MockServer::start().await;
    let search = ChannelSearch::new(YouTubeClient::new(None, server.uri()));

    let err = search.search("@mkbhd").await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_carries_the_platform_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(upstream_error("quota exceeded")),
        )
        .mount(&server)
        .await;

    let err = search_against(&server).search("tech").await.unwrap_err();
    match err {
        Error::Upstream { message } => assert!(message.contains("quota exceeded")),
        other => panic!("expected upstream error, got {other:?}"),
    }
}
