// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use muster_api::{ApiConfig, ApiError, AttendeeDraft, EventDraft, EventId, EventsClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    }
}

fn draft() -> EventDraft {
    EventDraft {
        name: "Meetup".to_string(),
        description: "d".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        location: "HQ".to_string(),
    }
}

#[tokio::test]
#[ignore = "require network"]
async fn client_list_events_preserves_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Second", "description": "", "date": "2026-02-01", "location": "B", "attendees": []},
            {"id": 1, "name": "First", "description": "", "date": "2026-01-01", "location": "A", "attendees": []},
        ])))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let events = client.list_events().await.expect("Failed to list events");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, EventId::new(2));
    assert_eq!(events[1].id, EventId::new(1));
}

#[tokio::test]
#[ignore = "require network"]
async fn client_create_event_posts_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_json(json!({
            "name": "Meetup",
            "description": "d",
            "date": "2024-01-01",
            "location": "HQ",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "Meetup",
            "description": "d",
            "date": "2024-01-01",
            "location": "HQ",
            "attendees": [],
        })))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let event = client
        .create_event(&draft())
        .await
        .expect("Failed to create event");

    assert_eq!(event.id, EventId::new(42));
    assert_eq!(event.name, "Meetup");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_update_event_puts_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/events/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Meetup",
            "description": "d",
            "date": "2024-01-01",
            "location": "HQ",
            "attendees": [],
        })))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let event = client
        .update_event(EventId::new(7), &draft())
        .await
        .expect("Failed to update event");

    assert_eq!(event.id, EventId::new(7));
}

#[tokio::test]
#[ignore = "require network"]
async fn client_delete_event_accepts_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/events/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    client
        .delete_event(EventId::new(7))
        .await
        .expect("Failed to delete event");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_add_attendee_returns_updated_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/events/3/attendees"))
        .and(body_json(json!({"name": "Jane Doe"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "name": "Meetup",
            "description": "d",
            "date": "2024-01-01",
            "location": "HQ",
            "attendees": [{"id": 11, "name": "Jane Doe", "eventId": 3}],
        })))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let event = client
        .add_attendee(
            EventId::new(3),
            &AttendeeDraft {
                name: "Jane Doe".to_string(),
            },
        )
        .await
        .expect("Failed to add attendee");

    assert_eq!(event.attendees.len(), 1);
    assert_eq!(event.attendees[0].name, "Jane Doe");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_maps_404_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/events/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let err = client
        .update_event(EventId::new(99), &draft())
        .await
        .expect_err("expected a not-found error");

    assert!(matches!(err, ApiError::NotFound(_)), "got: {err}");
}

#[tokio::test]
#[ignore = "require network"]
async fn client_surfaces_server_errors_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = EventsClient::new(config(&mock_server)).expect("Failed to create client");
    let err = client.list_events().await.expect_err("expected an error");

    match err {
        ApiError::Http(msg) => assert!(msg.contains("boom"), "got: {msg}"),
        other => panic!("unexpected error: {other}"),
    }
}
