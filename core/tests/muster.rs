// SPDX-License-Identifier: Apache-2.0

//! Container integration tests with wiremock: each user action issues one
//! request and the local list stays consistent with the server's answers.

use chrono::NaiveDate;
use muster_core::{ApiConfig, AttendeeDraft, Config, EventDraft, EventId, Muster};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> Config {
    Config {
        api: ApiConfig {
            base_url: server.uri(),
            ..Default::default()
        },
    }
}

fn draft(name: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        description: "d".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        location: "HQ".to_string(),
    }
}

fn server_event(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "d",
        "date": "2024-01-01",
        "location": "HQ",
        "attendees": [],
    })
}

async fn mount_collection(server: &MockServer, events: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events))
        .mount(server)
        .await;
}

#[tokio::test]
#[ignore = "require network"]
async fn load_mirrors_the_server_collection() {
    let mock_server = MockServer::start().await;
    mount_collection(
        &mock_server,
        json!([server_event(2, "Second"), server_event(1, "First")]),
    )
    .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");

    assert!(!muster.is_loading());
    assert_eq!(muster.events().len(), 2);
    assert_eq!(muster.events()[0].id, EventId::new(2));
    assert_eq!(muster.events()[1].id, EventId::new(1));
}

#[tokio::test]
#[ignore = "require network"]
async fn failed_load_clears_loading_and_keeps_list_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    let result = muster.load().await;

    assert!(result.is_err());
    assert!(!muster.is_loading());
    assert!(muster.events().is_empty());
}

#[tokio::test]
#[ignore = "require network"]
async fn create_shows_the_server_confirmed_event_first() {
    let mock_server = MockServer::start().await;
    mount_collection(&mock_server, json!([server_event(1, "First")])).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_event(2, "Meetup")))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");

    let created = muster
        .create_event(draft("Meetup"))
        .await
        .expect("Failed to create event");
    assert_eq!(created.id, EventId::new(2));

    assert_eq!(muster.events().len(), 2);
    assert_eq!(muster.events()[0].name, "Meetup");
    assert_eq!(muster.events()[1].name, "First");
}

#[tokio::test]
#[ignore = "require network"]
async fn update_replaces_only_the_matching_entry() {
    let mock_server = MockServer::start().await;
    mount_collection(
        &mock_server,
        json!([server_event(1, "First"), server_event(2, "Second")]),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/events/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_event(2, "Renamed")))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");
    let first_before = muster.events()[0].clone();

    muster
        .update_event(EventId::new(2), draft("Renamed"))
        .await
        .expect("Failed to update event");

    assert_eq!(muster.events().len(), 2);
    assert_eq!(muster.events()[0], first_before);
    assert_eq!(muster.events()[1].name, "Renamed");
}

#[tokio::test]
#[ignore = "require network"]
async fn delete_removes_exactly_one_entry() {
    let mock_server = MockServer::start().await;
    mount_collection(
        &mock_server,
        json!([server_event(1, "First"), server_event(2, "Second")]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");

    muster
        .delete_event(EventId::new(1))
        .await
        .expect("Failed to delete event");

    assert_eq!(muster.events().len(), 1);
    assert_eq!(muster.events()[0].id, EventId::new(2));
}

#[tokio::test]
#[ignore = "require network"]
async fn add_attendee_updates_only_the_target_event() {
    let mock_server = MockServer::start().await;
    mount_collection(
        &mock_server,
        json!([server_event(1, "First"), server_event(3, "Third")]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/events/3/attendees"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "name": "Third",
            "description": "d",
            "date": "2024-01-01",
            "location": "HQ",
            "attendees": [{"id": 11, "name": "Jane Doe", "eventId": 3}],
        })))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");
    let other_before = muster.events()[0].clone();

    muster
        .add_attendee(
            EventId::new(3),
            AttendeeDraft {
                name: "Jane Doe".to_string(),
            },
        )
        .await
        .expect("Failed to add attendee");

    let target = muster.event(EventId::new(3)).unwrap();
    assert_eq!(target.attendees.len(), 1);
    assert_eq!(target.attendees[0].name, "Jane Doe");
    assert_eq!(muster.events()[0], other_before);
}

#[tokio::test]
#[ignore = "require network"]
async fn failed_mutation_leaves_the_list_untouched() {
    let mock_server = MockServer::start().await;
    mount_collection(
        &mock_server,
        json!([server_event(1, "First"), server_event(2, "Second")]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/events/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");
    let before: Vec<_> = muster.events().to_vec();

    assert!(muster.delete_event(EventId::new(2)).await.is_err());
    assert!(
        muster
            .update_event(EventId::new(2), draft("Renamed"))
            .await
            .is_err()
    );

    assert_eq!(muster.events(), before.as_slice());
    assert!(!muster.is_loading());
}

#[tokio::test]
#[ignore = "require network"]
async fn invalid_draft_is_rejected_before_any_request() {
    let mock_server = MockServer::start().await;
    mount_collection(&mock_server, json!([])).await;
    // No POST mock mounted: a request would fail loudly with a 404 from
    // wiremock rather than the validation message asserted below.

    let mut muster = Muster::new(config(&mock_server)).expect("Failed to create muster");
    muster.load().await.expect("Failed to load");

    let mut empty = draft("");
    empty.name = String::new();
    let err = muster.create_event(empty).await.unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
    assert!(muster.events().is_empty());
}
