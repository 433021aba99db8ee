//! Integration tests for the ExerciseDB and YouTube clients

mod common;

use anyhow::Result;
use common::{exercise_json, test_config, test_state, video_item_json, TEST_API_KEY};
use fitfuel_client::config::AppConfig;
use fitfuel_client::error::{ClientError, Service};
use fitfuel_client::repositories::{ExerciseCatalog, ExerciseDbRepository, VideoSource};
use fitfuel_client::services::ExerciseService;
use fitfuel_client::state::AppState;
use fitfuel_shared::{Exercise, ExerciseFilters, Pagination};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_exercisedb_sends_rapidapi_headers() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exercises/bodyPartList"))
        .and(header("X-RapidAPI-Key", TEST_API_KEY))
        .and(header("X-RapidAPI-Host", "exercisedb.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["back", "cardio", "chest"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let body_parts = assert_ok!(state.exercises.list_body_parts().await);

    assert_eq!(body_parts, vec!["back", "cardio", "chest"]);
    Ok(())
}

#[tokio::test]
async fn test_list_exercises_decodes_catalog() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/exercises",
        json!([
            exercise_json("0025", "barbell bench press", "chest", "pectorals"),
            exercise_json("0043", "barbell full squat", "upper legs", "glutes"),
        ]),
    )
    .await;

    let state = test_state(&mock_server.uri());
    let exercises = assert_ok!(state.exercises.list_exercises().await);

    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].id, "0025");
    assert_eq!(exercises[1].body_part, "upper legs");
    assert_eq!(exercises[0].gif_url, "https://v2.exercisedb.io/image/0025");
    Ok(())
}

#[tokio::test]
async fn test_exercises_by_target_encodes_spaces() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/exercises/target/upper%20back",
        json!([exercise_json("0027", "barbell bent over row", "back", "upper back")]),
    )
    .await;

    let state = test_state(&mock_server.uri());
    let exercises = assert_ok!(state.exercises.exercises_by_target("upper back").await);

    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].target, "upper back");
    Ok(())
}

#[tokio::test]
async fn test_server_error_surfaces_status() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exercises/targetList"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let err = assert_err!(state.exercises.list_target_muscles().await);

    match err {
        ClientError::Status { service, status, body } => {
            assert_eq!(service, Service::ExerciseDb);
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/exercises/equipmentList", json!({"message": "quota exceeded"})).await;

    let state = test_state(&mock_server.uri());
    let err = assert_err!(state.exercises.list_equipment().await);

    assert!(matches!(err, ClientError::Decode { service: Service::ExerciseDb, .. }));
    assert!(err.is_remote());
    Ok(())
}

#[tokio::test]
async fn test_missing_key_makes_no_request() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = AppConfig::default();
    config.exercise_db.base_url = mock_server.uri();
    let state = AppState::new(config)?;

    let err = assert_err!(state.exercises.list_exercises().await);
    assert!(matches!(err, ClientError::MissingApiKey(Service::ExerciseDb)));
    Ok(())
}

#[tokio::test]
async fn test_load_catalog_tolerates_partial_failure() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/exercises",
        json!([
            exercise_json("0001", "3/4 sit-up", "waist", "abs"),
            exercise_json("0025", "barbell bench press", "chest", "pectorals"),
        ]),
    )
    .await;
    mount_json(&mock_server, "/exercises/equipmentList", json!(["barbell", "body weight"])).await;
    mount_json(&mock_server, "/exercises/targetList", json!(["abs", "pectorals"])).await;
    Mock::given(method("GET"))
        .and(path("/exercises/bodyPartList"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let repository = ExerciseDbRepository::new(
        reqwest::Client::new(),
        test_config(&mock_server.uri()).exercise_db,
    );
    let catalog = ExerciseService::load_catalog(&repository).await;

    assert_eq!(catalog.exercises.len(), 2);
    assert!(catalog.body_parts.is_empty());
    assert_eq!(catalog.equipment, vec!["barbell", "body weight"]);
    assert_eq!(catalog.target_muscles.len(), 2);

    let filters = ExerciseFilters {
        search: "BENCH".to_string(),
        ..Default::default()
    };
    let page = catalog.browse(&filters, Pagination::default());
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "0025");
    Ok(())
}

#[tokio::test]
async fn test_load_catalog_all_failing_is_empty() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let catalog = ExerciseService::load_catalog(&state.exercises).await;

    assert!(catalog.exercises.is_empty());
    assert!(catalog.body_parts.is_empty());
    assert!(catalog.browse(&ExerciseFilters::default(), Pagination::default()).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_youtube_search_query() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("q", "barbell bench press exercise"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "3"))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "items": [
                video_item_json("rT7DgCr-3pg", "How To: Barbell Bench Press"),
                video_item_json("vcBig73ojpE", "Bench Press Form Tips"),
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let videos = assert_ok!(state.videos.search_videos("barbell bench press").await);

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "rT7DgCr-3pg");
    assert_eq!(videos[0].channel_name, "Fitness Channel");
    assert_eq!(videos[1].thumbnail_url, "https://i.ytimg.com/vi/vcBig73ojpE/mqdefault.jpg");
    Ok(())
}

#[tokio::test]
async fn test_exercise_detail_end_to_end() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/exercises/target/pectorals",
        json!([
            exercise_json("0025", "barbell bench press", "chest", "pectorals"),
            exercise_json("0047", "barbell incline bench press", "chest", "pectorals"),
            exercise_json("0251", "dumbbell fly", "chest", "pectorals"),
            exercise_json("0289", "dumbbell bench press", "chest", "pectorals"),
            exercise_json("0662", "push-up", "chest", "pectorals"),
        ]),
    )
    .await;
    mount_json(
        &mock_server,
        "/youtube/v3/search",
        json!({
            "items": [
                video_item_json("a", "One"),
                video_item_json("b", "Two"),
                video_item_json("c", "Three"),
                video_item_json("d", "Four"),
            ]
        }),
    )
    .await;

    let state = test_state(&mock_server.uri());
    let exercise: Exercise = serde_json::from_value(exercise_json(
        "0025",
        "barbell bench press",
        "chest",
        "pectorals",
    ))?;
    let detail = ExerciseService::exercise_detail(&state.exercises, &state.videos, &exercise).await;

    assert_eq!(detail.exercise.id, "0025");
    assert_eq!(detail.similar.len(), 3);
    assert!(detail.similar.iter().all(|e| e.id != "0025"));
    assert_eq!(detail.videos.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_exercise_detail_survives_video_failure() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/exercises/target/abs",
        json!([
            exercise_json("0001", "3/4 sit-up", "waist", "abs"),
            exercise_json("0002", "45° side bend", "waist", "abs"),
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let exercise: Exercise = serde_json::from_value(exercise_json("0001", "3/4 sit-up", "waist", "abs"))?;
    let detail = ExerciseService::exercise_detail(&state.exercises, &state.videos, &exercise).await;

    assert_eq!(detail.similar.len(), 1);
    assert_eq!(detail.similar[0].id, "0002");
    assert!(detail.videos.is_empty());
    Ok(())
}
