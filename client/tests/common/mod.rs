//! Common test utilities for integration tests
//!
//! Every remote API is pointed at a single wiremock server.

#![allow(dead_code)]

use fitfuel_client::config::AppConfig;
use fitfuel_client::state::AppState;
use secrecy::SecretString;
use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "test-api-key";

/// Config with every base URL pointing at the mock server
pub fn test_config(server_uri: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.http.timeout_secs = 5;
    config.exercise_db.base_url = server_uri.to_string();
    config.exercise_db.api_key = SecretString::new(TEST_API_KEY.to_string());
    config.spoonacular.base_url = server_uri.to_string();
    config.spoonacular.api_key = SecretString::new(TEST_API_KEY.to_string());
    config.youtube.base_url = server_uri.to_string();
    config.youtube.api_key = SecretString::new(TEST_API_KEY.to_string());
    config
}

pub fn test_state(server_uri: &str) -> AppState {
    AppState::new(test_config(server_uri)).expect("Failed to build test state")
}

pub fn exercise_json(id: &str, name: &str, body_part: &str, target: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "bodyPart": body_part,
        "target": target,
        "equipment": "barbell",
        "gifUrl": format!("https://v2.exercisedb.io/image/{}", id)
    })
}

pub fn video_item_json(video_id: &str, title: &str) -> Value {
    json!({
        "id": {"kind": "youtube#video", "videoId": video_id},
        "snippet": {
            "title": title,
            "channelTitle": "Fitness Channel",
            "thumbnails": {
                "default": {"url": format!("https://i.ytimg.com/vi/{}/default.jpg", video_id)},
                "medium": {"url": format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", video_id)}
            }
        }
    })
}
