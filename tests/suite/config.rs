//! Config file to running app: the endpoint and presentation options read from disk
//! drive the real client.

use std::fs;

use emotion_config::{ConfigError, EmotionConfig};
use emotion_engine::{App, EmotionResult, RequestState, ThemeMode};
use tempfile::tempdir;
use wiremock::MockServer;

use crate::common::{ANALYZE_PATH, mount_emotion};

fn env_overrides_present() -> bool {
    std::env::var_os(emotion_config::ENDPOINT_ENV).is_some()
        || std::env::var_os(emotion_config::THEME_ENV).is_some()
}

#[tokio::test]
async fn app_from_config_file_talks_to_configured_endpoint() {
    if env_overrides_present() {
        return;
    }

    let server = MockServer::start().await;
    mount_emotion(&server, "Joy", 0.87, "😊").await;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "[service]\nendpoint = \"{}{ANALYZE_PATH}\"\n\n[app]\ntheme = \"dark\"\nascii_only = true\n",
            server.uri()
        ),
    )
    .expect("write config");

    let config = EmotionConfig::load_from(&path)
        .expect("config loads")
        .expect("config present");
    let mut app = App::from_config(&config).expect("app builds");
    assert_eq!(app.ui_options().theme, ThemeMode::Dark);
    assert!(app.ui_options().ascii_only);

    app.update_input("I love this!");
    app.submit();
    app.settle_request().await;
    assert_eq!(
        app.request_state(),
        &RequestState::Succeeded(EmotionResult::new("Joy", 0.87, "😊"))
    );
}

#[test]
fn invalid_endpoint_in_file_is_reported() {
    if env_overrides_present() {
        return;
    }

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[service]\nendpoint = \"not a url\"\n").expect("write config");

    let config = EmotionConfig::load_from(&path)
        .expect("config loads")
        .expect("config present");
    let err = config.endpoint().expect_err("endpoint is invalid");
    assert!(matches!(err, ConfigError::InvalidEndpoint { .. }), "{err:?}");
    assert!(App::from_config(&config).is_err());
}

#[test]
fn malformed_file_is_a_parse_error_with_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[service\nendpoint = ").expect("write config");

    let err = EmotionConfig::load_from(&path).expect_err("parse fails");
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert_eq!(err.path(), Some(path.as_path()));
}
