//! End-to-end request lifecycle: controller and app driving the real HTTP client
//! against a mock analysis service.

use std::time::Duration;

use emotion_engine::{
    EmotionResult, ErrorMessage, RequestState, RequestTag, SubmitOutcome, SubmitRejection,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    ANALYZE_PATH, app_for, controller_for, emotion_body, mount_emotion, mount_raw_body,
    mount_slow_emotion_once, mount_status,
};

fn failed_generic() -> RequestState {
    RequestState::Failed(ErrorMessage::generic())
}

#[tokio::test]
async fn blank_input_never_reaches_the_service() {
    let server = MockServer::start().await;
    mount_emotion(&server, "Joy", 0.87, "😊").await;
    let mut controller = controller_for(&server);

    for blank in ["", " ", "\n\t  "] {
        controller.update_input(blank);
        assert_eq!(
            controller.submit(),
            SubmitOutcome::Ignored(SubmitRejection::EmptyInput)
        );
        assert_eq!(controller.state(), &RequestState::Idle);
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "unexpected calls: {}", received.len());
}

#[tokio::test]
async fn joyful_text_succeeds_with_service_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "text": "I love this!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(emotion_body("Joy", 0.87, "😊")))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.update_input("I love this!");
    assert_eq!(controller.submit(), SubmitOutcome::Accepted);
    assert_eq!(controller.state().tag(), RequestTag::Submitting);

    controller.settle().await;
    assert_eq!(
        controller.state(),
        &RequestState::Succeeded(EmotionResult::new("Joy", 0.87, "😊"))
    );
}

#[tokio::test]
async fn second_submit_while_in_flight_issues_no_call() {
    let server = MockServer::start().await;
    mount_slow_emotion_once(&server, Duration::from_millis(200)).await;

    let mut controller = controller_for(&server);
    controller.update_input("I love this!");
    assert_eq!(controller.submit(), SubmitOutcome::Accepted);
    for _ in 0..3 {
        assert_eq!(
            controller.submit(),
            SubmitOutcome::Ignored(SubmitRejection::AlreadySubmitting)
        );
    }

    controller.settle().await;
    assert_eq!(controller.state().tag(), RequestTag::Succeeded);
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn every_failure_shape_collapses_to_the_same_message() {
    let mut outcomes = Vec::new();

    for status in [400, 404, 500, 503] {
        let server = MockServer::start().await;
        mount_status(&server, status, "{\"detail\":\"internal\"}").await;
        let mut controller = controller_for(&server);
        controller.update_input("???");
        controller.submit();
        controller.settle().await;
        outcomes.push(controller.state().clone());
    }

    for body in [
        "not json at all",
        "{}",
        "{\"emotion\":\"Joy\",\"confidence\":\"high\",\"emoji\":\"😊\"}",
        "{\"emotion\":\"Joy\",\"emoji\":\"😊\"}",
        "[]",
    ] {
        let server = MockServer::start().await;
        mount_raw_body(&server, body).await;
        let mut controller = controller_for(&server);
        controller.update_input("???");
        controller.submit();
        controller.settle().await;
        outcomes.push(controller.state().clone());
    }

    // Unreachable: the server is gone before the request is made.
    let server = MockServer::start().await;
    let mut controller = controller_for(&server);
    drop(server);
    controller.update_input("???");
    controller.submit();
    controller.settle().await;
    outcomes.push(controller.state().clone());

    for outcome in outcomes {
        assert_eq!(outcome, failed_generic());
    }
}

#[tokio::test]
async fn failure_then_retry_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_emotion(&server, "Relief", 0.66, "😌").await;

    let mut controller = controller_for(&server);
    controller.update_input("phew");
    controller.submit();
    controller.settle().await;
    assert_eq!(controller.state(), &failed_generic());
    assert!(controller.can_submit());

    assert_eq!(controller.submit(), SubmitOutcome::Accepted);
    assert_eq!(controller.state().tag(), RequestTag::Submitting);
    assert!(controller.state().error().is_none());
    controller.settle().await;
    assert_eq!(
        controller.state(),
        &RequestState::Succeeded(EmotionResult::new("Relief", 0.66, "😌"))
    );
}

#[tokio::test]
async fn resubmitting_clears_the_previous_result() {
    let server = MockServer::start().await;
    mount_emotion(&server, "Joy", 0.87, "😊").await;

    let mut controller = controller_for(&server);
    controller.update_input("I love this!");
    controller.submit();
    controller.settle().await;
    assert!(controller.state().result().is_some());

    assert_eq!(controller.submit(), SubmitOutcome::Accepted);
    assert_eq!(controller.state(), &RequestState::Submitting);
    assert!(controller.state().result().is_none());
    controller.settle().await;
}

#[tokio::test]
async fn editing_during_flight_keeps_state_and_sent_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_json(serde_json::json!({ "text": "first draft" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(emotion_body("Calm", 0.5, "😐"))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.update_input("first draft");
    controller.submit();

    controller.update_input("second draft");
    assert_eq!(controller.state(), &RequestState::Submitting);
    controller.update_input("");
    assert_eq!(controller.state(), &RequestState::Submitting);

    controller.settle().await;
    assert_eq!(controller.state().tag(), RequestTag::Succeeded);
    assert_eq!(controller.input(), "");
}

#[tokio::test]
async fn consecutive_results_are_independent() {
    let server = MockServer::start().await;
    for (text, emotion, confidence, emoji) in [
        ("great day", "Joy", 0.9, "😊"),
        ("rainy day", "Sadness", 0.3, "😢"),
    ] {
        Mock::given(method("POST"))
            .and(path(ANALYZE_PATH))
            .and(body_json(serde_json::json!({ "text": text })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(emotion_body(emotion, confidence, emoji)),
            )
            .mount(&server)
            .await;
    }

    let mut controller = controller_for(&server);
    controller.update_input("great day");
    controller.submit();
    controller.settle().await;
    let first = controller.state().result().cloned().expect("first result");

    controller.update_input("rainy day");
    controller.submit();
    controller.settle().await;
    let second = controller.state().result().cloned().expect("second result");

    assert_eq!(first, EmotionResult::new("Joy", 0.9, "😊"));
    assert_eq!(second, EmotionResult::new("Sadness", 0.3, "😢"));
}

#[tokio::test]
async fn app_tick_applies_the_response() {
    let server = MockServer::start().await;
    mount_emotion(&server, "Surprise", 0.71, "😮").await;

    let mut app = app_for(&server);
    app.update_input("wow");
    assert!(app.can_submit());
    app.submit();
    assert!(app.is_loading());
    assert!(!app.can_submit());

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while app.is_loading() && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.tick();
    }

    assert_eq!(
        app.request_state(),
        &RequestState::Succeeded(EmotionResult::new("Surprise", 0.71, "😮"))
    );
    assert!(app.can_submit());
}
