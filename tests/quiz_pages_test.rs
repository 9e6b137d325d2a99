use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quiz_portal::{config::Config, routes, AppState};

fn test_state(upstream: &str) -> AppState {
    let config = Config {
        quiz_url: format!("{}/api/quizzes/", upstream),
        quiz_list_url: format!("{}/api/quizzes", upstream),
        checker_service_url: format!("{}/api/evaluate", upstream),
        server_address: "127.0.0.1:0".to_string(),
    };
    AppState::new(config, std::path::PathBuf::from("config.toml"))
}

fn pages_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::health::health))
        .route("/quiz/*id", get(routes::pages::quiz_detail))
        .with_state(state)
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_quiz_list_from_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quizzes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "q1", "title": "Math"},
            {"id": "q2", "title": "History"}
        ])))
        .mount(&server)
        .await;

    let app = pages_router(test_state(&server.uri()));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    let math = html.find("/quiz/q1").expect("link to q1");
    let history = html.find("/quiz/q2").expect("link to q2");
    assert!(math < history, "list order must match upstream order");
    assert!(html.contains("Math"));
    assert!(html.contains("History"));
}

#[tokio::test]
async fn index_propagates_upstream_status_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quizzes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = pages_router(test_state(&server.uri()));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(resp).await;
    assert!(body.contains("503"), "error body must carry the status code: {body}");
}

#[tokio::test]
async fn index_rejects_undecodable_upstream_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quizzes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = pages_router(test_state(&server.uri()));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn quiz_page_renders_fetched_quiz() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quizzes/q1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "q1",
            "title": "Rust Basics",
            "questions": [
                {
                    "id": 1,
                    "text": "Which keyword declares a binding?",
                    "type": "multiple-choice",
                    "options": ["let", "var"],
                    "answers": [0]
                }
            ]
        })))
        .mount(&server)
        .await;

    let app = pages_router(test_state(&server.uri()));
    let req = Request::builder()
        .uri("/quiz/q1")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Rust Basics"));
    assert!(html.contains("Which keyword declares a binding?"));
    assert!(html.contains("name=\"quizId\" value=\"q1\""));
}

#[tokio::test]
async fn quiz_page_propagates_upstream_status_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quizzes/q1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let app = pages_router(test_state(&server.uri()));
    let req = Request::builder()
        .uri("/quiz/q1")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(resp).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn health_does_not_depend_on_upstreams() {
    // Nothing is listening on this address; /health must not care.
    let app = pages_router(test_state("http://127.0.0.1:1"));
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}
