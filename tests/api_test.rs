mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use common::*;
use interview_rag::api::build_router;
use interview_rag::api::handlers::AppState;
use interview_rag::api::types::APOLOGY_ANSWER;
use interview_rag::api::types::INVALID_QUESTION;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

const ANSWER: &str = "I lead with data and ship in small increments.";

fn app(llm: FakeLlm, index: FakeIndex) -> Router {
    build_router(
        AppState::new(service(Arc::new(llm), Arc::new(index))),
        false,
    )
}

fn healthy_app() -> Router {
    app(
        FakeLlm::answering("leadership experience", ANSWER),
        FakeIndex::with_documents(skills_documents()),
    )
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
    send_raw(app, method, uri, body).await
}

async fn send_raw(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(healthy_app(), "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_list_presets() {
    let (status, body) = send(healthy_app(), "GET", "/api/presets", None).await;

    assert_eq!(status, StatusCode::OK);
    let presets = body["data"].as_array().unwrap();
    assert_eq!(presets.len(), 4);
    assert_eq!(presets[0]["name"], "technical");
    assert!(presets[0]["response_model"].is_string());
}

#[tokio::test]
async fn test_rag_answer() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag",
        Some(json!({"question": "How do you lead teams?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], ANSWER);
    assert_eq!(body["metadata"]["originalQuery"], "How do you lead teams?");
    assert_eq!(body["metadata"]["enhancedQuery"], "leadership experience");
    assert_eq!(body["metadata"]["resultsFound"], 2);
}

#[tokio::test]
async fn test_rag_rejects_invalid_question() {
    for payload in [json!({"question": "   "}), json!({"question": 7}), json!({})] {
        let (status, body) = send(healthy_app(), "POST", "/api/rag", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], INVALID_QUESTION);
        assert!(body.get("answer").is_none());
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_question() {
    let (status, body) = send_raw(
        healthy_app(),
        "POST",
        "/api/rag",
        Body::from("question=why rust"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_QUESTION);

    let (status, body) = send_raw(
        healthy_app(),
        "POST",
        "/api/rag/compare",
        Body::from("{\"question\": "),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], INVALID_QUESTION);
}

#[tokio::test]
async fn test_rag_apologizes_when_everything_fails() {
    let app = app(FakeLlm::failing(), FakeIndex::failing("index unavailable"));

    let (status, body) = send(
        app,
        "POST",
        "/api/rag",
        Some(json!({"question": "Why this company?"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["answer"], APOLOGY_ANSWER);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("index unavailable"));
}

#[tokio::test]
async fn test_rag_basic() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag/basic",
        Some(json!({"question": "What are my skills?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["response"], SKILLS_CONTEXT);
    assert_eq!(body["data"]["metadata"]["resultsFound"], 2);
}

#[tokio::test]
async fn test_rag_basic_envelope_errors() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag/basic",
        Some(json!({"question": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], INVALID_QUESTION);

    let failing = app(
        FakeLlm::failing(),
        FakeIndex::failing("index unavailable"),
    );
    let (status, body) = send(
        failing,
        "POST",
        "/api/rag/basic",
        Some(json!({"question": "What are my skills?"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_rag_compare() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag/compare",
        Some(json!({"question": "How do you lead teams?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["question"], "How do you lead teams?");
    assert_eq!(data["results"]["basic"]["response"], SKILLS_CONTEXT);
    assert_eq!(data["results"]["enhanced"]["response"], ANSWER);
    assert!(data["totalComparisonMs"].is_u64());
}

#[tokio::test]
async fn test_rag_contextual() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag/contextual",
        Some(json!({
            "question": "Why do you want this role?",
            "context": {
                "type": "executive",
                "companyInfo": "Series B fintech",
                "jobRequirements": ["Strategy", "Hiring"]
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["metadata"]["originalQuery"],
        "Context: This is a executive interview question.\n\
         Company: Series B fintech\n\
         Key Requirements: Strategy, Hiring\n\
         \n\
         Question: Why do you want this role?"
    );
}

#[tokio::test]
async fn test_rag_preset_defaults_to_general() {
    let (status, body) = send(
        healthy_app(),
        "POST",
        "/api/rag/preset",
        Some(json!({"question": "Tell me about yourself"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["response"], ANSWER);
}
