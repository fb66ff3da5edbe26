#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use compliance_forms::api::{routes::create_router, AppState};
use compliance_forms::config::AppConfig;
use compliance_forms::model::mapping::StateMapping;
use serde_json::Value;
use tower::ServiceExt;

pub fn sample_mapping() -> StateMapping {
    StateMapping::from_json(
        r#"{
            "Maharashtra": [
                "/Wages/Salary_Register.xls",
                "/Payment_Form.pdf",
                "/Shops/Unrelated.pdf"
            ],
            "Gujarat": ["/Bonus/Form_C.pdf", "/Muster_Roll.xlsx"],
            "Delhi": []
        }"#,
    )
    .expect("sample mapping")
}

pub fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.catalog.serve_documents = false;
    create_router(AppState::new(config, sample_mapping()).expect("app state"))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn new_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("session id").to_string()
}

pub async fn act(app: &Router, session: &str, action: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/sessions/{}/actions", session), Some(action)).await
}
