use std::fs;
use std::time::Duration;
use compliance_forms::api::{routes::create_router, AppState};
use compliance_forms::config::{AppConfig, ArtifactFormat, GeneratorConfig};
use compliance_forms::model::mapping::StateMapping;
use compliance_forms::service::generator;
use reqwest::{header, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct Harness {
    _docs: tempfile::TempDir,
    base: String,
    client: reqwest::Client,
}

/// 生成映射 -> 启动服务（同时充当文档服务器）
async fn start() -> Harness {
    let docs = tempfile::tempdir().unwrap();
    let root = docs.path().join("Compliance");
    fs::create_dir_all(root.join("Gujarat").join("Wages")).unwrap();
    fs::write(root.join("Gujarat").join("Wages").join("Form 11.pdf"), b"%PDF-1.7").unwrap();
    fs::write(root.join("Gujarat").join("Empty.xls"), b"").unwrap();
    fs::write(root.join("Gujarat").join("Gone.doc"), b"x").unwrap();

    let generator_config = GeneratorConfig {
        document_root: root.clone(),
        output_path: docs.path().join("mapping.json"),
        format: ArtifactFormat::Json,
        sort_entries: true,
    };
    generator::run(&generator_config, false).unwrap();
    fs::remove_file(root.join("Gujarat").join("Gone.doc")).unwrap();

    let mapping = StateMapping::load(&generator_config.output_path).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = AppConfig::default();
    config.catalog.origin = format!("http://{}", addr);
    config.catalog.document_root = root;
    config.catalog.serve_documents = true;

    let app = create_router(AppState::new(config, mapping).unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Harness {
        _docs: docs,
        base: format!("http://{}", addr),
        client: reqwest::Client::new(),
    }
}

impl Harness {
    async fn session(&self) -> String {
        let body: Value = self
            .client
            .post(format!("{}/sessions", self.base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    async fn act(&self, session: &str, action: Value) -> Value {
        self.client
            .post(format!("{}/sessions/{}/actions", self.base, session))
            .json(&action)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn select(&self, session: &str, file: &str) {
        self.act(session, json!({"type": "select_state", "value": "Gujarat"})).await;
        let snapshot = self
            .act(session, json!({"type": "select_file", "value": file}))
            .await;
        assert_eq!(snapshot["selected_file"], file);
    }

    async fn download(&self, session: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/sessions/{}/download", self.base, session))
            .send()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn selected_form_downloads_as_attachment() {
    let harness = start().await;
    let session = harness.session().await;
    harness.select(&session, "/Wages/Form 11.pdf").await;

    let response = harness.download(&session).await;
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"Form 11.pdf\""));
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"%PDF-1.7");
}

#[tokio::test]
async fn missing_and_empty_files_report_the_same_error() {
    let harness = start().await;

    for file in ["/Gone.doc", "/Empty.xls"] {
        let session = harness.session().await;
        harness.select(&session, file).await;

        let response = harness.download(&session).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY, "{}", file);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["error"],
            "Unable to download this form. Please verify file availability."
        );

        let snapshot: Value = harness
            .client
            .get(format!("{}/sessions/{}", harness.base, session))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            snapshot["error"],
            "Unable to download this form. Please verify file availability."
        );
    }
}

#[tokio::test]
async fn documents_are_served_under_the_prefix() {
    let harness = start().await;
    let response = harness
        .client
        .get(format!("{}/Compliance/Gujarat/Wages/Form%2011.pdf", harness.base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"%PDF-1.7");
}

/// 文档服务器 500ms 后才返回 404
async fn slow_missing_origin() -> String {
    let origin = axum::Router::new().route(
        "/Compliance/*path",
        axum::routing::get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            axum::http::StatusCode::NOT_FOUND
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, origin).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn late_failure_does_not_leak_into_the_next_state() {
    let mapping = StateMapping::from_json(r#"{"Goa": ["/a.pdf"], "Delhi": ["/b.pdf"]}"#).unwrap();
    let mut config = AppConfig::default();
    config.catalog.origin = slow_missing_origin().await;
    config.catalog.serve_documents = false;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(config, mapping).unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let harness = Harness {
        _docs: tempfile::tempdir().unwrap(),
        base: format!("http://{}", addr),
        client: reqwest::Client::new(),
    };
    let session = harness.session().await;
    harness.act(&session, json!({"type": "select_state", "value": "Goa"})).await;
    harness.act(&session, json!({"type": "select_file", "value": "/a.pdf"})).await;

    let download = {
        let client = harness.client.clone();
        let url = format!("{}/sessions/{}/download", harness.base, session);
        tokio::spawn(async move { client.post(url).send().await.unwrap().status() })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    let switched = harness
        .act(&session, json!({"type": "select_state", "value": "Delhi"}))
        .await;
    assert_eq!(switched["error"], Value::Null);

    assert_eq!(download.await.unwrap(), StatusCode::BAD_GATEWAY);

    let snapshot: Value = harness
        .client
        .get(format!("{}/sessions/{}", harness.base, session))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snapshot["selected_state"], "Delhi");
    assert_eq!(snapshot["error"], Value::Null);
}
