//! HTTP API tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

use manual_search::api::{create_router, AppState};
use manual_search::{Document, DocumentPage, DocumentStore};

fn setup_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut store = DocumentStore::in_memory(temp_dir.path().join("manuals.jsonl"));
    store.seed_default_synonyms();

    store
        .insert_document(Document::new(
            "doc-002".to_string(),
            "jiangling_circuit.pdf".to_string(),
            "江铃福顺整车电路图册".to_string(),
            "/pdfs/jiangling_circuit.pdf".to_string(),
        ))
        .unwrap();
    store
        .insert_page(DocumentPage::new(
            "doc-002".to_string(),
            12,
            "[TITLE]继电器[/TITLE]\n[DESCRIPTION]继电器盒位于驾驶室\n1 | Relay[/DESCRIPTION]\n[TEXT]K1 继电器[/TEXT]".to_string(),
        ))
        .unwrap();

    let mut keywords_only = Document::new(
        "doc-004".to_string(),
        "jiefang_wiring.pdf".to_string(),
        "一汽解放新款J6L整车线束图".to_string(),
        "/pdfs/jiefang_wiring.pdf".to_string(),
    );
    keywords_only.extracted_text = Some("一汽解放 整车线束图 ECU 电子控制单元 挂车控制模块 TCM".to_string());
    store.insert_document(keywords_only).unwrap();

    let app = create_router(Arc::new(AppState::new(store)));
    (app, temp_dir)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_search(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_and_get_documents() {
    let (app, _dir) = setup_app();

    let (status, body) = send(app.clone(), get("/api/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(app.clone(), get("/api/documents/doc-002")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["originalName"], "江铃福顺整车电路图册");

    let (status, body) = send(app, get("/api/documents/doc-404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_pages_endpoints() {
    let (app, _dir) = setup_app();

    let (status, body) = send(app.clone(), get("/api/documents/doc-002/pages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["pageNumber"], 12);

    let (status, body) = send(app.clone(), get("/api/documents/doc-002/pages/12")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["pageText"].as_str().unwrap().starts_with("[TITLE]"));

    let (status, _) = send(app.clone(), get("/api/documents/doc-002/pages/13")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app, get("/api/documents/doc-404/pages")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_ranks_title_first() {
    let (app, _dir) = setup_app();

    let (status, body) = send(
        app,
        post_search(json!({ "query": "继电器", "documentId": "doc-002" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "继电器");
    assert_eq!(body["documentId"], "doc-002");

    let results = body["results"].as_array().unwrap();
    assert_eq!(body["totalMatches"], results.len());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["type"], "title");
    assert_eq!(results[0]["relevanceScore"], 1055);
    assert_eq!(results[1]["type"], "description");
    assert_eq!(results[2]["type"], "text");
    assert_eq!(results[0]["context"], "<mark>继电器</mark>");
}

#[tokio::test]
async fn test_search_with_synonyms() {
    let (app, _dir) = setup_app();

    let (_, without) = send(
        app.clone(),
        post_search(json!({ "query": "relay", "documentId": "doc-002" })),
    )
    .await;
    let (_, with) = send(
        app,
        post_search(json!({ "query": "relay", "documentId": "doc-002", "includeSynonyms": true })),
    )
    .await;

    assert_eq!(without["totalMatches"], 1);
    assert_eq!(without["results"][0]["type"], "description");
    assert!(with["totalMatches"].as_u64().unwrap() > 1);
    assert_eq!(with["results"][0]["type"], "title");
}

#[tokio::test]
async fn test_search_document_without_pages_is_empty() {
    let (app, _dir) = setup_app();

    // doc-004 only carries a keyword blob in extractedText
    let (status, body) = send(
        app,
        post_search(json!({ "query": "TCM", "documentId": "doc-004", "includeSynonyms": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["documentId"], "doc-004");
    assert_eq!(body["totalMatches"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_rejects_bad_requests() {
    let (app, _dir) = setup_app();

    let (status, body) = send(
        app.clone(),
        post_search(json!({ "query": "   ", "documentId": "doc-002" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = send(app.clone(), post_search(json!({ "query": "ECU" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        app,
        post_search(json!({ "query": "ECU", "documentId": "doc-404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
