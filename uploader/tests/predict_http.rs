//! End-to-end submission over HTTP against a local stand-in for the
//! prediction API.

#![cfg(feature = "native-client")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    routing::post,
    Router,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use uploader::{
    submit, Endpoint, LocalFile, ModelVersion, ReqwestTransport, Status, StatusKind, Uploader,
};

#[derive(Debug, Clone)]
struct Received {
    model: Option<String>,
    field: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

#[derive(Clone, Default)]
struct Seen(Arc<Mutex<Vec<Received>>>);

impl Seen {
    fn all(&self) -> Vec<Received> {
        self.0.lock().unwrap().clone()
    }
}

/// Answers based on the uploaded filename.
async fn predict(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    let mut file_name = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let fname = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

        if name == "file" {
            file_name = fname.clone();
        }
        seen.0.lock().unwrap().push(Received {
            model: params.get("model").cloned(),
            field: name,
            file_name: fname,
            content_type,
            bytes,
        });
    }

    match file_name.as_deref() {
        Some("fake.png") => (
            StatusCode::OK,
            r#"{"is_deepfake": true, "confidence": 0.932}"#.to_string(),
        ),
        Some("real.png") => (
            StatusCode::OK,
            r#"{"is_deepfake": false, "confidence": 0.5}"#.to_string(),
        ),
        Some("garbled.png") => (StatusCode::OK, "<html>maintenance</html>".to_string()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"is_deepfake": false, "confidence": 1.0}"#.to_string(),
        ),
    }
}

async fn spawn_server() -> (Endpoint, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/predict", post(predict))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Endpoint::new(format!("http://{}", addr)), seen)
}

/// Reads one request, then answers 500 with a body shorter than its
/// declared length and hangs up.
async fn spawn_truncated_500() -> Endpoint {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        // The multipart body ends with the closing boundary `--\r\n`.
        loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.ends_with(b"--\r\n") {
                break;
            }
        }
        let _ = socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
            .await;
        let _ = socket.shutdown().await;
    });
    Endpoint::new(format!("http://{}", addr))
}

fn selected(endpoint: Endpoint, name: &str) -> Rc<RefCell<Uploader<LocalFile>>> {
    let cell = Rc::new(RefCell::new(Uploader::new(endpoint)));
    cell.borrow_mut()
        .accept(LocalFile::new(name, "image/png", b"\x89PNG fake bytes".to_vec()))
        .unwrap();
    cell
}

#[tokio::test]
async fn test_multipart_carries_file_and_model() {
    let (endpoint, seen) = spawn_server().await;
    let cell = selected(endpoint, "real.png");
    cell.borrow_mut().set_model(ModelVersion::V2);

    submit(&cell, &ReqwestTransport::default()).await;

    let received = seen.all();
    assert_eq!(received.len(), 1);
    let upload = &received[0];
    assert_eq!(upload.field, "file");
    assert_eq!(upload.file_name.as_deref(), Some("real.png"));
    assert_eq!(upload.content_type.as_deref(), Some("image/png"));
    assert_eq!(upload.model.as_deref(), Some("v2"));
    assert_eq!(upload.bytes, b"\x89PNG fake bytes".to_vec());
}

#[tokio::test]
async fn test_deepfake_over_http() {
    let (endpoint, _seen) = spawn_server().await;
    let cell = selected(endpoint, "fake.png");

    submit(&cell, &ReqwestTransport::default()).await;

    let state = cell.borrow();
    assert_eq!(state.status().kind(), Some(StatusKind::Error));
    assert!(state.status().message().unwrap().contains("93.2"));
    assert!(!state.is_uploading());
}

#[tokio::test]
async fn test_authentic_over_http() {
    let (endpoint, seen) = spawn_server().await;
    let cell = selected(endpoint, "real.png");

    submit(&cell, &ReqwestTransport::default()).await;

    let state = cell.borrow();
    assert_eq!(state.status().kind(), Some(StatusKind::Success));
    assert!(state.status().message().unwrap().contains("50.0"));
    assert_eq!(seen.all()[0].model.as_deref(), Some("v1"));
}

#[tokio::test]
async fn test_server_error_over_http() {
    let (endpoint, _seen) = spawn_server().await;
    let cell = selected(endpoint, "boom.png");

    submit(&cell, &ReqwestTransport::default()).await;

    assert_eq!(
        cell.borrow().status(),
        &Status::Error("Server error while analysing media".into())
    );
    assert!(!cell.borrow().is_uploading());
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let (endpoint, _seen) = spawn_server().await;
    let cell = selected(endpoint, "garbled.png");

    submit(&cell, &ReqwestTransport::default()).await;

    assert_eq!(cell.borrow().status().kind(), Some(StatusKind::Error));
    assert!(!cell.borrow().is_uploading());
}

#[tokio::test]
async fn test_server_error_with_truncated_body() {
    let endpoint = spawn_truncated_500().await;
    let cell = selected(endpoint, "real.png");

    submit(&cell, &ReqwestTransport::default()).await;

    assert_eq!(
        cell.borrow().status(),
        &Status::Error("Server error while analysing media".into())
    );
    assert!(!cell.borrow().is_uploading());
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cell = selected(Endpoint::new(format!("http://{}", addr)), "real.png");
    submit(&cell, &ReqwestTransport::default()).await;

    let state = cell.borrow();
    assert_eq!(state.status().kind(), Some(StatusKind::Error));
    assert!(!state.status().message().unwrap().is_empty());
    assert!(!state.is_uploading());
}
