//! Mock Unsplash server for provider and image loader tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured photo request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub photo_id: String,
    pub authorization: Option<String>,
    pub accept_version: Option<String>,
}

/// The response every `/photos/{id}` request receives.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16, errors: &[&str]) -> Self {
        Self {
            status,
            body: serde_json::json!({ "errors": errors }).to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockUnsplash {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUnsplash {
    pub async fn start(response: MockResponse) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            response,
            captured: Arc::clone(&captured),
        };

        let app = Router::new()
            .route("/photos/{id}", get(photo_handler))
            .route("/images/{name}", get(image_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, captured }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn image_url(&self, name: &str) -> String {
        format!("http://{}/images/{}", self.addr, name)
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}

async fn photo_handler(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.captured.lock().await.push(CapturedRequest {
        photo_id: id,
        authorization: header(AUTHORIZATION.as_str()),
        accept_version: header("accept-version"),
    });

    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
}

/// `*.png` names get a small red PNG, `garbage.png` gets bytes that are
/// not an image, anything else is a 404.
async fn image_handler(Path(name): Path<String>) -> impl IntoResponse {
    if name == "garbage.png" {
        return (StatusCode::OK, b"not an image".to_vec());
    }
    if !name.ends_with(".png") {
        return (StatusCode::NOT_FOUND, Vec::new());
    }
    (StatusCode::OK, red_png(6, 4))
}

pub fn red_png(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 0, 0])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}
