//! End-to-end tests: ViewCoordinator -> GatewayClient -> fake gateway over HTTP.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use time::macros::date;

use apod_client::{GatewayClient, ViewCoordinator};
use apod_core::{
    FetchError, MediaType, PictureRecord, PictureSource, RequestState, FALLBACK_COMMENTARY,
};

#[derive(Clone, Default)]
struct Seen {
    dates: Arc<Mutex<Vec<Option<String>>>>,
    commentary: Arc<Mutex<Vec<Value>>>,
}

async fn fake_apod(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let date = params.get("date").cloned();
    seen.dates.lock().unwrap().push(date.clone());

    match date.as_deref() {
        None | Some("2024-01-01") => (
            StatusCode::OK,
            Json(json!({
                "date": "2024-01-01",
                "title": "Nebula",
                "explanation": "A bright nebula...",
                "media_type": "image",
                "url": "https://x/img.jpg"
            })),
        )
            .into_response(),
        Some("2024-02-02") => (
            StatusCode::OK,
            Json(json!({"date": "2024-02-02", "title": "Half a record"})),
        )
            .into_response(),
        Some("2024-04-04") => (
            StatusCode::OK,
            Json(json!({
                "date": "2024-04-04",
                "title": "Launch",
                "explanation": "A rocket.",
                "media_type": "video",
                "url": "https://www.youtube.com/embed/x"
            })),
        )
            .into_response(),
        Some(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "failed to fetch APOD data"})),
        )
            .into_response(),
    }
}

async fn fake_commentary(State(seen): State<Seen>, Json(body): Json<Value>) -> Response {
    seen.commentary.lock().unwrap().push(body);
    (
        StatusCode::OK,
        Json(json!({
            "text": "Veils of gas\nlit by young stars",
            "generated_at": "2024-01-01T12:00:00Z"
        })),
    )
        .into_response()
}

async fn fake_gateway() -> (SocketAddr, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/apod", get(fake_apod))
        .route("/api/commentary", post(fake_commentary))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (addr, seen)
}

fn client_for(addr: SocketAddr) -> Arc<GatewayClient> {
    Arc::new(GatewayClient::new(
        format!("http://{}", addr),
        Duration::from_secs(5),
    ))
}

fn view_for(client: Arc<GatewayClient>) -> ViewCoordinator {
    ViewCoordinator::new(client.clone(), client)
}

#[tokio::test(flavor = "multi_thread")]
async fn nebula_scenario_loads_the_record() {
    let (addr, seen) = fake_gateway().await;
    let mut view = view_for(client_for(addr));

    view.select_date(Some(date!(2024 - 01 - 01)));
    view.settle().await;

    let expected = PictureRecord {
        date: date!(2024 - 01 - 01),
        title: "Nebula".to_string(),
        explanation: "A bright nebula...".to_string(),
        media_type: MediaType::Image,
        url: "https://x/img.jpg".to_string(),
        hd_url: None,
    };
    assert_eq!(view.state().picture, RequestState::Success(expected));
    assert_eq!(
        seen.dates.lock().unwrap().as_slice(),
        &[Some("2024-01-01".to_string())]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn today_sends_no_date_parameter() {
    let (addr, seen) = fake_gateway().await;
    let mut view = view_for(client_for(addr));

    view.select_date(None);
    view.settle().await;

    assert!(view.state().picture.success().is_some());
    assert_eq!(seen.dates.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test(flavor = "multi_thread")]
async fn gateway_500_is_picture_fetch_failed() {
    let (addr, _) = fake_gateway().await;
    let mut view = view_for(client_for(addr));

    view.select_date(Some(date!(2099 - 01 - 01)));
    view.settle().await;

    assert_eq!(
        view.state().picture,
        RequestState::Failed(FetchError::PictureFetchFailed)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn incomplete_record_is_picture_fetch_failed() {
    let (addr, _) = fake_gateway().await;
    let result = client_for(addr)
        .fetch_picture(Some(date!(2024 - 02 - 02)))
        .await;
    assert_eq!(result, Err(FetchError::PictureFetchFailed));
}

#[tokio::test(flavor = "multi_thread")]
async fn commentary_round_trip_through_the_gateway() {
    let (addr, seen) = fake_gateway().await;
    let mut view = view_for(client_for(addr));

    view.select_date(None);
    view.settle().await;
    assert!(view.request_commentary());
    view.settle().await;

    assert_eq!(
        view.state().commentary.success().map(|c| c.text.as_str()),
        Some("Veils of gas\nlit by young stars")
    );

    let sent = seen.commentary.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["subject_title"], "Nebula");
    assert_eq!(sent[0]["subject_description"], "A bright nebula...");
}

#[tokio::test(flavor = "multi_thread")]
async fn video_is_loaded_but_commentary_is_not_offered() {
    let (addr, seen) = fake_gateway().await;
    let mut view = view_for(client_for(addr));

    view.select_date(Some(date!(2024 - 04 - 04)));
    view.settle().await;

    let record = view.state().picture.success().expect("video record");
    assert!(!record.is_image());
    assert!(!view.request_commentary());
    assert!(seen.commentary.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_commentary_route_resolves_to_fallback() {
    let (addr, _) = fake_gateway().await;
    let pictures = client_for(addr);
    let commentary = Arc::new(GatewayClient::new(
        "http://127.0.0.1:9",
        Duration::from_secs(2),
    ));
    let mut view = ViewCoordinator::new(pictures, commentary);

    view.select_date(None);
    view.settle().await;
    assert!(view.request_commentary());
    view.settle().await;

    match &view.state().commentary {
        RequestState::Success(result) => assert_eq!(result.text, FALLBACK_COMMENTARY),
        other => panic!("expected fallback success, got {:?}", other),
    }
}
