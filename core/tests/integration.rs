//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `MotionRepoService`
//! over real HTTP with `ReqwestTransport`. Server-side switches simulate an
//! outage mid-session so the downgrade and recovery paths run against a real
//! socket rather than a scripted transport.

use std::sync::Arc;
use std::time::Duration;

use mock_server::{Catalog, ServerState};
use motionrepo_core::{
    sample_data, ApiConfig, ApiError, FallbackConfig, MotionRepoService, PaginatedResponse, ReqwestTransport,
    RequestOptions, Workout,
};
use tokio::net::TcpListener;

async fn start_server(state: Arc<ServerState>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, state));
    format!("http://{addr}")
}

/// An address nothing listens on.
async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn config(base_url: &str) -> ApiConfig {
    ApiConfig::new(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_fallback(FallbackConfig {
            delay: Duration::ZERO,
            probe_timeout: Duration::from_secs(2),
            ..FallbackConfig::default()
        })
}

async fn connect(config: ApiConfig) -> MotionRepoService<ReqwestTransport> {
    MotionRepoService::connect(config, ReqwestTransport::new().unwrap()).await
}

#[tokio::test]
async fn remote_mode_reads_from_server() {
    let base = start_server(Arc::new(ServerState::default())).await;
    let service = connect(config(&base)).await;
    assert!(!service.is_using_fallback());
    assert!(service.is_remote_available());

    let page = service.list_motions(1, 2).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id.as_deref(), Some("remote-201"));

    let workout = service.get_workout("remote-101").await.unwrap();
    assert!(workout.success);
    assert_eq!(workout.data.unwrap().name.as_deref(), Some("Rowing Intervals"));

    let found = service.search_motions("squat").await.unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.data[0].name.as_deref(), Some("Goblet Squat"));

    let avatars = service.search_avatars("runner").await.unwrap();
    assert_eq!(avatars.data.len(), 1);

    assert!(!service.is_using_fallback());
}

#[tokio::test]
async fn unreachable_server_starts_in_fallback() {
    let service = connect(config(&dead_address().await)).await;
    assert!(service.is_using_fallback());
    assert!(!service.is_remote_available());

    let page = service.list_workouts(1, 10).await.unwrap();
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.data[0].id.as_deref(), Some("workout-001"));
}

#[tokio::test]
async fn outage_downgrades_once_and_refresh_recovers() {
    let state = Arc::new(ServerState::default());
    let base = start_server(state.clone()).await;
    let service = connect(config(&base)).await;
    assert!(!service.is_using_fallback());

    state.set_failing(true);
    let page = service.list_workouts(1, 2).await.unwrap();
    assert!(service.is_using_fallback());
    assert_eq!(page, PaginatedResponse::page_of(sample_data::workouts(), 1, 2));

    // The server is back, but the service stays on sample data until asked.
    state.set_failing(false);
    let again = service.list_workouts(1, 2).await.unwrap();
    assert_eq!(again.data[0].id.as_deref(), Some("workout-001"));

    assert!(service.refresh_status().await);
    assert!(!service.is_using_fallback());
    let remote = service.list_workouts(1, 2).await.unwrap();
    assert_eq!(remote.data[0].id.as_deref(), Some("remote-101"));
}

#[tokio::test]
async fn refresh_status_sees_health_going_down() {
    let state = Arc::new(ServerState::default());
    let base = start_server(state.clone()).await;
    let service = connect(config(&base)).await;

    state.set_healthy(false);
    assert!(!service.refresh_status().await);
    assert!(service.is_using_fallback());
}

#[tokio::test]
async fn remote_not_found_downgrades_to_sample_lookup() {
    let base = start_server(Arc::new(ServerState::default())).await;
    let service = connect(config(&base)).await;

    // The remote 404 is an HTTP failure; the sample store does have this id.
    let motion = service.get_motion("motion-003").await.unwrap();
    assert!(service.is_using_fallback());
    assert_eq!(motion.data.unwrap().name.as_deref(), Some("Plank"));
}

#[tokio::test]
async fn bearer_token_reaches_the_server() {
    let state = Arc::new(ServerState::new(Catalog::seeded()).with_required_token("s3cret"));
    let base = start_server(state).await;

    let service = connect(config(&base).with_auth_token("s3cret")).await;
    let avatars = service.list_avatars(1, 10).await.unwrap();
    assert_eq!(avatars.data[0].id.as_deref(), Some("remote-301"));
    assert!(!service.is_using_fallback());
}

#[tokio::test]
async fn disabled_fallback_returns_http_errors() {
    let state = Arc::new(ServerState::new(Catalog::seeded()).with_required_token("s3cret"));
    let base = start_server(state).await;

    let service = connect(config(&base).with_fallback(FallbackConfig::disabled())).await;
    let err = service.list_avatars(1, 10).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 401, .. }));
    assert!(!service.is_using_fallback());
}

#[tokio::test]
async fn disabled_fallback_against_dead_address_is_transport_error() {
    let config = config(&dead_address().await).with_fallback(FallbackConfig::disabled());
    let service = connect(config).await;
    assert!(service.is_remote_available());

    let err = service.search_workouts("hiit").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn request_wrapper_accepts_caller_headers() {
    let state = Arc::new(ServerState::new(Catalog::seeded()).with_required_token("s3cret"));
    let base = start_server(state).await;
    let service = connect(config(&base)).await;

    let options = RequestOptions::default().header("Authorization", "Bearer s3cret");
    let page: PaginatedResponse<Workout> = service.request("/workouts?page=1&pageSize=1", options).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total_pages, 2);
}
