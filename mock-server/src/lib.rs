use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration: u32,
    pub categories: Vec<String>,
    pub body_parts: Vec<String>,
    pub created_by: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub file: String,
    pub file_type: String,
    pub level: i32,
    pub body_parts: Vec<String>,
    pub file_size: u64,
    pub duration: f64,
    pub author: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    pub name: String,
    pub description: String,
    pub gender: String,
    pub categories: Vec<String>,
    pub file_name: String,
    pub screenshot: String,
}

/// A record the server can list, fetch and search.
pub trait Record: Clone + Serialize {
    const LABEL: &'static str;
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

impl Record for Workout {
    const LABEL: &'static str = "Workout";
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Record for Motion {
    const LABEL: &'static str = "Motion";
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Record for Avatar {
    const LABEL: &'static str = "Avatar";
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub workouts: Vec<Workout>,
    pub motions: Vec<Motion>,
    pub avatars: Vec<Avatar>,
}

impl Catalog {
    /// Records served by a freshly started server. Ids use a `remote-` prefix
    /// so they never collide with the client's built-in sample data.
    pub fn seeded() -> Self {
        let tags = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            workouts: vec![
                Workout {
                    id: "remote-101".to_string(),
                    name: "Rowing Intervals".to_string(),
                    description: "Eight rounds of hard rowing with short rests.".to_string(),
                    difficulty: "Intermediate".to_string(),
                    duration: 25,
                    categories: tags(&["Cardio", "Intervals"]),
                    body_parts: tags(&["Back", "Legs"]),
                    created_by: "Remote Coach".to_string(),
                },
                Workout {
                    id: "remote-102".to_string(),
                    name: "Mobility Reset".to_string(),
                    description: "Slow joint circles and stretches for recovery days.".to_string(),
                    difficulty: "Beginner".to_string(),
                    duration: 15,
                    categories: tags(&["Mobility"]),
                    body_parts: tags(&["Full Body"]),
                    created_by: "Remote Coach".to_string(),
                },
            ],
            motions: vec![
                Motion {
                    id: "remote-201".to_string(),
                    name: "Kettlebell Swing".to_string(),
                    description: "Explosive hip hinge driving the bell to chest height.".to_string(),
                    file: "motions/kettlebell-swing.glb".to_string(),
                    file_type: "glb".to_string(),
                    level: 2,
                    body_parts: tags(&["Hips", "Glutes"]),
                    file_size: 204_800,
                    duration: 2.2,
                    author: "Remote Lab".to_string(),
                },
                Motion {
                    id: "remote-202".to_string(),
                    name: "Goblet Squat".to_string(),
                    description: "Front-loaded squat holding a single weight.".to_string(),
                    file: "motions/goblet-squat.glb".to_string(),
                    file_type: "glb".to_string(),
                    level: 1,
                    body_parts: tags(&["Legs"]),
                    file_size: 180_224,
                    duration: 3.1,
                    author: "Remote Lab".to_string(),
                },
                Motion {
                    id: "remote-203".to_string(),
                    name: "Turkish Get-up".to_string(),
                    description: "Floor-to-standing sequence under load.".to_string(),
                    file: "motions/turkish-get-up.glb".to_string(),
                    file_type: "glb".to_string(),
                    level: 3,
                    body_parts: tags(&["Full Body"]),
                    file_size: 409_600,
                    duration: 9.8,
                    author: "Remote Lab".to_string(),
                },
            ],
            avatars: vec![Avatar {
                id: "remote-301".to_string(),
                name: "Runner".to_string(),
                description: "Lean avatar tuned for running cycles.".to_string(),
                gender: "Female".to_string(),
                categories: tags(&["Athletic", "Female"]),
                file_name: "runner.glb".to_string(),
                screenshot: "https://assets.example.com/avatars/runner.png".to_string(),
            }],
        }
    }
}

/// Shared server state with switches tests flip at runtime.
#[derive(Debug)]
pub struct ServerState {
    pub catalog: Catalog,
    healthy: AtomicBool,
    failing: AtomicBool,
    required_token: Option<String>,
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            healthy: AtomicBool::new(true),
            failing: AtomicBool::new(false),
            required_token: None,
        }
    }

    /// Reject resource requests without `Authorization: Bearer {token}`.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// While unhealthy, `/health` answers 503.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// While failing, every resource route answers 500.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

pub type Shared = Arc<ServerState>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub fn app() -> Router {
    router(Arc::new(ServerState::default()))
}

pub fn router(state: Shared) -> Router {
    let resources = Router::new()
        .route("/workouts", get(list::<Workout>))
        .route("/workouts/search", get(search::<Workout>))
        .route("/workouts/{id}", get(fetch::<Workout>))
        .route("/motions", get(list::<Motion>))
        .route("/motions/search", get(search::<Motion>))
        .route("/motions/{id}", get(fetch::<Motion>))
        .route("/avatars", get(list::<Avatar>))
        .route("/avatars/search", get(search::<Avatar>))
        .route("/avatars/{id}", get(fetch::<Avatar>))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard));

    Router::new()
        .route("/health", get(health))
        .merge(resources)
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: Shared) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}

/// Access to a record collection by type.
trait Collection: Record + Sized {
    fn all(catalog: &Catalog) -> &[Self];
}

impl Collection for Workout {
    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.workouts
    }
}

impl Collection for Motion {
    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.motions
    }
}

impl Collection for Avatar {
    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.avatars
    }
}

async fn health(State(state): State<Shared>) -> Response {
    if state.healthy.load(Ordering::SeqCst) {
        Json(json!({ "status": "ok" })).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "down" }))).into_response()
    }
}

async fn guard(State(state): State<Shared>, request: Request, next: Next) -> Response {
    if state.failing.load(Ordering::SeqCst) {
        tracing::warn!(uri = %request.uri(), "Failing request on purpose");
        return (StatusCode::INTERNAL_SERVER_ERROR, "simulated failure").into_response();
    }
    if let Some(token) = &state.required_token {
        let expected = format!("Bearer {token}");
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if presented != Some(expected.as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "Unauthorized" })),
            )
                .into_response();
        }
    }
    next.run(request).await
}

async fn list<T: Collection>(State(state): State<Shared>, Query(params): Query<PageParams>) -> Response {
    let items = T::all(&state.catalog);
    let total = items.len();
    let data: Vec<T> = if params.page == 0 || params.page_size == 0 {
        Vec::new()
    } else {
        let start = (params.page as usize - 1) * params.page_size as usize;
        items
            .iter()
            .skip(start)
            .take(params.page_size as usize)
            .cloned()
            .collect()
    };
    let total_pages = if params.page_size == 0 {
        0
    } else {
        total.div_ceil(params.page_size as usize)
    };
    Json(json!({
        "success": true,
        "data": data,
        "total": total,
        "page": params.page,
        "pageSize": params.page_size,
        "totalPages": total_pages,
    }))
    .into_response()
}

async fn fetch<T: Collection>(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    match T::all(&state.catalog).iter().find(|record| record.id() == id) {
        Some(record) => Json(json!({ "success": true, "data": record })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": format!("{} not found", T::LABEL) })),
        )
            .into_response(),
    }
}

async fn search<T: Collection>(State(state): State<Shared>, Query(params): Query<SearchParams>) -> Response {
    let needle = params.q.to_lowercase();
    let data: Vec<T> = T::all(&state.catalog)
        .iter()
        .filter(|record| {
            record.name().to_lowercase().contains(&needle)
                || record.description().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    let total = data.len();
    Json(json!({
        "success": true,
        "data": data,
        "total": total,
        "page": 1,
        "pageSize": total,
        "totalPages": 1,
    }))
    .into_response()
}
