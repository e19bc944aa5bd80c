use anyhow::{Context, Result};
use std::path::Path as FsPath;
use std::sync::MutexGuard;
use std::time::Duration;

use tracing::{debug, info};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};

use super::error::{ApiError, ISRC_MISMATCH};
use super::{log_requests, state::*, ServerConfig};
use crate::catalog::{MusicSingleRelease, SingleFields};
use crate::catalog_store::SinglesStore;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    /// Absent when the store cannot list its content.
    pub singles_count: Option<usize>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

fn lock_store(
    store: &GuardedSinglesStore,
) -> Result<MutexGuard<'_, Box<dyn SinglesStore>>, ApiError> {
    store
        .lock()
        .map_err(|_| ApiError::Internal("Singles store lock poisoned".to_owned()))
}

async fn home(State(state): State<ServerState>) -> Result<Json<ServerStats>, ApiError> {
    let singles_count = lock_store(&state.singles_store)?
        .list_singles()
        .ok()
        .map(|singles| singles.len());
    Ok(Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        singles_count,
    }))
}

async fn post_single(
    State(store): State<GuardedSinglesStore>,
    payload: Result<Json<SingleFields>, JsonRejection>,
) -> Result<(StatusCode, Json<MusicSingleRelease>), ApiError> {
    let Json(fields) = payload?;
    let single = MusicSingleRelease::construct(fields)?;
    let created = lock_store(&store)?.create_single(single)?;
    debug!("Created single {}", created.isrc());
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_singles(
    State(store): State<GuardedSinglesStore>,
) -> Result<Json<Vec<MusicSingleRelease>>, ApiError> {
    Ok(Json(lock_store(&store)?.list_singles()?))
}

async fn get_single(
    State(store): State<GuardedSinglesStore>,
    Path(isrc): Path<String>,
) -> Result<Json<MusicSingleRelease>, ApiError> {
    Ok(Json(lock_store(&store)?.read_single(&isrc)?))
}

async fn put_single(
    State(store): State<GuardedSinglesStore>,
    Path(isrc): Path<String>,
    payload: Result<Json<SingleFields>, JsonRejection>,
) -> Result<Json<MusicSingleRelease>, ApiError> {
    let Json(fields) = payload?;
    let single = MusicSingleRelease::construct(fields)?;
    if single.isrc().as_str() != isrc {
        return Err(ApiError::BadRequest(ISRC_MISMATCH.to_owned()));
    }
    let updated = lock_store(&store)?.update_single(&isrc, single)?;
    debug!("Updated single {}", isrc);
    Ok(Json(updated))
}

async fn delete_single(
    State(store): State<GuardedSinglesStore>,
    Path(isrc): Path<String>,
) -> Result<StatusCode, ApiError> {
    lock_store(&store)?.delete_single(&isrc)?;
    debug!("Deleted single {}", isrc);
    Ok(StatusCode::NO_CONTENT)
}

fn make_singles_routes(state: ServerState) -> Router {
    Router::new()
        .route("/singles", get(get_singles).post(post_single))
        .route("/singles/", get(get_singles).post(post_single))
        .route(
            "/singles/{isrc}",
            get(get_single).put(put_single).delete(delete_single),
        )
        .with_state(state)
}

pub fn make_app(config: ServerConfig, singles_store: Box<dyn SinglesStore>) -> Result<Router> {
    let state = ServerState::new(config.clone(), singles_store);

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let index_file = FsPath::new(frontend_path).join("index.html");
            Router::new()
                .route_service("/", ServeFile::new(index_file))
                .nest_service("/static", ServeDir::new(frontend_path))
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    let app: Router = home_router
        .merge(make_singles_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, singles_store: Box<dyn SinglesStore>) -> Result<()> {
    let port = config.port;
    let app = make_app(config, singles_store)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{example_single_fields, EXAMPLE_ISRC, EXAMPLE_TITLE};
    use crate::catalog_store::{InMemorySinglesStore, NullSinglesStore};
    use crate::server::RequestsLoggingLevel;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    fn test_config() -> ServerConfig {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            ..ServerConfig::default()
        }
    }

    fn make_test_app() -> Router {
        make_app(test_config(), Box::new(InMemorySinglesStore::new())).unwrap()
    }

    fn example_json() -> Value {
        serde_json::to_value(example_single_fields()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0d 00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 01:01:01");
    }

    #[tokio::test]
    async fn home_reports_stats() {
        let app = make_test_app();
        let (status, body) = send(&app, empty_request("GET", "/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["singles_count"], 0);
        assert!(body["uptime"].is_string());
        assert!(body["hash"].is_string());
    }

    #[tokio::test]
    async fn create_then_read_single() {
        let app = make_test_app();

        let (status, created) = send(&app, json_request("POST", "/singles/", &example_json())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], EXAMPLE_TITLE);
        assert_eq!(created["isrc"], EXAMPLE_ISRC);

        let (status, read) = send(
            &app,
            empty_request("GET", &format!("/singles/{}", EXAMPLE_ISRC)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn create_duplicate_single_conflicts() {
        let app = make_test_app();
        send(&app, json_request("POST", "/singles/", &example_json())).await;

        let (status, body) = send(&app, json_request("POST", "/singles/", &example_json())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "detail": "ISRC already exists" }));
    }

    #[tokio::test]
    async fn create_invalid_single_is_bad_request() {
        let app = make_test_app();
        let mut body = example_json();
        body["isrc"] = json!("invalid");

        let (status, response) = send(&app, json_request("POST", "/singles/", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["detail"].as_str().unwrap().contains("isrc"));

        let (_, listed) = send(&app, empty_request("GET", "/singles/")).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = make_test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/singles/")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());

        let mut wrong_type = example_json();
        wrong_type["genres"] = json!("Pop");
        let (status, _) = send(&app, json_request("POST", "/singles/", &wrong_type)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_single_is_not_found() {
        let app = make_test_app();
        let uri = "/singles/US0000000000";

        let (status, body) = send(&app, empty_request("GET", uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Single not found" }));

        let mut body = example_json();
        body["isrc"] = json!("US0000000000");
        let (status, _) = send(&app, json_request("PUT", uri, &body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, empty_request("DELETE", uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_single() {
        let app = make_test_app();
        send(&app, json_request("POST", "/singles/", &example_json())).await;

        let mut body = example_json();
        body["title"] = json!("Updated Title");
        let uri = format!("/singles/{}", EXAMPLE_ISRC);
        let (status, updated) = send(&app, json_request("PUT", &uri, &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Updated Title");

        let (_, read) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(read["title"], "Updated Title");
    }

    #[tokio::test]
    async fn update_with_mismatching_isrc_is_rejected() {
        let app = make_test_app();
        send(&app, json_request("POST", "/singles/", &example_json())).await;

        let mut body = example_json();
        body["isrc"] = json!("USX9P2400009");
        let uri = format!("/singles/{}", EXAMPLE_ISRC);
        let (status, response) = send(&app, json_request("PUT", &uri, &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "detail": ISRC_MISMATCH }));

        let (_, read) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(read["title"], EXAMPLE_TITLE);
    }

    #[tokio::test]
    async fn delete_single() {
        let app = make_test_app();
        send(&app, json_request("POST", "/singles/", &example_json())).await;

        let uri = format!("/singles/{}", EXAMPLE_ISRC);
        let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn null_store_is_not_implemented() {
        let app = make_app(test_config(), Box::new(NullSinglesStore)).unwrap();

        let (status, _) = send(&app, empty_request("GET", "/singles/")).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, body) = send(&app, empty_request("GET", "/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["singles_count"], Value::Null);
    }
}
