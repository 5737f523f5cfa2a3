use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{
    delete_file, download_file, health_check, list_files, list_project_files, upload_file,
    upload_project,
};
use crate::ports::services::FileService;

/// Default per-request deadline; a hung backend call aborts the request
/// instead of hanging the client.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Uploads larger than this are rejected before reaching the service.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub file_service: Arc<dyn FileService>,
}

/// Create the application router with the default request timeout.
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

/// Create the application router with an explicit request timeout.
pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Single-file operations; the wildcard keeps '/' usable in keys.
        .route("/files", get(list_files))
        .route(
            "/files/{*key}",
            put(upload_file).get(download_file).delete(delete_file),
        )
        // Project-scoped multi-file uploads.
        .route("/projects", post(upload_project))
        .route("/projects/{project_id}/files", get(list_project_files))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::storage::ObjectStoreAdapter,
        services::{FileServiceImpl, RetryPolicy},
    };
    use axum_test::TestServer;
    use object_store::memory::InMemory;

    fn create_test_app_state() -> AppState {
        let store = Arc::new(ObjectStoreAdapter::new(Arc::new(InMemory::new())));
        let file_service = FileServiceImpl::new(store).with_retry_policy(RetryPolicy::none());
        AppState {
            file_service: Arc::new(file_service),
        }
    }

    #[tokio::test]
    async fn test_router_serves_health() {
        let server = TestServer::new(create_router(create_test_app_state())).unwrap();
        let response = server.get("/health").await;
        response.assert_status_ok();
    }
}
