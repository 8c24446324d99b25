//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use folio_app::ports::{DocumentStore, UploadStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api`, pass-through static serving of
/// `upload_dir` under `/uploads`, and a `/health` liveness route.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive CORS
/// layer for the browser frontend.
pub fn build<DS, US>(state: AppState<DS, US>, upload_dir: impl AsRef<Path>) -> Router
where
    DS: DocumentStore + Send + Sync + 'static,
    US: UploadStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use folio_app::services::resource_service::ResourceService;
    use folio_app::services::upload_service::UploadService;
    use folio_domain::error::FolioError;
    use folio_domain::resource::ResourceName;
    use serde_json::Value;
    use std::future::Future;
    use tower::ServiceExt;

    struct StubDocumentStore;
    struct StubUploadStore;

    impl DocumentStore for StubDocumentStore {
        fn load(
            &self,
            _name: ResourceName,
        ) -> impl Future<Output = Result<Option<Value>, FolioError>> + Send {
            async { Ok(None) }
        }

        fn save(
            &self,
            _name: ResourceName,
            _document: &Value,
        ) -> impl Future<Output = Result<(), FolioError>> + Send {
            async { Ok(()) }
        }
    }

    impl UploadStore for StubUploadStore {
        fn store(
            &self,
            extension: &str,
            _bytes: Vec<u8>,
        ) -> impl Future<Output = Result<String, FolioError>> + Send {
            let name = format!("stub{extension}");
            async { Ok(name) }
        }

        fn remove(
            &self,
            _file_name: &str,
        ) -> impl Future<Output = Result<bool, FolioError>> + Send {
            async { Ok(false) }
        }
    }

    fn test_app() -> Router {
        let state = AppState::new(
            ResourceService::new(StubDocumentStore),
            UploadService::new(StubUploadStore),
            "http://localhost:5000",
        );
        build(state, "uploads")
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_route_known_resource() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/skills")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_resource() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/blog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_non_numeric_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/skills/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
