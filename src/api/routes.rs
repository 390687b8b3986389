//! HTTP route definitions.

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{health, index, AppState};
use crate::config::Config;

/// Create the application router.
///
/// Whether static assets are mapped is decided here, once, from the build
/// directory's existence at construction time. The `/` and `/health` routes
/// re-check the filesystem per request regardless.
pub fn create_router(config: &Config) -> Router {
    let state = AppState::new(config.clone());

    let router = Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .with_state(state);

    let router = if config.build_exists() {
        info!("serving built interface from {}", config.dist_dir.display());
        let assets = ServeDir::new(&config.dist_dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(config.index_path()));
        router.fallback_service(assets)
    } else {
        info!(
            "build output {} not found, unmatched paths will 404",
            config.dist_dir.display()
        );
        router
    };

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_missing_build() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        let app = create_router(&config);

        let response = app.oneshot(request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "online");
        assert_eq!(body["system"], "J.A.R.V.I.S.");
        assert_eq!(body["build_exists"], false);
    }

    #[tokio::test]
    async fn health_reports_existing_build() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        std::fs::create_dir_all(&config.dist_dir).unwrap();
        let app = create_router(&config);

        let response = app.oneshot(request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["build_exists"], true);
    }

    #[tokio::test]
    async fn root_serves_recovery_page_without_build() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        let app = create_router(&config);

        let response = app.oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("SYSTEM_INITIALIZING"));
        assert!(body.contains("RETRY_CONNECTION"));
    }

    #[tokio::test]
    async fn root_serves_entry_file_bytes_exactly() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        std::fs::create_dir_all(&config.dist_dir).unwrap();
        std::fs::write(config.index_path(), "<html>OK</html>").unwrap();
        let app = create_router(&config);

        let response = app.oneshot(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<html>OK</html>");
    }

    #[tokio::test]
    async fn assets_are_served_from_build_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        std::fs::create_dir_all(&config.dist_dir).unwrap();
        std::fs::write(config.index_path(), "<html>OK</html>").unwrap();
        std::fs::write(config.dist_dir.join("app.js"), "console.log(1);").unwrap();
        let app = create_router(&config);

        let response = app.oneshot(request("/app.js")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log(1);");
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_entry_file() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        std::fs::create_dir_all(&config.dist_dir).unwrap();
        std::fs::write(config.index_path(), "<html>OK</html>").unwrap();
        let app = create_router(&config);

        let response = app.oneshot(request("/no/such/route")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<html>OK</html>");
    }

    #[tokio::test]
    async fn unknown_path_is_404_without_build() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::with_root(root.path(), 8000);
        let app = create_router(&config);

        let response = app.oneshot(request("/no/such/route")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
