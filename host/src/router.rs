use std::path::Path;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

async fn healthz() -> &'static str {
    "ok"
}

/// Static host for the built frontend.
///
/// Paths with no matching file get `index.html` with a 200 so the client
/// router can resolve `/birthday` and its not-found page.
pub fn router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let static_files = ServeDir::new(dist_dir).fallback(index);

    // html2canvas re-fetches images with CORS when rasterizing cards
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD]);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt; // for `oneshot`

    const INDEX: &str = "<!DOCTYPE html><html><body>birthday</body></html>";

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let dir = dist();
        let (status, body) = get_body(router(dir.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dir = dist();
        let (status, body) = get_body(router(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_deep_link_falls_back_to_index() {
        let dir = dist();
        let (status, body) = get_body(router(dir.path()), "/birthday").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);

        let (status, body) = get_body(router(dir.path()), "/no/such/page").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let dir = dist();
        let (status, body) = get_body(router(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");
    }
}
