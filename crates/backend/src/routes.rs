use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
///
/// Every KPI route is mounted under `/api` and at the root path.
pub fn configure_routes() -> Router {
    let kpi = Router::new()
        .route("/check-kpi", get(handlers::d410_kpi_check::check_kpi))
        .route("/kpi-config", get(handlers::d411_kpi_config::get_config))
        .route(
            "/kpi-v2",
            get(handlers::d412_kpi_v2::get_kpi_v2).post(handlers::d412_kpi_v2::post_kpi_v2),
        )
        .route("/input", post(handlers::d413_kpi_input::compare_input))
        .route("/chat", post(handlers::chat::echo));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", kpi.clone())
        .merge(kpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let response = configure_routes()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_echo_on_both_prefixes() {
        for path in ["/api/chat", "/chat"] {
            let request = Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message":"xin chào"}"#))
                .unwrap();
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["reply"], "xin chào");
        }
    }

    #[tokio::test]
    async fn test_check_kpi_requires_date() {
        let (status, body) =
            send(Request::get("/api/check-kpi").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "MISSING_DATE");
    }

    #[tokio::test]
    async fn test_kpi_v2_requires_date() {
        let request = Request::post("/kpi-v2")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"date":"  "}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "MISSING_DATE");
    }

    // Without a configured spreadsheet every sheet-backed endpoint fails as a 500
    #[tokio::test]
    async fn test_kpi_config_error_body() {
        for uri in ["/api/kpi-config", "/kpi-config?list=1"] {
            let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["ok"], false);
            assert_eq!(body["error"], "KPI_CONFIG_ERROR");
            assert!(body["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_input_error_body() {
        let (status, body) =
            send(Request::post("/api/input").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "INPUT_COMPARE_ERROR");
    }
}
