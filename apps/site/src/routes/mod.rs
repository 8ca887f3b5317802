pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_index))
        .route("/index.html", get(pages::handle_index))
        .route("/api/v1/portfolio", get(pages::handle_portfolio))
        .route("/api/v1/portfolio/links", get(pages::handle_link_report))
        .fallback(pages::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::content::portfolio;
    use crate::render::RenderOptions;

    fn make_state() -> AppState {
        AppState::build(portfolio(), &RenderOptions { year: 2026 }).unwrap()
    }

    fn make_router() -> Router {
        build_router(make_state())
    }

    async fn get_path(path: &str) -> Response {
        make_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let resp = get_path("/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = body_string(resp).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<section id=\"skills\""));
    }

    #[tokio::test]
    async fn test_index_serves_prerendered_page() {
        let state = make_state();
        let resp = build_router(state.clone())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes, state.page);
    }

    #[tokio::test]
    async fn test_index_html_alias_matches_root() {
        let root = body_string(get_path("/").await).await;
        let alias = body_string(get_path("/index.html").await).await;
        assert_eq!(root, alias);
    }

    #[tokio::test]
    async fn test_portfolio_json_keeps_order() {
        let resp = get_path("/api/v1/portfolio").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["skills"][0]["name"], "Languages");
        assert_eq!(json["skills"][0]["skills"][2], "Java");
        assert_eq!(json["experience"][0]["role"], "Graduate Research Assistant");
        assert_eq!(json["hero_links"][0]["kind"], "email");
    }

    #[tokio::test]
    async fn test_link_report_passes() {
        let resp = get_path("/api/v1/portfolio/links").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["passed"], true);
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let resp = get_path("/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "portfolio-site");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let resp = get_path("/resume.pdf").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/resume.pdf"));
    }
}
