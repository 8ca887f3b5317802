use axum::{body::Bytes, extract::State, http::Uri, response::Html, Json};

use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::state::AppState;
use crate::validation::LinkReport;

/// GET / and GET /index.html
pub async fn handle_index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page.clone())
}

/// GET /api/v1/portfolio
pub async fn handle_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/v1/portfolio/links
pub async fn handle_link_report(State(state): State<AppState>) -> Json<LinkReport> {
    Json(state.links.as_ref().clone())
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
