use std::sync::Arc;

use axum::body::Bytes;

use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::render::{render_page, RenderOptions};
use crate::validation::{check_portfolio, LinkReport};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything is computed once in `build` and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    /// The rendered HTML document. Cloning shares the buffer.
    pub page: Bytes,
    pub links: Arc<LinkReport>,
}

impl AppState {
    pub fn build(portfolio: Portfolio, options: &RenderOptions) -> Result<Self, AppError> {
        let html = render_page(&portfolio, options)?;
        let links = check_portfolio(&portfolio, &html);

        Ok(AppState {
            portfolio: Arc::new(portfolio),
            page: Bytes::from(html),
            links: Arc::new(links),
        })
    }
}
