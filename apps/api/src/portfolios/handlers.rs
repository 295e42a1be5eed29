//! Axum route handlers for portfolio persistence, rendering and publishing.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioProfile;
use crate::portfolios::publish::{publish_portfolio, HTML_CONTENT_TYPE};
use crate::portfolios::store::{get_portfolio, save_portfolio, update_portfolio, StoredPortfolio};
use crate::render::{render_portfolio, render_with_theme, RenderContext, Theme};
use crate::state::AppState;

const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"portfolio.html\"";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Unknown or missing keys render the default theme.
    pub theme: Option<String>,
    #[serde(default)]
    pub download: bool,
}

impl RenderQuery {
    fn theme_key(&self) -> &str {
        self.theme.as_deref().unwrap_or_default()
    }

    fn theme(&self) -> Theme {
        Theme::from_key(self.theme_key())
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeInfo {
    pub key: Theme,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatePortfolioResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub portfolio_id: Uuid,
    pub theme: String,
    pub s3_key: String,
    pub published_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<Vec<ThemeInfo>> {
    Json(
        Theme::ALL
            .into_iter()
            .map(|key| ThemeInfo {
                key,
                is_default: key == Theme::default(),
            })
            .collect(),
    )
}

/// POST /api/v1/portfolio/render?theme=&download=
///
/// Renders the posted profile without storing it. Used for in-app preview
/// and direct download.
pub async fn handle_render_preview(
    Query(query): Query<RenderQuery>,
    Json(profile): Json<PortfolioProfile>,
) -> Response {
    let html = render_portfolio(query.theme_key(), &profile, &current_render_context());
    info!(
        "Rendered preview with theme key '{}' ({} bytes)",
        query.theme_key(),
        html.len()
    );
    html_response(html, query.download)
}

/// POST /api/v1/portfolios
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    Json(profile): Json<PortfolioProfile>,
) -> Result<(StatusCode, Json<CreatePortfolioResponse>), AppError> {
    let stored = save_portfolio(&state.db, &profile).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePortfolioResponse {
            id: stored.id,
            created_at: stored.created_at,
        }),
    ))
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredPortfolio>, AppError> {
    Ok(Json(get_portfolio(&state.db, id).await?))
}

/// PUT /api/v1/portfolios/:id
pub async fn handle_update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<PortfolioProfile>,
) -> Result<Json<StoredPortfolio>, AppError> {
    Ok(Json(update_portfolio(&state.db, id, &profile).await?))
}

/// GET /api/v1/portfolios/:id/render?theme=&download=
pub async fn handle_render_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Response, AppError> {
    let stored = get_portfolio(&state.db, id).await?;
    let html = render_with_theme(query.theme(), &stored.profile, &current_render_context());
    Ok(html_response(html, query.download))
}

/// POST /api/v1/portfolios/:id/publish?theme=
pub async fn handle_publish_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<PublishResponse>, AppError> {
    let published = publish_portfolio(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        id,
        query.theme(),
        &current_render_context(),
    )
    .await?;

    Ok(Json(PublishResponse {
        portfolio_id: published.portfolio_id,
        theme: published.theme,
        s3_key: published.s3_key,
        published_at: published.created_at,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// The copyright year is the only time-dependent input to rendering.
fn current_render_context() -> RenderContext {
    RenderContext::new(Utc::now().year())
}

fn html_response(html: String, download: bool) -> Response {
    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        html,
    )
        .into_response();
    if download {
        response.headers_mut().insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(DOWNLOAD_DISPOSITION),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolios::publish::DOCUMENT_FILENAME;

    #[test]
    fn test_download_disposition_names_document() {
        assert!(DOWNLOAD_DISPOSITION.contains(DOCUMENT_FILENAME));
    }

    #[test]
    fn test_html_response_headers() {
        let inline = html_response("<!DOCTYPE html>".into(), false);
        assert_eq!(inline.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
        assert!(inline.headers().get(header::CONTENT_DISPOSITION).is_none());

        let download = html_response("<!DOCTYPE html>".into(), true);
        assert_eq!(
            download.headers()[header::CONTENT_DISPOSITION],
            DOWNLOAD_DISPOSITION
        );
    }

    #[test]
    fn test_render_query_theme_fallback() {
        assert_eq!(RenderQuery::default().theme(), Theme::Minimalist);
        let query = RenderQuery {
            theme: Some("creative".into()),
            download: false,
        };
        assert_eq!(query.theme(), Theme::Creative);
        let query = RenderQuery {
            theme: Some("neon".into()),
            download: false,
        };
        assert_eq!(query.theme(), Theme::Minimalist);
    }

    #[test]
    fn test_render_context_uses_current_year() {
        assert_eq!(current_render_context().copyright_year, Utc::now().year());
    }
}
