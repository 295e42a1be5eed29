//! Publishing: renders a saved portfolio and uploads the standalone
//! `portfolio.html` to object storage.

use aws_sdk_s3::primitives::ByteStream;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::PublishedPortfolioRow;
use crate::portfolios::store::get_portfolio;
use crate::render::{render_with_theme, RenderContext, Theme};

/// Filename used for downloads and for published objects.
pub const DOCUMENT_FILENAME: &str = "portfolio.html";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn published_key(portfolio_id: Uuid, theme: Theme) -> String {
    format!("portfolios/{portfolio_id}/{theme}/{DOCUMENT_FILENAME}")
}

/// Renders the stored profile with `theme`, uploads it, and records the upload.
/// Re-publishing the same theme overwrites the object and adds a new record.
pub async fn publish_portfolio(
    pool: &PgPool,
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    portfolio_id: Uuid,
    theme: Theme,
    ctx: &RenderContext,
) -> Result<PublishedPortfolioRow, AppError> {
    let stored = get_portfolio(pool, portfolio_id).await?;
    let html = render_with_theme(theme, &stored.profile, ctx);

    let s3_key = published_key(portfolio_id, theme);
    s3.put_object()
        .bucket(s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(html.into_bytes()))
        .content_type(HTML_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Upload of {s3_key} failed: {e}")))?;

    info!("Published portfolio {portfolio_id} to s3://{s3_bucket}/{s3_key}");

    let row = sqlx::query_as::<_, PublishedPortfolioRow>(
        r#"
        INSERT INTO published_portfolios (id, portfolio_id, theme, s3_key)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(portfolio_id)
    .bind(theme.as_str())
    .bind(&s3_key)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_key_layout() {
        let id = Uuid::nil();
        assert_eq!(
            published_key(id, Theme::Creative),
            "portfolios/00000000-0000-0000-0000-000000000000/creative/portfolio.html"
        );
    }

    #[test]
    fn test_published_key_differs_per_theme() {
        let id = Uuid::new_v4();
        assert_ne!(published_key(id, Theme::Tech), published_key(id, Theme::Minimalist));
    }
}
