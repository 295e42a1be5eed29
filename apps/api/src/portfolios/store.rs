use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{PortfolioProfile, PortfolioRow};

/// A saved profile decoded back into its typed shape.
#[derive(Debug, Clone, Serialize)]
pub struct StoredPortfolio {
    pub id: Uuid,
    pub profile: PortfolioProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PortfolioRow> for StoredPortfolio {
    type Error = AppError;

    fn try_from(row: PortfolioRow) -> Result<Self, Self::Error> {
        let profile = serde_json::from_value(row.profile).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Stored portfolio {} is malformed: {e}", row.id))
        })?;
        Ok(StoredPortfolio {
            id: row.id,
            profile,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn profile_json(profile: &PortfolioProfile) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))
}

/// Stores a profile under a fresh identifier.
pub async fn save_portfolio(
    pool: &PgPool,
    profile: &PortfolioProfile,
) -> Result<StoredPortfolio, AppError> {
    let id = Uuid::new_v4();
    let row = sqlx::query_as::<_, PortfolioRow>(
        "INSERT INTO portfolios (id, profile) VALUES ($1, $2) RETURNING *",
    )
    .bind(id)
    .bind(profile_json(profile)?)
    .fetch_one(pool)
    .await?;

    info!("Saved portfolio {id} for '{}'", profile.full_name);
    row.try_into()
}

pub async fn get_portfolio(pool: &PgPool, id: Uuid) -> Result<StoredPortfolio, AppError> {
    sqlx::query_as::<_, PortfolioRow>("SELECT * FROM portfolios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {id} not found")))?
        .try_into()
}

/// Replaces the stored profile wholesale.
pub async fn update_portfolio(
    pool: &PgPool,
    id: Uuid,
    profile: &PortfolioProfile,
) -> Result<StoredPortfolio, AppError> {
    let row = sqlx::query_as::<_, PortfolioRow>(
        r#"
        UPDATE portfolios
        SET profile = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(profile_json(profile)?)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Portfolio {id} not found")))?;

    info!("Updated portfolio {id}");
    row.try_into()
}
