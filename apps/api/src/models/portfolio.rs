use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A person's profile and project list, the input to every theme renderer.
///
/// Wire names are camelCase to match what the frontend and the enhancement
/// endpoint exchange (`fullName`, `aboutMe`, `projectURL`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProfile {
    pub full_name: String,
    pub professional_title: String,
    pub email: String,
    pub phone: String,
    pub about_me: String,
    /// Comma-separated skill names, split at render time.
    pub skills: String,
    /// Display order is insertion order.
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_name: String,
    #[serde(rename = "projectURL", default)]
    pub project_url: Option<String>,
    pub project_description: String,
    /// Comma-separated, same convention as `PortfolioProfile::skills`.
    pub technologies: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub profile: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublishedPortfolioRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub theme: String,
    pub s3_key: String,
    pub created_at: DateTime<Utc>,
}
