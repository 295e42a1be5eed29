use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::enhance::enhancer::ProfileEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// Pluggable enhancer. LLM-backed unless ENABLE_AI_ENHANCEMENT=false.
    pub enhancer: Arc<dyn ProfileEnhancer>,
}
