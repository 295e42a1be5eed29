//! Profile enhancement: trait-based rewriting of profile text.
//!
//! Default: `LlmProfileEnhancer` rewrites each project description via Claude.
//! `VerbatimEnhancer` returns profiles unchanged (ENABLE_AI_ENHANCEMENT=false).
//!
//! `AppState` holds an `Arc<dyn ProfileEnhancer>`, chosen at startup from config.

use async_trait::async_trait;
use tracing::info;

use crate::enhance::prompts::{project_description_prompt, REWRITE_SYSTEM, RESUME_PROMPT};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::portfolio::{PortfolioProfile, Project};

/// Implement this to swap enhancement backends without touching handlers.
#[async_trait]
pub trait ProfileEnhancer: Send + Sync {
    /// Returns an enhanced copy of the profile with the same wire shape.
    async fn enhance(&self, profile: PortfolioProfile) -> Result<PortfolioProfile, AppError>;

    /// Rewrites extracted resume text.
    async fn enhance_resume(&self, resume_text: &str) -> Result<String, AppError>;

    /// "llm" | "verbatim"
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmProfileEnhancer
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites project descriptions one project at a time, in display order.
/// Every other field passes through untouched. A single failed call fails the
/// whole enhancement.
pub struct LlmProfileEnhancer(pub LlmClient);

#[async_trait]
impl ProfileEnhancer for LlmProfileEnhancer {
    async fn enhance(&self, mut profile: PortfolioProfile) -> Result<PortfolioProfile, AppError> {
        for (index, project) in profile.projects.iter_mut().enumerate() {
            let prompt = build_project_prompt(project);
            let rewritten = self
                .0
                .complete(&prompt, REWRITE_SYSTEM)
                .await
                .map_err(|e| {
                    AppError::Llm(format!(
                        "Project {} ('{}') enhancement failed: {e}",
                        index + 1,
                        project.project_name
                    ))
                })?;
            project.project_description = rewritten;
        }

        info!(
            "Enhanced {} project descriptions for '{}'",
            profile.projects.len(),
            profile.full_name
        );
        Ok(profile)
    }

    async fn enhance_resume(&self, resume_text: &str) -> Result<String, AppError> {
        let prompt = RESUME_PROMPT.replace("{resume_text}", resume_text);
        self.0
            .complete(&prompt, REWRITE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume enhancement failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// VerbatimEnhancer
// ────────────────────────────────────────────────────────────────────────────

/// Returns input unchanged. Used when AI enhancement is switched off.
pub struct VerbatimEnhancer;

#[async_trait]
impl ProfileEnhancer for VerbatimEnhancer {
    async fn enhance(&self, profile: PortfolioProfile) -> Result<PortfolioProfile, AppError> {
        Ok(profile)
    }

    async fn enhance_resume(&self, resume_text: &str) -> Result<String, AppError> {
        Ok(resume_text.to_string())
    }

    fn backend(&self) -> &'static str {
        "verbatim"
    }
}

pub fn build_project_prompt(project: &Project) -> String {
    project_description_prompt(&project.technologies, &project.project_description)
}
