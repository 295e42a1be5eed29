//! Portfolio document rendering: turns a `PortfolioProfile` into a complete,
//! self-contained HTML document in one of a closed set of themes.
//!
//! Rendering is a pure function of (profile, theme, copyright year). The year
//! is carried in `RenderContext` so callers decide what "now" means.
//!
//! User text is interpolated without HTML escaping; the byte-for-byte output
//! depends on it. Escaping belongs at the formatter boundary once the output
//! contract is allowed to change.

pub mod creative;
pub mod document;
pub mod formatters;
pub mod minimalist;
pub mod tech;

use std::fmt;

use serde::Serialize;

use crate::models::portfolio::PortfolioProfile;

/// Values a render pass needs that do not come from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub copyright_year: i32,
}

impl RenderContext {
    pub fn new(copyright_year: i32) -> Self {
        Self { copyright_year }
    }
}

/// Signature shared by every theme renderer.
pub type ThemeRenderer = fn(&PortfolioProfile, &RenderContext) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimalist,
    Tech,
    Creative,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Minimalist, Theme::Tech, Theme::Creative];

    /// Resolves a theme key. Unknown keys fall back to the default theme so a
    /// render request always produces a document.
    pub fn from_key(key: &str) -> Theme {
        match key.trim().to_ascii_lowercase().as_str() {
            "minimalist" => Theme::Minimalist,
            "tech" => Theme::Tech,
            "creative" => Theme::Creative,
            _ => Theme::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Minimalist => "minimalist",
            Theme::Tech => "tech",
            Theme::Creative => "creative",
        }
    }

    pub fn renderer(self) -> ThemeRenderer {
        match self {
            Theme::Minimalist => minimalist::render,
            Theme::Tech => tech::render,
            Theme::Creative => creative::render,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `profile` with an already-resolved theme.
pub fn render_with_theme(theme: Theme, profile: &PortfolioProfile, ctx: &RenderContext) -> String {
    (theme.renderer())(profile, ctx)
}

/// Entry point for callers holding a raw theme key.
pub fn render_portfolio(theme_key: &str, profile: &PortfolioProfile, ctx: &RenderContext) -> String {
    render_with_theme(Theme::from_key(theme_key), profile, ctx)
}
