//! Shared document shell and fragment helpers used by every theme.

use crate::models::portfolio::Project;
use crate::render::formatters::split_labels;

/// The single external asset a rendered document depends on.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Wraps a rendered `<body>` in a complete standalone document with the
/// theme's inline stylesheet.
pub fn html_document(full_name: &str, stylesheet: &str, body_class: &str, body: &str) -> String {
    let mut html = String::with_capacity(stylesheet.len() + body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\" />\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    html.push_str(&format!("    <title>{full_name} - Portfolio</title>\n"));
    html.push_str(&format!("    <script src=\"{TAILWIND_CDN}\"></script>\n"));
    html.push_str("    <style>\n");
    html.push_str(stylesheet);
    html.push_str("    </style>\n</head>\n");
    html.push_str(&format!("<body class=\"{body_class}\">\n"));
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

/// One `<span>` chip per label of a comma-separated field. Empty labels still
/// produce an (empty) chip.
pub fn chips(raw: &str, class: &str) -> String {
    split_labels(raw)
        .into_iter()
        .map(|label| format!("<span class=\"{class}\">{label}</span>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenates one card per project, in input order.
pub fn project_grid<F>(projects: &[Project], card: F) -> String
where
    F: Fn(&Project) -> String,
{
    projects.iter().map(card).collect()
}
