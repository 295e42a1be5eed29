// Prompt constants for the enhancement endpoints.
// `RESUME_PROMPT` has one placeholder, substituted with `str::replace`.

/// System prompt shared by both rewrites. Plain text out.
pub const REWRITE_SYSTEM: &str = "You are an expert career writing assistant for software developers. \
    You rewrite text supplied by the user. \
    Respond with the rewritten text only. \
    Do NOT add introductory phrases, explanations, or closing remarks. \
    Do NOT invent facts that are not present in the original text.";

/// Project description rewrite. Both fields are inserted in a single pass, so
/// braces inside user text are never read as placeholders.
pub fn project_description_prompt(technologies: &str, description: &str) -> String {
    format!(
        "Rewrite the following project description to be more professional, concise, and results-oriented. \
Focus on the technical challenges, the solutions implemented, and the impact of the project. \
Use strong, active verbs. The technologies used were: {technologies}.

--- START OF DESCRIPTION ---
{description}
--- END OF DESCRIPTION ---

Your response must contain ONLY the rewritten project description and nothing else."
    )
}

/// Resume rewrite. Replace `{resume_text}`.
pub const RESUME_PROMPT: &str = "Rewrite the following resume text to be more impactful, professional, and friendly to Applicant Tracking Systems (ATS). \
Focus on using strong action verbs, quantifying achievements with numbers where the original provides them, and ensuring a clean, readable format in markdown. \
Maintain a professional tone.

--- START OF RESUME ---
{resume_text}
--- END OF RESUME ---

Your response must contain ONLY the rewritten resume text in markdown format and nothing else.";
