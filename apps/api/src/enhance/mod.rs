// AI enhancement of portfolio and resume text.
// All model calls go through llm_client via the ProfileEnhancer backends.

pub mod enhancer;
pub mod extract;
pub mod handlers;
pub mod prompts;
