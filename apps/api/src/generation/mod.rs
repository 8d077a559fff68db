// Resume generation: the HTML resume endpoint and keyword → STAR content generation.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
