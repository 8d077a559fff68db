// LLM prompt constants for the Generation module.

/// System prompt for keyword → STAR description generation.
pub const STAR_SYSTEM: &str = "You are an AI resume generator. \
    You will generate detailed professional descriptions based on the provided keywords using STAR methodology \
    (Situation, Task, Action, Result). Your output should be in JSON format with fields for position, \
    duration, and detailed descriptions that include quantifiable results whenever possible.";

/// Description lines used when the model output cannot be parsed.
pub const FALLBACK_DESCRIPTION: [&str; 3] = [
    "Contributed to project development and implementation.",
    "Participated in team collaboration and coordination.",
    "Applied skills to meet project objectives and goals.",
];
