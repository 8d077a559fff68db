//! Content generation — turns terse keyword input into a STAR-format description.
//!
//! Flow: STAR system prompt + user input → completion provider → strip fences →
//!       slice the outer JSON object → parse. Anything unparseable becomes the
//!       fixed fallback description, so callers always get an object back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::generation::prompts::{FALLBACK_DESCRIPTION, STAR_SYSTEM};
use crate::llm_client::{extract_json_object, CompletionProvider};

/// Placeholder entry returned when the model output is not a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackDescription {
    pub title: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
}

impl Default for FallbackDescription {
    fn default() -> Self {
        Self {
            title: "Project".to_string(),
            position: "Team Member".to_string(),
            duration: "Recent".to_string(),
            description: FALLBACK_DESCRIPTION.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    /// The JSON object the model produced.
    Parsed(Map<String, Value>),
    Fallback(FallbackDescription),
}

impl GeneratedContent {
    pub fn is_fallback(&self) -> bool {
        matches!(self, GeneratedContent::Fallback(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            GeneratedContent::Parsed(map) => Value::Object(map),
            GeneratedContent::Fallback(fallback) => {
                serde_json::to_value(fallback).unwrap_or_default()
            }
        }
    }
}

#[derive(Clone)]
pub struct ContentGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, user_input: &str) -> GeneratedContent {
        let raw = self
            .provider
            .complete_or_fallback(STAR_SYSTEM, user_input)
            .await;

        match parse_generated(&raw) {
            Some(map) => {
                info!("Generated description with {} fields", map.len());
                GeneratedContent::Parsed(map)
            }
            None => {
                warn!(
                    "Model output was not a JSON object, using fallback: {:?}",
                    raw.chars().take(80).collect::<String>()
                );
                GeneratedContent::Fallback(FallbackDescription::default())
            }
        }
    }
}

fn parse_generated(raw: &str) -> Option<Map<String, Value>> {
    let json = extract_json_object(raw)?;
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            warn!("JSON parsing error: {e}");
            None
        }
    }
}
