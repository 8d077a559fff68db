use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Entries keyed by the client's identifier, in request-body order.
pub type EntryMap<T> = Vec<(String, T)>;

/// Contact block rendered at the top of the resume. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_text")]
    pub keywords: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient_text")]
    pub project_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_text")]
    pub keywords: String,
}

/// Education record. Accepted by the renderer but not currently rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_text")]
    pub major: String,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: String,
    pub gpa: Option<String>,
    pub coursework: Option<String>,
}

impl JobEntry {
    /// Entries without a usable company name are dropped from the output.
    pub fn is_renderable(&self) -> bool {
        is_present(&self.company_name)
    }
}

impl ProjectEntry {
    pub fn is_renderable(&self) -> bool {
        is_present(&self.project_name)
    }
}

/// Clients send the literal string "null" for cleared fields.
fn is_present(value: &str) -> bool {
    !value.is_empty() && value != "null"
}

/// Text view of an arbitrary JSON value: strings as-is, numbers and bools
/// printed, everything else empty.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Never fails on a well-formed JSON value; see [`text_of`].
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

/// Keeps JSON objects, replaces any other value with an empty mapping.
pub fn lenient_object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Converts a JSON object into typed entries, keeping key order.
/// An entry that is not an object becomes `T::default()`.
pub fn entries_from_map<T>(map: Map<String, Value>) -> EntryMap<T>
where
    T: DeserializeOwned + Default,
{
    map.into_iter()
        .map(|(key, value)| {
            let entry = serde_json::from_value::<T>(value).unwrap_or_default();
            (key, entry)
        })
        .collect()
}
