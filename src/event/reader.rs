use super::super::error::Error;

use serde::{Deserialize, Serialize};

const JSON_SUFFIX: &str = ".json";

/// Bundled event type configurations, keyed by file name.
const CONFIG_FILES: &[(&str, &str)] = &[
    ("bowel_movement.json", include_str!("types/bowel_movement.json")),
    ("medication.json", include_str!("types/medication.json")),
    ("shower.json", include_str!("types/shower.json")),
    ("urination.json", include_str!("types/urination.json")),
    ("weight.json", include_str!("types/weight.json")),
];

/// Display and validation metadata of an event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(rename = "type")]
    pub event_type: String,
    pub icon: String,
    pub color: ColorConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
}

/// The measurement an event of this type carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    pub name: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(rename = "type")]
    pub graph_type: String,
    pub title: String,
}

/// Return the configuration of the event type.
///
/// The lookup ignores case and treats spaces as underscores, so `"Bowel Movement"`
/// resolves to `bowel_movement.json`.
pub fn read_event_config(event_type: &str) -> Result<EventConfig, Error> {
    let name = prepare_file_name(event_type);

    CONFIG_FILES
        .iter()
        .find(|(file, _)| *file == name)
        .ok_or_else(|| Error::UnknownEventType(event_type.to_string()))
        .and_then(|&(file, content)| parse(file, content))
}

/// Return every bundled event type configuration.
pub fn all_configs() -> Result<Vec<EventConfig>, Error> {
    CONFIG_FILES
        .iter()
        .map(|&(file, content)| parse(file, content))
        .collect()
}

fn prepare_file_name(event_type: &str) -> String {
    let prepared = event_type.to_lowercase().replace(' ', "_");
    format!("{prepared}{JSON_SUFFIX}")
}

fn parse(file: &'static str, content: &str) -> Result<EventConfig, Error> {
    serde_json::from_str(content).map_err(|source| Error::InvalidEventConfig { file, source })
}
