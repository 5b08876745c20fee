use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    On,
    Off,
}

impl AdStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "on" => Some(AdStatus::On),
            "off" => Some(AdStatus::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub title: String,
    pub link: String,
    pub banner: String,
    pub status: AdStatus,
}
