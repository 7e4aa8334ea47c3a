//! On-disk shape of the user store.
//!
//! Records keep any attribute they do not model in `extra`, so a load/save
//! cycle never drops data written by other tools.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub password: String,
    #[serde(default)]
    pub visits: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(default)]
    pub husband_name: String,
    #[serde(default)]
    pub wife_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub marriage_place: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
