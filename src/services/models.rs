//! Device and facility shapes referenced by batches
//!
//! Only the fields batches need are modelled. Sub-resources that were not
//! expanded with `include` decode with just their `href` set.

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Data center facility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

/// Provisioned device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

/// Request body for creating a device
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceCreateRequest {
    pub hostname: String,
    pub plan: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facility: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub metro: String,
    pub operating_system: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_cycle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub userdata: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ipxe_script_url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub always_pxe: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hardware_reservation_id: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spot_instance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_time: Option<Timestamp>,
}
