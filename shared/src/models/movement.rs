//! Location-level movement log models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MovementOperation;

/// A recorded movement of stock between trays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialMovement {
    pub id: i64,
    pub material: i64,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default)]
    pub source_location: Option<i64>,
    #[serde(default)]
    pub target_location: Option<i64>,
    pub quantity: i64,
    pub operation: MovementOperation,
    pub timestamp: DateTime<Utc>,
    pub user: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub material_control: Option<i64>,
}

/// Payload for recording a movement
#[derive(Debug, Clone, Serialize)]
pub struct NewMaterialMovement {
    pub material: i64,
    pub operation: MovementOperation,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
