//! Material catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock-tracked material
///
/// `quantity` is the authoritative total, independent of how much of it has
/// been assigned to trays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
}

/// Payload for creating a material
#[derive(Debug, Clone, Serialize)]
pub struct NewMaterial {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
}

/// Payload for updating a material
///
/// `operation` and `quantity_change` ride along for the audit log when the
/// total stock moved; plain renames leave them unset.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialUpdate {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<crate::StockOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_change: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<crate::StockReason>,
}
