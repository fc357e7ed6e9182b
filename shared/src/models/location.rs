//! Material-to-tray allocation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock of one material physically assigned to one tray
///
/// The `*_name` fields are read-only display fields the backend denormalizes
/// into the serializer; they are absent on write payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLocation {
    pub id: i64,
    pub material: i64,
    pub tray: i64,
    pub quantity: i64,
    pub minimum_quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default)]
    pub tray_name: Option<String>,
    #[serde(default)]
    pub shelf_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub tray_full_code: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MaterialLocation {
    /// Human-readable path, `Warehouse > Department > Shelf > Tray`
    pub fn full_path(&self) -> String {
        [
            self.warehouse_name.as_deref(),
            self.department_name.as_deref(),
            self.shelf_name.as_deref(),
            self.tray_name.as_deref(),
        ]
        .iter()
        .map(|part| part.unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" > ")
    }

    /// Whether the allocation sits at or below its configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_quantity
    }
}

/// Payload for creating an allocation
#[derive(Debug, Clone, Serialize)]
pub struct NewMaterialLocation {
    pub material: i64,
    pub tray: i64,
    pub quantity: i64,
    pub minimum_quantity: i64,
}

/// Payload for updating an allocation
///
/// The backend requires every writable field, so updates resend material and
/// tray unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialLocationUpdate {
    pub material: i64,
    pub tray: i64,
    pub quantity: i64,
    pub minimum_quantity: i64,
}

impl MaterialLocationUpdate {
    /// Build an update that changes only the quantity of an existing record
    pub fn resize(location: &MaterialLocation, quantity: i64) -> Self {
        Self {
            material: location.material,
            tray: location.tray,
            quantity,
            minimum_quantity: location.minimum_quantity,
        }
    }
}
