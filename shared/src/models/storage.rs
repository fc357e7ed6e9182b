//! Storage hierarchy models: warehouse > department > shelf > tray

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical warehouse, top of the storage hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A department inside a warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub warehouse: i64,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A shelf inside a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: i64,
    pub department: i64,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A tray inside a shelf, the smallest storage unit materials are placed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tray {
    pub id: i64,
    pub shelf: i64,
    #[serde(default)]
    pub shelf_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    /// Concatenated code of the whole hierarchy, e.g. `ALM-001-DEP-001-EST-001-BAL-001`
    #[serde(default)]
    pub full_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write payload shared by the four hierarchy levels
///
/// `parent` is the id of the containing level and is ignored for warehouses.
#[derive(Debug, Clone, Serialize)]
pub struct StorageNodeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

impl StorageNodeInput {
    pub fn warehouse(name: impl Into<String>) -> Self {
        Self {
            warehouse: None,
            department: None,
            shelf: None,
            name: name.into(),
            code: None,
            location: None,
            description: None,
            is_active: true,
        }
    }

    pub fn department(warehouse: i64, name: impl Into<String>) -> Self {
        Self {
            warehouse: Some(warehouse),
            ..Self::warehouse(name)
        }
    }

    pub fn shelf(department: i64, name: impl Into<String>) -> Self {
        Self {
            department: Some(department),
            ..Self::warehouse(name)
        }
    }

    pub fn tray(shelf: i64, name: impl Into<String>) -> Self {
        Self {
            shelf: Some(shelf),
            ..Self::warehouse(name)
        }
    }
}
