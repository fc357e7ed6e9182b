//! Wire enums shared across the console
//!
//! The backend serializes these as uppercase Spanish-legacy codes; keep the
//! serde renames in sync with the server's choices.

use serde::{Deserialize, Serialize};

/// Direction of a total-stock mutation as recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "REMOVE")]
    Remove,
}

impl StockOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockOperation::Add => "ADD",
            StockOperation::Remove => "REMOVE",
        }
    }
}

/// Reason attached to a stock mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockReason {
    #[serde(rename = "COMPRA")]
    Purchase,
    #[serde(rename = "VENTA")]
    Sale,
    #[serde(rename = "RETIRADA")]
    Withdrawal,
    #[serde(rename = "USO")]
    ReportUsage,
    #[serde(rename = "DEVOLUCION")]
    Return,
    #[serde(rename = "TRASLADO")]
    Transfer,
    #[serde(rename = "CUADRE")]
    Reconciliation,
}

impl StockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockReason::Purchase => "COMPRA",
            StockReason::Sale => "VENTA",
            StockReason::Withdrawal => "RETIRADA",
            StockReason::ReportUsage => "USO",
            StockReason::Return => "DEVOLUCION",
            StockReason::Transfer => "TRASLADO",
            StockReason::Reconciliation => "CUADRE",
        }
    }

    /// Reasons a user may pick when increasing total stock
    pub fn is_addition_reason(&self) -> bool {
        matches!(self, StockReason::Purchase | StockReason::Return)
    }

    /// Reasons a user may pick when decreasing total stock
    pub fn is_subtraction_reason(&self) -> bool {
        matches!(self, StockReason::Sale | StockReason::Withdrawal)
    }
}

/// Operation of a location-level movement record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementOperation {
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "REMOVE")]
    Remove,
    #[serde(rename = "TRANSFER")]
    Transfer,
}

impl MovementOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementOperation::Add => "ADD",
            MovementOperation::Remove => "REMOVE",
            MovementOperation::Transfer => "TRANSFER",
        }
    }
}

/// Where an inventory reconciliation draws its stock from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustSource {
    /// Stock not yet assigned to any tray
    Unallocated,
    /// One specific material location
    Location,
}

impl AdjustSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustSource::Unallocated => "unallocated",
            AdjustSource::Location => "location",
        }
    }
}

/// Report photo slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    #[serde(rename = "BEFORE")]
    Before,
    #[serde(rename = "AFTER")]
    After,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Before => "BEFORE",
            ImageType::After => "AFTER",
        }
    }
}
