//! Maintenance/incident work-report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ImageType;

/// A material line item attached to a work report
///
/// `location_id`/`location_name` record the tray the stock was drawn from;
/// they are chosen through the location selector before the line is staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsed {
    pub material: i64,
    #[serde(default)]
    pub material_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub location_name: Option<String>,
}

/// A technician assigned to a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTechnician {
    pub technician: i64,
    #[serde(default)]
    pub technician_name: Option<String>,
}

/// An uploaded report photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportImage {
    pub id: i64,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub image_type: ImageType,
}

/// A maintenance/incident work report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkReport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub incident: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hours_worked: Option<i64>,
    #[serde(default)]
    pub technicians: Vec<ReportTechnician>,
    #[serde(default)]
    pub materials_used: Vec<MaterialUsed>,
    #[serde(default)]
    pub before_images: Vec<ReportImage>,
    #[serde(default)]
    pub after_images: Vec<ReportImage>,
}
