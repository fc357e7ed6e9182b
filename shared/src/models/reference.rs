//! Reference data for pickers: incidents and users

use serde::{Deserialize, Serialize};

/// An incident a work report can be attached to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A console user, used for attribution fields on mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}
