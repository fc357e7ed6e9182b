//! Reference-data endpoints for pickers (incidents, users)

use async_trait::async_trait;

use shared::{Incident, User};

use super::ApiClient;
use crate::error::AppResult;

#[async_trait]
pub trait ReferenceApi: Send + Sync {
    async fn list_incidents(&self) -> AppResult<Vec<Incident>>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

#[async_trait]
impl ReferenceApi for ApiClient {
    async fn list_incidents(&self) -> AppResult<Vec<Incident>> {
        self.get_json("/incidents/incidents/", &[]).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.get_json("/users/", &[]).await
    }
}

/// Fetch incidents for a picker, degrading to an empty list on failure
///
/// Reference-data fetches never block the screen; the failure is logged and
/// the picker renders empty.
pub async fn load_incidents_or_empty<A: ReferenceApi + ?Sized>(api: &A) -> Vec<Incident> {
    match api.list_incidents().await {
        Ok(incidents) => incidents,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load incidents, picker will be empty");
            Vec::new()
        }
    }
}

/// Fetch users for a picker, degrading to an empty list on failure
pub async fn load_users_or_empty<A: ReferenceApi + ?Sized>(api: &A) -> Vec<User> {
    match api.list_users().await {
        Ok(users) => users,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load users, picker will be empty");
            Vec::new()
        }
    }
}
