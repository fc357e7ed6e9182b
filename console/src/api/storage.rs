//! Storage hierarchy, allocation and movement endpoints

use async_trait::async_trait;

use shared::{
    Department, MaterialLocation, MaterialLocationUpdate, MaterialMovement, NewMaterialLocation,
    NewMaterialMovement, Shelf, StorageNodeInput, Tray, Warehouse,
};

use super::ApiClient;
use crate::error::AppResult;

/// Storage endpoints consumed by the workflow controllers
#[async_trait]
pub trait StorageApi: Send + Sync {
    async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>>;
    async fn list_departments(&self, warehouse: i64) -> AppResult<Vec<Department>>;
    async fn list_shelves(&self, department: i64) -> AppResult<Vec<Shelf>>;
    async fn list_trays(&self, shelf: i64) -> AppResult<Vec<Tray>>;

    /// All allocations for one material
    async fn list_material_locations(&self, material: i64) -> AppResult<Vec<MaterialLocation>>;
    async fn create_material_location(
        &self,
        input: &NewMaterialLocation,
    ) -> AppResult<MaterialLocation>;
    async fn update_material_location(
        &self,
        id: i64,
        input: &MaterialLocationUpdate,
    ) -> AppResult<MaterialLocation>;
    async fn delete_material_location(&self, id: i64) -> AppResult<()>;

    /// Allocations at or below their configured minimum
    async fn list_low_stock_locations(&self) -> AppResult<Vec<MaterialLocation>>;

    async fn create_movement(&self, input: &NewMaterialMovement) -> AppResult<MaterialMovement>;
    async fn list_movements(&self, material: Option<i64>) -> AppResult<Vec<MaterialMovement>>;
}

#[async_trait]
impl StorageApi for ApiClient {
    async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        self.get_json("/storage/warehouses/", &[]).await
    }

    async fn list_departments(&self, warehouse: i64) -> AppResult<Vec<Department>> {
        self.get_json(
            "/storage/departments/",
            &[("warehouse", warehouse.to_string())],
        )
        .await
    }

    async fn list_shelves(&self, department: i64) -> AppResult<Vec<Shelf>> {
        self.get_json(
            "/storage/shelves/",
            &[("department", department.to_string())],
        )
        .await
    }

    async fn list_trays(&self, shelf: i64) -> AppResult<Vec<Tray>> {
        self.get_json("/storage/trays/", &[("shelf", shelf.to_string())])
            .await
    }

    async fn list_material_locations(&self, material: i64) -> AppResult<Vec<MaterialLocation>> {
        self.get_json(
            "/storage/locations/",
            &[("material", material.to_string())],
        )
        .await
    }

    async fn create_material_location(
        &self,
        input: &NewMaterialLocation,
    ) -> AppResult<MaterialLocation> {
        self.post_json("/storage/locations/", input).await
    }

    async fn update_material_location(
        &self,
        id: i64,
        input: &MaterialLocationUpdate,
    ) -> AppResult<MaterialLocation> {
        self.put_json(&format!("/storage/locations/{}/", id), input)
            .await
    }

    async fn delete_material_location(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/storage/locations/{}/", id)).await
    }

    async fn list_low_stock_locations(&self) -> AppResult<Vec<MaterialLocation>> {
        self.get_json("/storage/locations/low_stock/", &[]).await
    }

    async fn create_movement(&self, input: &NewMaterialMovement) -> AppResult<MaterialMovement> {
        self.post_json("/storage/movements/", input).await
    }

    async fn list_movements(&self, material: Option<i64>) -> AppResult<Vec<MaterialMovement>> {
        let query = match material {
            Some(id) => vec![("material", id.to_string())],
            None => Vec::new(),
        };
        self.get_json("/storage/movements/", &query).await
    }
}

/// Hierarchy CRUD, used by the warehouse/department/shelf/tray forms
impl ApiClient {
    /// Allocations on one tray, for the tray detail screen
    pub async fn list_tray_locations(&self, tray: i64) -> AppResult<Vec<MaterialLocation>> {
        self.get_json("/storage/locations/", &[("tray", tray.to_string())])
            .await
    }

    pub async fn create_warehouse(&self, input: &StorageNodeInput) -> AppResult<Warehouse> {
        self.post_json("/storage/warehouses/", input).await
    }

    pub async fn update_warehouse(&self, id: i64, input: &StorageNodeInput) -> AppResult<Warehouse> {
        self.put_json(&format!("/storage/warehouses/{}/", id), input)
            .await
    }

    pub async fn delete_warehouse(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/storage/warehouses/{}/", id)).await
    }

    pub async fn create_department(&self, input: &StorageNodeInput) -> AppResult<Department> {
        self.post_json("/storage/departments/", input).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        input: &StorageNodeInput,
    ) -> AppResult<Department> {
        self.put_json(&format!("/storage/departments/{}/", id), input)
            .await
    }

    pub async fn delete_department(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/storage/departments/{}/", id)).await
    }

    pub async fn create_shelf(&self, input: &StorageNodeInput) -> AppResult<Shelf> {
        self.post_json("/storage/shelves/", input).await
    }

    pub async fn update_shelf(&self, id: i64, input: &StorageNodeInput) -> AppResult<Shelf> {
        self.put_json(&format!("/storage/shelves/{}/", id), input)
            .await
    }

    pub async fn delete_shelf(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/storage/shelves/{}/", id)).await
    }

    pub async fn create_tray(&self, input: &StorageNodeInput) -> AppResult<Tray> {
        self.post_json("/storage/trays/", input).await
    }

    pub async fn update_tray(&self, id: i64, input: &StorageNodeInput) -> AppResult<Tray> {
        self.put_json(&format!("/storage/trays/{}/", id), input)
            .await
    }

    pub async fn delete_tray(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/storage/trays/{}/", id)).await
    }
}
