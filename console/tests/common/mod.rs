//! In-memory fake of the backend API for workflow tests
//!
//! Implements the same stock side effects the server applies: movements
//! adjust location quantities, reconciliation rewrites the total, and the
//! workflow controllers re-fetch after each mutation exactly as they would
//! against the real backend.

// Each test binary uses a different slice of the fake.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use console::api::{FileUpload, MaterialsApi, ReferenceApi, ReportsApi, StockAdjustment, StorageApi};
use console::{AppError, AppResult};
use shared::{
    AdjustSource, Department, ImageType, Incident, Material, MaterialControl, MaterialLocation,
    MaterialLocationUpdate, MaterialMovement, MaterialUpdate, NewMaterial, NewMaterialLocation,
    NewMaterialMovement, ReportImage, Shelf, Tray, User, Warehouse, WorkReport,
};

#[derive(Debug, Default)]
pub struct FakeState {
    pub materials: Vec<Material>,
    pub warehouses: Vec<Warehouse>,
    pub departments: Vec<Department>,
    pub shelves: Vec<Shelf>,
    pub trays: Vec<Tray>,
    pub locations: Vec<MaterialLocation>,
    pub movements: Vec<MaterialMovement>,
    pub reports: Vec<WorkReport>,
    pub images: Vec<ReportImage>,
    pub next_id: i64,
    /// When set, `list_material_locations` fails once and clears the flag
    pub fail_next_location_fetch: bool,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 100,
                ..FakeState::default()
            }),
        }
    }

    fn next_id(state: &mut FakeState) -> i64 {
        state.next_id += 1;
        state.next_id
    }

    pub fn add_material(&self, id: i64, name: &str, quantity: i64) -> Material {
        let material = Material {
            id,
            name: name.to_string(),
            quantity,
            price: Decimal::new(150, 2),
        };
        self.state.lock().unwrap().materials.push(material.clone());
        material
    }

    /// Seed one full warehouse > department > shelf > tray chain
    pub fn add_hierarchy(&self, warehouse: i64, department: i64, shelf: i64, tray: i64) {
        let mut state = self.state.lock().unwrap();
        state.warehouses.push(Warehouse {
            id: warehouse,
            name: format!("Warehouse {}", warehouse),
            code: None,
            location: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        });
        state.departments.push(Department {
            id: department,
            warehouse,
            warehouse_name: None,
            name: format!("Department {}", department),
            code: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        });
        state.shelves.push(Shelf {
            id: shelf,
            department,
            department_name: None,
            warehouse_name: None,
            name: format!("Shelf {}", shelf),
            code: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        });
        state.trays.push(Tray {
            id: tray,
            shelf,
            shelf_name: None,
            department_name: None,
            warehouse_name: None,
            name: format!("Tray {}", tray),
            code: None,
            full_code: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        });
    }

    pub fn add_location(&self, id: i64, material: i64, tray: i64, quantity: i64) {
        self.add_location_with_minimum(id, material, tray, quantity, 0);
    }

    pub fn add_location_with_minimum(
        &self,
        id: i64,
        material: i64,
        tray: i64,
        quantity: i64,
        minimum_quantity: i64,
    ) {
        self.state.lock().unwrap().locations.push(MaterialLocation {
            id,
            material,
            tray,
            quantity,
            minimum_quantity,
            notes: None,
            material_name: None,
            tray_name: Some(format!("Tray {}", tray)),
            shelf_name: Some("Shelf A".into()),
            department_name: Some("Electrical".into()),
            warehouse_name: Some("Main".into()),
            tray_full_code: None,
            created_at: None,
            updated_at: None,
        });
    }

    pub fn fail_next_location_fetch(&self) {
        self.state.lock().unwrap().fail_next_location_fetch = true;
    }

    pub fn material(&self, id: i64) -> Material {
        self.state
            .lock()
            .unwrap()
            .materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .expect("material seeded")
    }

    pub fn location(&self, id: i64) -> MaterialLocation {
        self.state
            .lock()
            .unwrap()
            .locations
            .iter()
            .find(|loc| loc.id == id)
            .cloned()
            .expect("location seeded")
    }

    pub fn movements(&self) -> Vec<MaterialMovement> {
        self.state.lock().unwrap().movements.clone()
    }
}

#[async_trait]
impl StorageApi for FakeApi {
    async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        Ok(self.state.lock().unwrap().warehouses.clone())
    }

    async fn list_departments(&self, warehouse: i64) -> AppResult<Vec<Department>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .departments
            .iter()
            .filter(|d| d.warehouse == warehouse)
            .cloned()
            .collect())
    }

    async fn list_shelves(&self, department: i64) -> AppResult<Vec<Shelf>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .shelves
            .iter()
            .filter(|s| s.department == department)
            .cloned()
            .collect())
    }

    async fn list_trays(&self, shelf: i64) -> AppResult<Vec<Tray>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .trays
            .iter()
            .filter(|t| t.shelf == shelf)
            .cloned()
            .collect())
    }

    async fn list_material_locations(&self, material: i64) -> AppResult<Vec<MaterialLocation>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_next_location_fetch {
            state.fail_next_location_fetch = false;
            return Err(AppError::Api {
                status: 502,
                message: "Bad Gateway".into(),
            });
        }
        Ok(state
            .locations
            .iter()
            .filter(|loc| loc.material == material)
            .cloned()
            .collect())
    }

    async fn create_material_location(
        &self,
        input: &NewMaterialLocation,
    ) -> AppResult<MaterialLocation> {
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state);
        let location = MaterialLocation {
            id,
            material: input.material,
            tray: input.tray,
            quantity: input.quantity,
            minimum_quantity: input.minimum_quantity,
            notes: None,
            material_name: None,
            tray_name: None,
            shelf_name: None,
            department_name: None,
            warehouse_name: None,
            tray_full_code: None,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        state.locations.push(location.clone());
        Ok(location)
    }

    async fn update_material_location(
        &self,
        id: i64,
        input: &MaterialLocationUpdate,
    ) -> AppResult<MaterialLocation> {
        let mut state = self.state.lock().unwrap();
        let location = state
            .locations
            .iter_mut()
            .find(|loc| loc.id == id)
            .ok_or_else(|| AppError::NotFound(format!("location {}", id)))?;
        location.quantity = input.quantity;
        location.minimum_quantity = input.minimum_quantity;
        Ok(location.clone())
    }

    async fn delete_material_location(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.locations.len();
        state.locations.retain(|loc| loc.id != id);
        if state.locations.len() == before {
            return Err(AppError::NotFound(format!("location {}", id)));
        }
        Ok(())
    }

    async fn list_low_stock_locations(&self) -> AppResult<Vec<MaterialLocation>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .locations
            .iter()
            .filter(|loc| loc.is_low_stock())
            .cloned()
            .collect())
    }

    async fn create_movement(&self, input: &NewMaterialMovement) -> AppResult<MaterialMovement> {
        let mut state = self.state.lock().unwrap();

        // Same side effects the backend applies to location quantities
        if let Some(source) = input.source_location {
            let loc = state
                .locations
                .iter_mut()
                .find(|loc| loc.id == source)
                .ok_or_else(|| AppError::NotFound(format!("location {}", source)))?;
            loc.quantity -= input.quantity;
        }
        if let Some(target) = input.target_location {
            let loc = state
                .locations
                .iter_mut()
                .find(|loc| loc.id == target)
                .ok_or_else(|| AppError::NotFound(format!("location {}", target)))?;
            loc.quantity += input.quantity;
        }

        let id = Self::next_id(&mut state);
        let movement = MaterialMovement {
            id,
            material: input.material,
            material_name: None,
            source_location: input.source_location,
            target_location: input.target_location,
            quantity: input.quantity,
            operation: input.operation,
            timestamp: Utc::now(),
            user: 1,
            user_name: None,
            notes: input.notes.clone(),
            material_control: None,
        };
        state.movements.push(movement.clone());
        Ok(movement)
    }

    async fn list_movements(&self, material: Option<i64>) -> AppResult<Vec<MaterialMovement>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .movements
            .iter()
            .filter(|m| material.map_or(true, |id| m.material == id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MaterialsApi for FakeApi {
    async fn list_materials(&self) -> AppResult<Vec<Material>> {
        Ok(self.state.lock().unwrap().materials.clone())
    }

    async fn get_material(&self, id: i64) -> AppResult<Material> {
        self.state
            .lock()
            .unwrap()
            .materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("material {}", id)))
    }

    async fn create_material(&self, input: &NewMaterial) -> AppResult<Material> {
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state);
        let material = Material {
            id,
            name: input.name.clone(),
            quantity: input.quantity,
            price: input.price,
        };
        state.materials.push(material.clone());
        Ok(material)
    }

    async fn update_material(
        &self,
        id: i64,
        input: &MaterialUpdate,
        _invoice: Option<console::api::FileUpload>,
    ) -> AppResult<Material> {
        let mut state = self.state.lock().unwrap();
        let material = state
            .materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("material {}", id)))?;
        material.name = input.name.clone();
        material.quantity = input.quantity;
        material.price = input.price;
        Ok(material.clone())
    }

    async fn delete_material(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.materials.len();
        state.materials.retain(|m| m.id != id);
        if state.materials.len() == before {
            return Err(AppError::NotFound(format!("material {}", id)));
        }
        Ok(())
    }

    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> AppResult<Material> {
        let mut state = self.state.lock().unwrap();
        let current = state
            .materials
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.quantity)
            .ok_or_else(|| AppError::NotFound(format!("material {}", id)))?;
        let delta = adjustment.target_stock - current;

        if adjustment.source == AdjustSource::Location {
            let location_id = adjustment.location_id.ok_or_else(|| AppError::Api {
                status: 400,
                message: "location_id is required".into(),
            })?;
            let loc = state
                .locations
                .iter_mut()
                .find(|loc| loc.id == location_id)
                .ok_or_else(|| AppError::NotFound(format!("location {}", location_id)))?;
            loc.quantity += delta;
        }

        let material = state
            .materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("material {}", id)))?;
        material.quantity = adjustment.target_stock;
        Ok(material.clone())
    }

    async fn list_material_controls(&self) -> AppResult<Vec<MaterialControl>> {
        Ok(Vec::new())
    }

    async fn material_history(&self, _id: i64) -> AppResult<Vec<MaterialControl>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ReportsApi for FakeApi {
    async fn list_reports(&self) -> AppResult<Vec<WorkReport>> {
        Ok(self.state.lock().unwrap().reports.clone())
    }

    async fn get_report(&self, id: i64) -> AppResult<WorkReport> {
        self.state
            .lock()
            .unwrap()
            .reports
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("report {}", id)))
    }

    async fn create_report(&self, report: &WorkReport) -> AppResult<WorkReport> {
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state);
        let mut stored = report.clone();
        stored.id = Some(id);
        state.reports.push(stored.clone());
        Ok(stored)
    }

    async fn update_report(&self, id: i64, report: &WorkReport) -> AppResult<WorkReport> {
        let mut state = self.state.lock().unwrap();
        let slot = state
            .reports
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("report {}", id)))?;
        let mut stored = report.clone();
        stored.id = Some(id);
        *slot = stored.clone();
        Ok(stored)
    }

    async fn upload_report_images(
        &self,
        image_type: ImageType,
        files: Vec<FileUpload>,
    ) -> AppResult<Vec<ReportImage>> {
        let mut state = self.state.lock().unwrap();
        let mut created = Vec::with_capacity(files.len());
        for file in files {
            let id = Self::next_id(&mut state);
            let image = ReportImage {
                id,
                image: format!("/media/reports/{}", file.filename),
                description: String::new(),
                image_type,
            };
            state.images.push(image.clone());
            created.push(image);
        }
        Ok(created)
    }
}

#[async_trait]
impl ReferenceApi for FakeApi {
    async fn list_incidents(&self) -> AppResult<Vec<Incident>> {
        Ok(Vec::new())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(Vec::new())
    }
}
