//! Material catalog, audit log and stock-adjustment endpoints

use async_trait::async_trait;
use reqwest::multipart::Form;

use shared::{
    AdjustSource, Material, MaterialControl, MaterialUpdate, NewMaterial,
};

use super::{ApiClient, FileUpload};
use crate::error::AppResult;

/// Payload for the inventory reconciliation ("cuadre") endpoint
///
/// Sent as a multipart form: `target_stock`, `source`, optional
/// `location_id` and `notes`.
#[derive(Debug, Clone)]
pub struct StockAdjustment {
    pub target_stock: i64,
    pub source: AdjustSource,
    pub location_id: Option<i64>,
    pub notes: Option<String>,
}

impl StockAdjustment {
    fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("target_stock", self.target_stock.to_string())
            .text("source", self.source.as_str());
        if let Some(location_id) = self.location_id {
            form = form.text("location_id", location_id.to_string());
        }
        if let Some(notes) = self.notes {
            form = form.text("notes", notes);
        }
        form
    }
}

/// Material endpoints consumed by the workflow controllers
#[async_trait]
pub trait MaterialsApi: Send + Sync {
    async fn list_materials(&self) -> AppResult<Vec<Material>>;
    async fn get_material(&self, id: i64) -> AppResult<Material>;
    async fn create_material(&self, input: &NewMaterial) -> AppResult<Material>;

    /// Update a material, optionally attaching a purchase-invoice image
    /// (multipart when an invoice is present, plain JSON otherwise)
    async fn update_material(
        &self,
        id: i64,
        input: &MaterialUpdate,
        invoice: Option<FileUpload>,
    ) -> AppResult<Material>;

    async fn delete_material(&self, id: i64) -> AppResult<()>;

    /// Reconcile total stock to an explicit target value
    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> AppResult<Material>;

    /// Append-only audit log, read-only from the console
    async fn list_material_controls(&self) -> AppResult<Vec<MaterialControl>>;

    /// Audit entries for one material
    async fn material_history(&self, id: i64) -> AppResult<Vec<MaterialControl>>;
}

#[async_trait]
impl MaterialsApi for ApiClient {
    async fn list_materials(&self) -> AppResult<Vec<Material>> {
        self.get_json("/materials/materials/", &[]).await
    }

    async fn get_material(&self, id: i64) -> AppResult<Material> {
        self.get_json(&format!("/materials/materials/{}/", id), &[])
            .await
    }

    async fn create_material(&self, input: &NewMaterial) -> AppResult<Material> {
        self.post_json("/materials/materials/", input).await
    }

    async fn update_material(
        &self,
        id: i64,
        input: &MaterialUpdate,
        invoice: Option<FileUpload>,
    ) -> AppResult<Material> {
        let path = format!("/materials/materials/{}/", id);
        match invoice {
            None => self.put_json(&path, input).await,
            Some(file) => {
                let mut form = Form::new()
                    .text("name", input.name.clone())
                    .text("quantity", input.quantity.to_string())
                    .text("price", input.price.to_string());
                if let Some(operation) = input.operation {
                    form = form.text("operation", operation.as_str());
                }
                if let Some(change) = input.quantity_change {
                    form = form.text("quantity_change", change.to_string());
                }
                if let Some(reason) = input.reason {
                    form = form.text("reason", reason.as_str());
                }
                form = form.part("invoice_image", file.into_part()?);
                self.put_multipart(&path, form).await
            }
        }
    }

    async fn delete_material(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("/materials/materials/{}/", id)).await
    }

    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> AppResult<Material> {
        self.post_multipart(
            &format!("/materials/materials/{}/adjust_stock/", id),
            adjustment.into_form(),
        )
        .await
    }

    async fn list_material_controls(&self) -> AppResult<Vec<MaterialControl>> {
        self.get_json("/materials/control/", &[]).await
    }

    async fn material_history(&self, id: i64) -> AppResult<Vec<MaterialControl>> {
        self.get_json(&format!("/materials/material-history/{}/", id), &[])
            .await
    }
}
