//! Work-report and image-upload endpoints

use async_trait::async_trait;
use reqwest::multipart::Form;

use shared::{ImageType, ReportImage, WorkReport};

use super::{ApiClient, FileUpload};
use crate::error::AppResult;

/// Report endpoints consumed by the report form
#[async_trait]
pub trait ReportsApi: Send + Sync {
    async fn list_reports(&self) -> AppResult<Vec<WorkReport>>;
    async fn get_report(&self, id: i64) -> AppResult<WorkReport>;
    async fn create_report(&self, report: &WorkReport) -> AppResult<WorkReport>;
    async fn update_report(&self, id: i64, report: &WorkReport) -> AppResult<WorkReport>;

    /// Upload report photos; the backend responds with the stored image
    /// records to stage on the form
    async fn upload_report_images(
        &self,
        image_type: ImageType,
        files: Vec<FileUpload>,
    ) -> AppResult<Vec<ReportImage>>;
}

#[async_trait]
impl ReportsApi for ApiClient {
    async fn list_reports(&self) -> AppResult<Vec<WorkReport>> {
        self.get_json("/reports/reports/", &[]).await
    }

    async fn get_report(&self, id: i64) -> AppResult<WorkReport> {
        self.get_json(&format!("/reports/reports/{}/", id), &[])
            .await
    }

    async fn create_report(&self, report: &WorkReport) -> AppResult<WorkReport> {
        self.post_json("/reports/reports/", report).await
    }

    async fn update_report(&self, id: i64, report: &WorkReport) -> AppResult<WorkReport> {
        self.put_json(&format!("/reports/reports/{}/", id), report)
            .await
    }

    async fn upload_report_images(
        &self,
        image_type: ImageType,
        files: Vec<FileUpload>,
    ) -> AppResult<Vec<ReportImage>> {
        let mut form = Form::new().text("image_type", image_type.as_str());
        for file in files {
            form = form.part("images", file.into_part()?);
        }
        self.post_multipart("/reports/upload-images/", form).await
    }
}
