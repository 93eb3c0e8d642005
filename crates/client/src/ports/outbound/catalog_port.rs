//! Catalog Port - dashboard data for the signed-in brand
//!
//! Products, brand settings, and analytics. All calls are scoped to the
//! session the adapter holds after a successful sign-in or verification.

use uuid::Uuid;

use crate::application::dto::{AnalyticsSummary, BrandSettingsData, ProductData, ProductDraft};
use crate::ports::outbound::ApiError;

/// Port for dashboard CRUD and analytics calls
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list_products(&self) -> Result<Vec<ProductData>, ApiError>;

    async fn create_product(&self, draft: &ProductDraft) -> Result<ProductData, ApiError>;

    async fn update_product(&self, product: &ProductData) -> Result<ProductData, ApiError>;

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ApiError>;

    async fn brand_settings(&self) -> Result<BrandSettingsData, ApiError>;

    async fn update_brand_settings(
        &self,
        settings: &BrandSettingsData,
    ) -> Result<BrandSettingsData, ApiError>;

    /// Aggregates for the trailing `days` days.
    async fn analytics_summary(&self, days: u32) -> Result<AnalyticsSummary, ApiError>;
}
