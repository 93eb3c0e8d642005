//! Brand Service - application service for the brand settings panel

use std::sync::Arc;

use crate::application::dto::BrandSettingsData;
use crate::application::error::ServiceError;
use crate::ports::outbound::CatalogPort;

/// Brand service for profile settings
#[derive(Clone)]
pub struct BrandService {
    catalog: Arc<dyn CatalogPort>,
}

impl BrandService {
    /// Create a new BrandService over the given port
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch the brand's current settings
    pub async fn settings(&self) -> Result<BrandSettingsData, ServiceError> {
        Ok(self.catalog.brand_settings().await?)
    }

    /// Save the settings form. Returns the settings as stored.
    pub async fn save_settings(
        &self,
        settings: &BrandSettingsData,
    ) -> Result<BrandSettingsData, ServiceError> {
        let saved = self.catalog.update_brand_settings(settings).await?;
        tracing::info!(display_name = %saved.display_name, "brand settings saved");
        Ok(saved)
    }
}
