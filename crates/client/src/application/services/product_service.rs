//! Product Service - application service for the products panel

use std::sync::Arc;

use uuid::Uuid;

use crate::application::dto::{ProductData, ProductDraft};
use crate::application::error::ServiceError;
use crate::ports::outbound::CatalogPort;

/// Product service for the signed-in brand's catalog
#[derive(Clone)]
pub struct ProductService {
    catalog: Arc<dyn CatalogPort>,
}

impl ProductService {
    /// Create a new ProductService over the given port
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// List the brand's products
    pub async fn list_products(&self) -> Result<Vec<ProductData>, ServiceError> {
        Ok(self.catalog.list_products().await?)
    }

    /// Create a product from the panel's draft form
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<ProductData, ServiceError> {
        let created = self.catalog.create_product(draft).await?;
        tracing::info!(product_id = %created.id, name = %created.name, "product created");
        Ok(created)
    }

    /// Save edits to an existing product
    pub async fn update_product(&self, product: &ProductData) -> Result<ProductData, ServiceError> {
        Ok(self.catalog.update_product(product).await?)
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: Uuid) -> Result<(), ServiceError> {
        self.catalog.delete_product(product_id).await?;
        tracing::info!(%product_id, "product deleted");
        Ok(())
    }

    /// Flip a product's published state
    ///
    /// Returns the product as saved by the server
    pub async fn toggle_published(&self, product: &ProductData) -> Result<ProductData, ServiceError> {
        let mut updated = product.clone();
        updated.published = !updated.published;
        Ok(self.catalog.update_product(&updated).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockCatalogPort;

    fn sample_product(published: bool) -> ProductData {
        ProductData {
            id: Uuid::nil(),
            name: "Canvas Tote".into(),
            description: "Heavy cotton".into(),
            price_cents: 2400,
            published,
        }
    }

    #[tokio::test]
    async fn toggle_published_sends_the_flipped_state() {
        let mut mock = MockCatalogPort::new();
        mock.expect_update_product()
            .times(1)
            .withf(|p| !p.published)
            .returning(|p| Ok(p.clone()));
        let svc = ProductService::new(Arc::new(mock));

        let saved = svc
            .toggle_published(&sample_product(true))
            .await
            .expect("update succeeds");
        assert!(!saved.published);
    }
}
