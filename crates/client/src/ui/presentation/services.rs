//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` to access services without depending on
//! infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{AnalyticsService, AuthService, BrandService, ProductService};
use crate::ports::outbound::{AuthPort, CatalogPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub product: Arc<ProductService>,
    pub brand: Arc<BrandService>,
    pub analytics: Arc<AnalyticsService>,
}

impl Services {
    /// Create all services with the given ports
    pub fn new(auth: Arc<dyn AuthPort>, catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(auth)),
            product: Arc::new(ProductService::new(catalog.clone())),
            brand: Arc::new(BrandService::new(catalog.clone())),
            analytics: Arc::new(AnalyticsService::new(catalog)),
        }
    }
}

/// Hook to access the service bundle from Dioxus context
pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_auth_service() -> Arc<AuthService> {
    use_services().auth
}

pub fn use_product_service() -> Arc<ProductService> {
    use_services().product
}

pub fn use_brand_service() -> Arc<BrandService> {
    use_services().brand
}

pub fn use_analytics_service() -> Arc<AnalyticsService> {
    use_services().analytics
}
