//! Analytics Service - application service for the analytics panel

use std::sync::Arc;

use crate::application::dto::AnalyticsSummary;
use crate::application::error::ServiceError;
use crate::ports::outbound::CatalogPort;

/// Default window shown when the panel opens.
pub const DEFAULT_SUMMARY_DAYS: u32 = 30;

/// Analytics service for the dashboard
#[derive(Clone)]
pub struct AnalyticsService {
    catalog: Arc<dyn CatalogPort>,
}

impl AnalyticsService {
    /// Create a new AnalyticsService over the given port
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Aggregates for the trailing `days` days
    pub async fn summary(&self, days: u32) -> Result<AnalyticsSummary, ServiceError> {
        Ok(self.catalog.analytics_summary(days).await?)
    }
}
