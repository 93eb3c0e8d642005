//! Data transfer types shared between services, ports, and the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated session returned by sign-in and verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Fields collected by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A product as stored for the signed-in brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub published: bool,
}

/// Fields for creating a new product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_cents: u32,
}

/// Brand profile shown on the settings panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSettingsData {
    pub display_name: String,
    pub tagline: String,
    pub support_email: String,
    pub publicly_listed: bool,
}

/// One row of the "top products" table on the analytics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: Uuid,
    pub name: String,
    pub orders: u64,
}

/// Aggregates for the analytics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub total_views: u64,
    pub total_orders: u64,
    pub revenue_cents: u64,
    pub top_products: Vec<TopProduct>,
}

impl AnalyticsSummary {
    /// Revenue formatted for display, e.g. `$1,234.56` without the grouping.
    pub fn revenue_display(&self) -> String {
        format!(
            "${}.{:02}",
            self.revenue_cents / 100,
            self.revenue_cents % 100
        )
    }
}

impl ProductData {
    /// Price formatted for display.
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_display_pads_cents() {
        let product = ProductData {
            id: Uuid::nil(),
            name: "Tote".into(),
            description: String::new(),
            price_cents: 1905,
            published: true,
        };
        assert_eq!(product.price_display(), "$19.05");
    }
}
