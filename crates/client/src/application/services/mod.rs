//! Application services.
//!
//! Thin async use-case wrappers over the outbound ports. Each service owns
//! an `Arc<dyn Port>` so components never touch infrastructure types.

mod analytics_service;
mod auth_service;
mod brand_service;
mod product_service;

pub use analytics_service::{AnalyticsService, DEFAULT_SUMMARY_DAYS};
pub use auth_service::AuthService;
pub use brand_service::BrandService;
pub use product_service::ProductService;
