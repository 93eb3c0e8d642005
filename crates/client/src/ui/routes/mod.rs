//! Route table for the client.

use dioxus::prelude::*;

mod dashboard;
mod home;
mod landing;
mod pricing;
mod reset_password;
mod sign_in;
mod sign_up;
mod verify_email;

pub use dashboard::{AnalyticsRoute, BrandSettingsRoute, ProductsRoute};
pub use home::HomeRoute;
pub use landing::{BrandLandingRoute, BuyerLandingRoute};
pub use pricing::PricingRoute;
pub use reset_password::ResetPasswordRoute;
pub use sign_in::SignInRoute;
pub use sign_up::SignUpRoute;
pub use verify_email::VerifyEmailRoute;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    // Marketing
    #[route("/")]
    HomeRoute {},
    #[route("/pricing")]
    PricingRoute {},
    #[route("/for-brands")]
    BrandLandingRoute {},
    #[route("/for-buyers")]
    BuyerLandingRoute {},

    // Auth
    #[route("/signin")]
    SignInRoute {},
    #[route("/signup")]
    SignUpRoute {},
    #[route("/verify/:identifier")]
    VerifyEmailRoute { identifier: String },
    #[route("/reset-password")]
    ResetPasswordRoute {},

    // Dashboard
    #[route("/dashboard/products")]
    ProductsRoute {},
    #[route("/dashboard/brand")]
    BrandSettingsRoute {},
    #[route("/dashboard/analytics")]
    AnalyticsRoute {},
}
