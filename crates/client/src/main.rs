//! Marque desktop client - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marque_client::infrastructure::{ApiAdapter, DEFAULT_API_URL};
use marque_client::ports::outbound::{AuthPort, CatalogPort};
use marque_client::presentation::Services;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marque_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marque client");

    let api_url = std::env::var("MARQUE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::info!(%api_url, "using API base URL");

    let adapter = Arc::new(ApiAdapter::new(&api_url));
    let auth: Arc<dyn AuthPort> = adapter.clone();
    let catalog: Arc<dyn CatalogPort> = adapter;

    dioxus::LaunchBuilder::new()
        .with_context(Services::new(auth, catalog))
        .launch(marque_client::ui::app);
}
