//! Area catalog backend: one `area.json` fetch at startup.

use std::sync::Arc;

use super::{ServiceError, ServiceMessage};
use crate::app_services::AppServices;

/// Fetch the area catalog asynchronously.
/// Delivers `CatalogLoaded` when complete. No retries.
pub fn request_catalog(services: &Arc<AppServices>) {
    let client = match services.jma_client() {
        Some(c) => c,
        None => {
            services.deliver(ServiceMessage::CatalogLoaded(Err(
                ServiceError::NotInitialized,
            )));
            return;
        }
    };

    let mut shutdown = services.subscribe_shutdown();
    let notifier = services.notifier();

    services.runtime().spawn(async move {
        let result = tokio::select! {
            _ = shutdown.recv() => {
                tracing::debug!("Catalog request abandoned on shutdown");
                return;
            }
            result = client.fetch_catalog() => result,
        };

        let result = result.map_err(|e| {
            tracing::error!("Failed to load area catalog: {}", e);
            ServiceError::catalog(e)
        });
        notifier.deliver(ServiceMessage::CatalogLoaded(result));
    });
}
