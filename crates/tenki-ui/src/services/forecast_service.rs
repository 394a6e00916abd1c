//! Forecast backend: fetch and render one office per selection.
//!
//! Starting a request cancels the previous one. A cancelled request sends
//! nothing; the UI state drops stale completions anyway.

use std::sync::Arc;

use tenki_core::RequestToken;
use tenki_jma::{render_report, ForecastCard, JmaClient, JmaError};

use super::{ServiceError, ServiceMessage};
use crate::app_services::AppServices;

/// Request the forecast for `office_code`.
/// Delivers `ForecastDone` tagged with `token` when complete.
pub fn request_forecast(
    services: &Arc<AppServices>,
    token: RequestToken,
    office_code: &str,
    office_name: &str,
) {
    let cancel = services.new_forecast_cancel_token();
    let office_name = office_name.to_string();

    let client = match services.jma_client() {
        Some(c) => c,
        None => {
            services.deliver(ServiceMessage::ForecastDone {
                token,
                office_name,
                result: Err(ServiceError::NotInitialized),
            });
            return;
        }
    };

    let office_code = office_code.to_string();
    let mut shutdown = services.subscribe_shutdown();
    let notifier = services.notifier();

    services.runtime().spawn(async move {
        let result = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Forecast request {} for {} cancelled", token, office_code);
                return;
            }
            _ = shutdown.recv() => return,
            result = fetch_cards(&client, &office_code) => result,
        };

        let result = result.map_err(|e| {
            tracing::error!("Failed to load forecast for {}: {}", office_code, e);
            ServiceError::from(e)
        });
        notifier.deliver(ServiceMessage::ForecastDone {
            token,
            office_name,
            result,
        });
    });
}

async fn fetch_cards(client: &JmaClient, office_code: &str) -> Result<Vec<ForecastCard>, JmaError> {
    let report = client.fetch_forecast(office_code).await?;
    let cards = render_report(&report)?;
    tracing::info!(office = office_code, cards = cards.len(), "Forecast rendered");
    Ok(cards)
}
