//! HTTP client for the JMA `bosai` endpoints.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::types::{AreaDocument, ForecastReport, JmaError};

pub const AREA_URL: &str = "https://www.jma.go.jp/bosai/common/const/area.json";
pub const FORECAST_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast/";
const MAX_ERROR_BODY_CHARS: usize = 200;
const USER_AGENT: &str = concat!("tenki/", env!("CARGO_PKG_VERSION"));

/// Endpoint and transport settings for `JmaClient`
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub area_url: String,
    /// `{office_code}.json` is appended verbatim
    pub forecast_base_url: String,
    pub allow_invalid_certs: bool,
    /// `None` keeps the reqwest default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            area_url: AREA_URL.to_string(),
            forecast_base_url: FORECAST_BASE_URL.to_string(),
            allow_invalid_certs: true,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JmaClient {
    client: Client,
    area_url: String,
    forecast_base_url: String,
}

impl JmaClient {
    pub fn new(settings: ClientSettings) -> Result<Self, JmaError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(settings.allow_invalid_certs);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            area_url: settings.area_url,
            forecast_base_url: settings.forecast_base_url,
        })
    }

    /// URL of the forecast document for `office_code`.
    pub fn forecast_url(&self, office_code: &str) -> Result<String, JmaError> {
        if office_code.is_empty() || !office_code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(JmaError::InvalidOfficeCode(office_code.to_string()));
        }
        Ok(format!("{}{}.json", self.forecast_base_url, office_code))
    }

    /// Fetch `area.json` and build the sidebar catalog.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_catalog(&self) -> Result<Catalog, JmaError> {
        let response = self.client.get(&self.area_url).send().await?;
        let document: AreaDocument = self.handle_response(response).await?;
        let catalog = Catalog::from_document(&document);

        tracing::info!(
            centers = catalog.centers.len(),
            offices = catalog.office_count(),
            "Area catalog loaded"
        );
        Ok(catalog)
    }

    /// Fetch the short-range report (first array element) for one office.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(&self, office_code: &str) -> Result<ForecastReport, JmaError> {
        let url = self.forecast_url(office_code)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let reports: Vec<serde_json::Value> = self.handle_response(response).await?;
        let first = reports.into_iter().next().ok_or(JmaError::EmptyResponse)?;

        serde_json::from_value(first).map_err(|e| JmaError::Parse(e.to_string()))
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, JmaError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| JmaError::Parse(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "JMA request failed");
            Err(JmaError::Status {
                status: status.as_u16(),
                body: if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or_default().to_string()
                } else {
                    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
                },
            })
        }
    }
}
