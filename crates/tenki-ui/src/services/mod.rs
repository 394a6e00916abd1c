//! Background services. Network work runs on the `AppServices` runtime and
//! results come back to the UI thread as `ServiceMessage`s.

pub mod catalog_service;
pub mod forecast_service;

use tenki_core::{AppError, RequestToken};
use tenki_jma::{Catalog, ForecastCard, JmaError};

use crate::error_mapping::{app_error_from_jma, catalog_app_error_from_jma};

pub use catalog_service::request_catalog;
pub use forecast_service::request_forecast;

/// Error carried over the service channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A JMA request or response failed
    Jma {
        message: String,
        /// Short non-technical hint for the user
        hint: &'static str,
    },
    NotInitialized,
}

impl ServiceError {
    /// Error for a failed `area.json` load.
    pub fn catalog(e: JmaError) -> Self {
        let message = e.to_string();
        let hint = catalog_app_error_from_jma(e).user_message();
        ServiceError::Jma { message, hint }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ServiceError::Jma { hint, .. } => hint,
            ServiceError::NotInitialized => AppError::from(self.clone()).user_message(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Jma { message, .. } => write!(f, "{}", message),
            ServiceError::NotInitialized => write!(f, "JMA client not initialized"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<JmaError> for ServiceError {
    fn from(e: JmaError) -> Self {
        let message = e.to_string();
        let hint = app_error_from_jma(e).user_message();
        ServiceError::Jma { message, hint }
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum ServiceMessage {
    /// Result of loading `area.json`
    CatalogLoaded(Result<Catalog, ServiceError>),
    /// Result of one forecast request
    ForecastDone {
        token: RequestToken,
        office_name: String,
        result: Result<Vec<ForecastCard>, ServiceError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display() {
        let err = ServiceError::from(JmaError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        });
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert!(format!("{}", ServiceError::NotInitialized).contains("not initialized"));
    }

    #[test]
    fn hint_comes_from_error_hierarchy() {
        let server = ServiceError::from(JmaError::Status {
            status: 503,
            body: String::new(),
        });
        let shape = ServiceError::from(JmaError::EmptyResponse);

        assert!(!server.hint().is_empty());
        assert_ne!(server.hint(), shape.hint());
        assert!(!ServiceError::NotInitialized.hint().is_empty());
    }

    #[test]
    fn catalog_error_uses_catalog_hint() {
        let err = ServiceError::catalog(JmaError::Parse("EOF while parsing".into()));
        assert_eq!(err.to_string(), "Parse error: EOF while parsing");
        assert_eq!(
            err.hint(),
            "地域一覧を取得できませんでした。アプリを再起動してください。"
        );
    }
}
