use crate::services::ServiceError;
use tenki_core::{AppError, ForecastError};

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Jma { message, .. } => AppError::Service(message),
            ServiceError::NotInitialized => AppError::Forecast(ForecastError::NotInitialized),
        }
    }
}
