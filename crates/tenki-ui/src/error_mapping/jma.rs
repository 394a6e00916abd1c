use tenki_core::{AppError, ForecastError, NetworkError, ReqwestErrorExt};
use tenki_jma::JmaError;

/// Classify a JMA client error into the application hierarchy.
pub fn app_error_from_jma(e: JmaError) -> AppError {
    match e {
        JmaError::Network(err) => AppError::Network(err.into_network_error()),
        JmaError::Status { status, body } => AppError::Network(NetworkError::ServerError {
            status,
            message: body,
        }),
        JmaError::InvalidOfficeCode(code) => {
            AppError::Forecast(ForecastError::ForecastUnavailable(format!(
                "invalid office code {code:?}"
            )))
        }
        e if e.is_shape_error() => AppError::Forecast(ForecastError::UnexpectedShape(e.to_string())),
        other => AppError::Forecast(ForecastError::ForecastUnavailable(other.to_string())),
    }
}

/// Any failure while loading `area.json` leaves the sidebar empty.
pub fn catalog_app_error_from_jma(e: JmaError) -> AppError {
    AppError::Forecast(ForecastError::CatalogUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_server_error() {
        let err = app_error_from_jma(JmaError::Status {
            status: 500,
            body: "boom".into(),
        });
        assert!(matches!(
            err,
            AppError::Network(NetworkError::ServerError { status: 500, .. })
        ));
    }

    #[test]
    fn shape_errors_map_to_unexpected_shape() {
        for e in [
            JmaError::Parse("eof".into()),
            JmaError::EmptyResponse,
            JmaError::MissingTimeSeries,
            JmaError::MissingTimeDefine {
                area: "東京地方".into(),
                index: 2,
            },
            JmaError::InvalidTimestamp("x".into()),
            JmaError::MissingWeathers("東京地方".into()),
        ] {
            assert!(matches!(
                app_error_from_jma(e),
                AppError::Forecast(ForecastError::UnexpectedShape(_))
            ));
        }
    }

    #[test]
    fn catalog_failures_are_catalog_unavailable() {
        for e in [
            JmaError::Status {
                status: 503,
                body: "Service Unavailable".into(),
            },
            JmaError::Parse("expected value".into()),
        ] {
            let err = catalog_app_error_from_jma(e);
            assert!(matches!(
                err,
                AppError::Forecast(ForecastError::CatalogUnavailable(_))
            ));
            assert_eq!(
                err.user_message(),
                "地域一覧を取得できませんでした。アプリを再起動してください。"
            );
        }
    }

    #[test]
    fn invalid_code_is_forecast_unavailable() {
        assert!(matches!(
            app_error_from_jma(JmaError::InvalidOfficeCode("../x".into())),
            AppError::Forecast(ForecastError::ForecastUnavailable(_))
        ));
    }
}
