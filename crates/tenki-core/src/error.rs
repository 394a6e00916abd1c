//! Centralized error types for the Tenki application.
//!
//! The typed hierarchy keeps full context for logs while `user_message()`
//! gives a short, non-technical hint suitable for the sidebar or status line.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    /// Service-level errors that can be mapped from UI crates.
    #[error("Service error: {0}")]
    Service(String),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Forecast(e) => e.user_message(),
            AppError::Service(_) => "処理に失敗しました。もう一度お試しください。",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "接続できませんでした。ネットワーク接続を確認してください。"
            }
            NetworkError::Timeout => "リクエストがタイムアウトしました。",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "気象庁のサーバーで問題が発生しています。しばらくしてから再度お試しください。"
            }
            NetworkError::ServerError { .. } => "リクエストに失敗しました。",
            NetworkError::InvalidResponse(_) => "想定外の応答を受信しました。",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file: {0}")]
    Unreadable(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Unreadable(_) => "設定ファイルを読み込めませんでした。",
            ConfigError::Invalid(_) => "設定が不正です。設定ファイルを確認してください。",
            ConfigError::ParseError(_) => "設定ファイルの形式が不正です。",
        }
    }
}

/// Errors from the JMA forecast and area endpoints.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Area catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Forecast unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Service not initialized")]
    NotInitialized,
}

impl ForecastError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::CatalogUnavailable(_) => {
                "地域一覧を取得できませんでした。アプリを再起動してください。"
            }
            ForecastError::ForecastUnavailable(_) => {
                "予報を取得できませんでした。地域をもう一度選択してください。"
            }
            ForecastError::UnexpectedShape(_) => "予報データの形式が想定と異なります。",
            ForecastError::NotInitialized => "サービスが初期化されていません。",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
