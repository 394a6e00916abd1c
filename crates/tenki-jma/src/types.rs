use std::collections::BTreeMap;

use serde::Deserialize;

/// `area.json`: the regional catalog published by JMA.
///
/// Only `centers` and `offices` are read; the finer `class10s`/`class15s`/
/// `class20s` levels are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaDocument {
    #[serde(default)]
    pub centers: BTreeMap<String, CenterEntry>,
    #[serde(default)]
    pub offices: BTreeMap<String, OfficeEntry>,
}

/// Regional center (e.g. 関東甲信地方) grouping several offices
#[derive(Debug, Clone, Deserialize)]
pub struct CenterEntry {
    pub name: String,
    #[serde(rename = "enName", default)]
    pub en_name: Option<String>,
    #[serde(rename = "officeName", default)]
    pub office_name: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Forecast-reporting office (e.g. 東京都)
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeEntry {
    pub name: String,
    #[serde(rename = "enName", default)]
    pub en_name: Option<String>,
    #[serde(rename = "officeName", default)]
    pub office_name: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// First element of `forecast/{office}.json`: the short-range report.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastReport {
    #[serde(rename = "publishingOffice", default)]
    pub publishing_office: Option<String>,
    #[serde(rename = "reportDatetime", default)]
    pub report_datetime: Option<String>,
    #[serde(rename = "timeSeries", default)]
    pub time_series: Vec<TimeSeries>,
}

/// One block of the report; the first carries the weather texts.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeries {
    /// ISO-8601 timestamps shared by every area of this block
    #[serde(rename = "timeDefines", default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<AreaSeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaSeries {
    pub area: AreaRef,
    /// Raw weather texts, one per entry of `time_defines`. Only the first
    /// series carries them; precipitation and temperature blocks do not.
    #[serde(default)]
    pub weathers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaRef {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// JMA client and data-shaping errors
#[derive(Debug, thiserror::Error)]
pub enum JmaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Forecast response is empty")]
    EmptyResponse,
    #[error("Forecast report has no time series")]
    MissingTimeSeries,
    #[error("No timestamp for {area} at position {index}")]
    MissingTimeDefine { area: String, index: usize },
    #[error("No weather texts for {0}")]
    MissingWeathers(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid office code: {0:?}")]
    InvalidOfficeCode(String),
}

impl JmaError {
    /// True for errors caused by the payload rather than the transport.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::EmptyResponse
                | Self::MissingTimeSeries
                | Self::MissingTimeDefine { .. }
                | Self::MissingWeathers(_)
                | Self::InvalidTimestamp(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_document_ignores_unknown_levels() {
        let doc: AreaDocument = serde_json::from_value(serde_json::json!({
            "centers": {
                "010300": {"name": "関東甲信地方", "enName": "Kanto Koshin", "officeName": "気象庁", "children": ["130000"]}
            },
            "offices": {
                "130000": {"name": "東京都", "enName": "Tokyo", "officeName": "気象庁", "parent": "010300", "children": ["130010"]}
            },
            "class10s": {"130010": {"name": "東京地方"}}
        }))
        .unwrap();

        assert_eq!(doc.centers["010300"].children, vec!["130000"]);
        assert_eq!(doc.offices["130000"].name, "東京都");
        assert_eq!(doc.offices["130000"].parent.as_deref(), Some("010300"));
    }

    #[test]
    fn test_area_document_missing_maps_default_empty() {
        let doc: AreaDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.centers.is_empty());
        assert!(doc.offices.is_empty());
    }

    #[test]
    fn test_area_series_without_weathers() {
        let series: TimeSeries = serde_json::from_value(serde_json::json!({
            "timeDefines": ["2024-01-01T06:00:00+09:00"],
            "areas": [{"area": {"name": "東京地方", "code": "130010"}, "pops": ["10"]}]
        }))
        .unwrap();

        assert!(series.areas[0].weathers.is_none());
        assert_eq!(series.areas[0].area.code.as_deref(), Some("130010"));
    }

    #[test]
    fn test_shape_error_classification() {
        assert!(JmaError::EmptyResponse.is_shape_error());
        assert!(JmaError::InvalidTimestamp("x".into()).is_shape_error());
        assert!(JmaError::MissingWeathers("東京地方".into()).is_shape_error());
        assert!(!JmaError::Status {
            status: 500,
            body: String::new()
        }
        .is_shape_error());
        assert!(!JmaError::InvalidOfficeCode("../x".into()).is_shape_error());
    }

    #[test]
    fn test_status_error_display_mentions_code() {
        let err = JmaError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert!(err.to_string().contains("500"));
    }
}
