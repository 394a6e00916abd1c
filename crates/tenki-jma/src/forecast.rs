//! Forecast report -> display cards.

use chrono::{DateTime, FixedOffset};

use crate::style::{classify, WeatherStyle};
use crate::text::normalize;
use crate::types::{ForecastReport, JmaError};

/// Number of days shown per sub-area
pub const MAX_FORECAST_DAYS: usize = 3;

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Position label of a forecast row. Fixed by position, not by weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl RelativeDay {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Today),
            1 => Some(Self::Tomorrow),
            2 => Some(Self::DayAfterTomorrow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "今日",
            Self::Tomorrow => "明日",
            Self::DayAfterTomorrow => "明後日",
        }
    }
}

/// One row of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayForecast {
    /// `MM/DD` in JST
    pub date: String,
    pub relative: RelativeDay,
    /// Classified from the raw text
    pub style: WeatherStyle,
    /// Normalized text shown to the user
    pub text: String,
    pub raw: String,
}

impl DayForecast {
    pub fn date_label(&self) -> String {
        format!("{} ({})", self.date, self.relative.label())
    }
}

/// One card per sub-area of the office
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    pub area_name: String,
    pub days: Vec<DayForecast>,
}

impl ForecastCard {
    pub fn title(&self) -> String {
        format!("{} の予報", self.area_name)
    }

    /// Plain-text rendering of the card, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = self.title();
        for day in &self.days {
            out.push('\n');
            out.push_str(&format!(
                "{} {} {}",
                day.style.glyph(),
                day.date_label(),
                day.text
            ));
        }
        out
    }
}

/// Convert an ISO-8601 timestamp to a JST `MM/DD` string.
pub fn jst_month_day(timestamp: &str) -> Result<String, JmaError> {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS)
        .ok_or_else(|| JmaError::InvalidTimestamp("JST offset out of range".into()))?;
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| JmaError::InvalidTimestamp(format!("{timestamp}: {e}")))?;
    Ok(parsed.with_timezone(&jst).format("%m/%d").to_string())
}

/// Build every card of a report, or fail without partial output.
pub fn render_report(report: &ForecastReport) -> Result<Vec<ForecastCard>, JmaError> {
    let series = report
        .time_series
        .first()
        .ok_or(JmaError::MissingTimeSeries)?;

    series
        .areas
        .iter()
        .map(|area| -> Result<ForecastCard, JmaError> {
            let weathers = area
                .weathers
                .as_ref()
                .ok_or_else(|| JmaError::MissingWeathers(area.area.name.clone()))?;
            let days = weathers
                .iter()
                .take(MAX_FORECAST_DAYS)
                .enumerate()
                .map(|(index, raw)| -> Result<DayForecast, JmaError> {
                    let timestamp = series.time_defines.get(index).ok_or_else(|| {
                        JmaError::MissingTimeDefine {
                            area: area.area.name.clone(),
                            index,
                        }
                    })?;
                    let relative = RelativeDay::from_index(index).ok_or_else(|| {
                        JmaError::Parse(format!("no label for forecast position {index}"))
                    })?;

                    Ok(DayForecast {
                        date: jst_month_day(timestamp)?,
                        relative,
                        style: classify(raw),
                        text: normalize(raw),
                        raw: raw.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ForecastCard {
                area_name: area.area.name.clone(),
                days,
            })
        })
        .collect()
}
