//! Japan Meteorological Agency forecast data for Tenki
//!
//! Fetches the regional area catalog and per-office forecast documents from
//! the JMA `bosai` endpoints and reshapes them into display-ready cards.

pub mod catalog;
pub mod client;
pub mod forecast;
pub mod style;
pub mod text;
pub mod types;

pub use catalog::{Catalog, CenterGroup, OfficeRow, SkippedOffice};
pub use client::{ClientSettings, JmaClient};
pub use forecast::{jst_month_day, render_report, DayForecast, ForecastCard, RelativeDay, MAX_FORECAST_DAYS};
pub use style::{classify, classify_with, Rgb, StyleRule, WeatherStyle, STYLE_RULES};
pub use text::normalize;
pub use types::*;
