//! Weather text -> display style, driven by an ordered rule table.

use serde::Serialize;

/// Background color for a forecast row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Display category derived from a raw weather sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherStyle {
    Snow,
    Thunder,
    Rain,
    Cloudy,
    Clear,
    #[default]
    Fallback,
}

impl WeatherStyle {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Snow => "❄️",
            Self::Thunder => "⛈️",
            Self::Rain => "🌧️",
            Self::Cloudy => "☁️",
            Self::Clear => "☀️",
            Self::Fallback => "🌤️",
        }
    }

    /// Material-palette "50" tints
    pub fn background(self) -> Rgb {
        match self {
            Self::Snow => Rgb(0xE0, 0xF7, 0xFA),
            Self::Thunder => Rgb(0xFF, 0xF8, 0xE1),
            Self::Rain => Rgb(0xE3, 0xF2, 0xFD),
            Self::Cloudy => Rgb(0xFA, 0xFA, 0xFA),
            Self::Clear => Rgb(0xFF, 0xF3, 0xE0),
            Self::Fallback => Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Material icon name
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Snow => "snowing",
            Self::Thunder => "thunderstorm",
            Self::Rain => "water_drop",
            Self::Cloudy => "cloud",
            Self::Clear => "sunny",
            Self::Fallback => "wb_sunny_outlined",
        }
    }
}

/// Matches when the text contains any of `fragments`
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub fragments: &'static [&'static str],
    pub style: WeatherStyle,
}

impl StyleRule {
    pub fn matches(&self, text: &str) -> bool {
        self.fragments.iter().any(|f| text.contains(f))
    }
}

/// Priority order: first match wins.
pub const STYLE_RULES: &[StyleRule] = &[
    StyleRule {
        fragments: &["雪"],
        style: WeatherStyle::Snow,
    },
    StyleRule {
        fragments: &["雷"],
        style: WeatherStyle::Thunder,
    },
    StyleRule {
        fragments: &["雨"],
        style: WeatherStyle::Rain,
    },
    StyleRule {
        fragments: &["曇", "くもり"],
        style: WeatherStyle::Cloudy,
    },
    StyleRule {
        fragments: &["晴"],
        style: WeatherStyle::Clear,
    },
];

/// Classify with the built-in table.
pub fn classify(text: &str) -> WeatherStyle {
    classify_with(STYLE_RULES, text)
}

pub fn classify_with(rules: &[StyleRule], text: &str) -> WeatherStyle {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.style)
        .unwrap_or_default()
}
