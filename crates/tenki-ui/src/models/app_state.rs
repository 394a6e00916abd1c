//! Explicit screen state. Every change goes through `select_office` or
//! `apply`; the egui layer never mutates fields directly.

use tenki_core::{RequestToken, RequestTracker};
use tenki_jma::{Catalog, ForecastCard};

use crate::services::{ServiceError, ServiceMessage};

pub const INITIAL_STATUS: &str = "地域を選択してください";

/// Colour class of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
    /// Shown under the status text after a failure
    pub hint: Option<&'static str>,
}

impl StatusLine {
    fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Neutral,
            hint: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed {
        message: String,
        hint: &'static str,
    },
}

/// Office the user last clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub code: String,
    pub name: String,
}

#[derive(Debug)]
pub struct AppState {
    catalog: CatalogState,
    selection: Option<Selection>,
    status: StatusLine,
    cards: Vec<ForecastCard>,
    requests: RequestTracker,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::Loading,
            selection: None,
            status: StatusLine::neutral(INITIAL_STATUS),
            cards: Vec::new(),
            requests: RequestTracker::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn cards(&self) -> &[ForecastCard] {
        &self.cards
    }

    pub fn is_loading(&self) -> bool {
        self.requests.state().is_loading()
    }

    /// Start showing `name`: clear the cards and enter the loading state.
    /// The returned token must accompany the matching request.
    pub fn select_office(&mut self, code: &str, name: &str) -> RequestToken {
        let token = self.requests.begin();
        tracing::info!("Selected office {} ({}) as request {}", name, code, token);

        self.selection = Some(Selection {
            code: code.to_string(),
            name: name.to_string(),
        });
        self.cards.clear();
        self.status = StatusLine::neutral(format!("「{}」のデータを取得中...", name));
        token
    }

    /// Apply a service result. Returns false if the message was stale.
    pub fn apply(&mut self, message: ServiceMessage) -> bool {
        match message {
            ServiceMessage::CatalogLoaded(result) => {
                self.apply_catalog(result);
                true
            }
            ServiceMessage::ForecastDone {
                token,
                office_name,
                result,
            } => self.apply_forecast(token, &office_name, result),
        }
    }

    fn apply_catalog(&mut self, result: Result<Catalog, ServiceError>) {
        self.catalog = match result {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(e) => CatalogState::Failed {
                hint: e.hint(),
                message: format!("地域一覧の取得に失敗しました: {}", e),
            },
        };
    }

    fn apply_forecast(
        &mut self,
        token: RequestToken,
        office_name: &str,
        result: Result<Vec<ForecastCard>, ServiceError>,
    ) -> bool {
        if !self.requests.finish(token, result.is_ok()) {
            return false;
        }

        match result {
            Ok(cards) => {
                self.cards = cards;
                self.status = StatusLine {
                    text: format!("{} の予報を表示中 (取得完了)", office_name),
                    tone: StatusTone::Success,
                    hint: None,
                };
            }
            Err(e) => {
                self.cards.clear();
                self.status = StatusLine {
                    text: format!("エラーが発生しました: {}", e),
                    tone: StatusTone::Error,
                    hint: Some(e.hint()),
                };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenki_jma::{DayForecast, RelativeDay, WeatherStyle};

    fn card(name: &str) -> ForecastCard {
        ForecastCard {
            area_name: name.to_string(),
            days: vec![DayForecast {
                date: "01/01".into(),
                relative: RelativeDay::Today,
                style: WeatherStyle::Clear,
                text: "晴れ".into(),
                raw: "晴れ".into(),
            }],
        }
    }

    fn done(token: RequestToken, result: Result<Vec<ForecastCard>, ServiceError>) -> ServiceMessage {
        ServiceMessage::ForecastDone {
            token,
            office_name: "東京都".into(),
            result,
        }
    }

    #[test]
    fn initial_state() {
        let state = AppState::new();
        assert_eq!(state.status().text, "地域を選択してください");
        assert_eq!(state.status().tone, StatusTone::Neutral);
        assert!(matches!(state.catalog(), CatalogState::Loading));
        assert!(!state.is_loading());
        assert!(state.cards().is_empty());
    }

    #[test]
    fn select_clears_cards_and_shows_loading() {
        let mut state = AppState::new();
        let first = state.select_office("130000", "東京都");
        state.apply(done(first, Ok(vec![card("東京地方")])));
        assert_eq!(state.cards().len(), 1);

        state.select_office("270000", "大阪府");
        assert!(state.cards().is_empty());
        assert!(state.is_loading());
        assert_eq!(state.status().text, "「大阪府」のデータを取得中...");
        assert_eq!(state.selection().map(|s| s.code.as_str()), Some("270000"));
    }

    #[test]
    fn success_shows_cards() {
        let mut state = AppState::new();
        let token = state.select_office("130000", "東京都");

        assert!(state.apply(done(token, Ok(vec![card("東京地方"), card("伊豆諸島北部")]))));
        assert_eq!(state.cards().len(), 2);
        assert!(!state.is_loading());
        assert_eq!(state.status().text, "東京都 の予報を表示中 (取得完了)");
        assert_eq!(state.status().tone, StatusTone::Success);
    }

    #[test]
    fn error_shows_status_and_no_cards() {
        let mut state = AppState::new();
        let token = state.select_office("130000", "東京都");
        let err = ServiceError::Jma {
            message: "HTTP 500: Internal Server Error".into(),
            hint: "しばらくしてから再度お試しください。",
        };

        assert!(state.apply(done(token, Err(err))));
        assert!(state.cards().is_empty());
        assert!(!state.is_loading());
        assert_eq!(
            state.status().text,
            "エラーが発生しました: HTTP 500: Internal Server Error"
        );
        assert_eq!(state.status().tone, StatusTone::Error);
        assert_eq!(state.status().hint, Some("しばらくしてから再度お試しください。"));

        state.select_office("130000", "東京都");
        assert_eq!(state.status().hint, None);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = AppState::new();
        let slow = state.select_office("130000", "東京都");
        let fast = state.select_office("270000", "大阪府");

        assert!(state.apply(ServiceMessage::ForecastDone {
            token: fast,
            office_name: "大阪府".into(),
            result: Ok(vec![card("大阪府")]),
        }));
        assert!(!state.apply(done(slow, Ok(vec![card("東京地方")]))));

        assert_eq!(state.cards()[0].area_name, "大阪府");
        assert_eq!(state.status().text, "大阪府 の予報を表示中 (取得完了)");
    }

    #[test]
    fn catalog_failure_is_kept_for_sidebar() {
        let mut state = AppState::new();
        state.apply(ServiceMessage::CatalogLoaded(Err(ServiceError::Jma {
            message: "HTTP 503: Service Unavailable".into(),
            hint: "しばらくしてから再度お試しください。",
        })));

        match state.catalog() {
            CatalogState::Failed { message, hint } => {
                assert_eq!(
                    message,
                    "地域一覧の取得に失敗しました: HTTP 503: Service Unavailable"
                );
                assert!(!hint.is_empty());
            }
            other => panic!("unexpected catalog state: {other:?}"),
        }
        assert_eq!(state.status().text, INITIAL_STATUS);
    }
}
