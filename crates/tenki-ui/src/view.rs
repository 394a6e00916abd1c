//! Pure projection of `AppState` into what the window draws.

use tenki_jma::Rgb;

use crate::models::{AppState, CatalogState, StatusTone};

pub const WINDOW_TITLE: &str = "気象庁高度天気予報アプリ";
pub const SIDEBAR_HEADING: &str = "地域一覧";
pub const MAIN_HEADING: &str = "気象庁天気予報";
const CATALOG_LOADING: &str = "地域一覧を読み込み中...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub sidebar: Sidebar,
    pub header: Header,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub heading: &'static str,
    pub body: SidebarBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarBody {
    Loading(&'static str),
    Groups(Vec<GroupView>),
    Failed { message: String, hint: &'static str },
}

/// One collapsible center group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub code: String,
    pub name: String,
    pub offices: Vec<OfficeRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeRowView {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub heading: &'static str,
    pub status: String,
    pub tone: StatusTone,
    pub hint: Option<&'static str>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub rows: Vec<DayRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRowView {
    pub glyph: &'static str,
    pub date_label: String,
    pub text: String,
    pub icon: &'static str,
    pub background: Rgb,
}

/// User actions reported by the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectOffice { code: String, name: String },
}

pub fn render(state: &AppState) -> Screen {
    let selected = state.selection().map(|s| s.code.as_str());

    let body = match state.catalog() {
        CatalogState::Loading => SidebarBody::Loading(CATALOG_LOADING),
        CatalogState::Failed { message, hint } => SidebarBody::Failed {
            message: message.clone(),
            hint: *hint,
        },
        CatalogState::Ready(catalog) => SidebarBody::Groups(
            catalog
                .centers
                .iter()
                .map(|center| GroupView {
                    code: center.code.clone(),
                    name: center.name.clone(),
                    offices: center
                        .offices
                        .iter()
                        .map(|office| OfficeRowView {
                            code: office.code.clone(),
                            name: office.name.clone(),
                            selected: selected == Some(office.code.as_str()),
                        })
                        .collect(),
                })
                .collect(),
        ),
    };

    let cards = state
        .cards()
        .iter()
        .map(|card| CardView {
            title: card.title(),
            rows: card
                .days
                .iter()
                .map(|day| DayRowView {
                    glyph: day.style.glyph(),
                    date_label: day.date_label(),
                    text: day.text.clone(),
                    icon: day.style.icon_name(),
                    background: day.style.background(),
                })
                .collect(),
        })
        .collect();

    Screen {
        sidebar: Sidebar {
            heading: SIDEBAR_HEADING,
            body,
        },
        header: Header {
            heading: MAIN_HEADING,
            status: state.status().text.clone(),
            tone: state.status().tone,
            hint: state.status().hint,
            loading: state.is_loading(),
        },
        cards,
    }
}
