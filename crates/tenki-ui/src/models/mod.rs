pub mod app_state;

pub use app_state::{AppState, CatalogState, Selection, StatusLine, StatusTone, INITIAL_STATUS};
